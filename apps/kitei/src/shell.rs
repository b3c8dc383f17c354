use std::io::{self, BufRead, Write};

use kitei_service::{Combinator, KiteiService, SearchRequest, SimilarRequest};

use crate::{Format, render};

const HELP: &str = "\
commands:
  search <keywords>     literal search, keywords split by the configured separator
  similar <text>        similarity ranking
  mode all|any          keyword combinator
  category [a,b,...]    restrict literal search to categories; no argument clears
  categories            list the categories of the loaded table
  clear                 reset mode and categories
  help                  show this message
  quit                  leave the shell
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellCommand {
	Search(String),
	Similar(String),
	Mode(Combinator),
	Category(Vec<String>),
	Categories,
	Clear,
	Help,
	Quit,
	Empty,
}
impl ShellCommand {
	pub fn parse(line: &str, separator: &str) -> Result<Self, String> {
		let line = line.trim();

		if line.is_empty() {
			return Ok(Self::Empty);
		}

		let (head, rest) = match line.split_once(char::is_whitespace) {
			Some((head, rest)) => (head, rest.trim()),
			None => (line, ""),
		};

		match head {
			"search" | "s" => Ok(Self::Search(rest.to_string())),
			"similar" | "q" => Ok(Self::Similar(rest.to_string())),
			"mode" => rest.parse().map(Self::Mode),
			"category" | "c" => Ok(Self::Category(kitei_service::parse_keywords(rest, separator))),
			"categories" => Ok(Self::Categories),
			"clear" => Ok(Self::Clear),
			"help" | "?" => Ok(Self::Help),
			"quit" | "exit" => Ok(Self::Quit),
			other => Err(format!("Unknown command {other:?}; type help for a list.")),
		}
	}
}

/// Session toggles that persist between requests, like the sidebar of an interactive page.
#[derive(Clone, Debug)]
pub struct ShellState {
	pub combinator: Combinator,
	pub categories: Vec<String>,
}
impl ShellState {
	pub fn new(service: &KiteiService) -> Self {
		Self { combinator: service.default_combinator(), categories: Vec::new() }
	}
}

/// Reads one command per line and answers each against the already fitted service.
pub fn run(
	service: &KiteiService,
	input: impl BufRead,
	out: &mut impl Write,
	format: Format,
) -> io::Result<()> {
	let separator = service.cfg.search.keyword_separator.as_str();
	let mut state = ShellState::new(service);

	for line in input.lines() {
		let line = line?;
		let command = match ShellCommand::parse(&line, separator) {
			Ok(command) => command,
			Err(message) => {
				writeln!(out, "{message}")?;

				continue;
			},
		};

		match command {
			ShellCommand::Search(raw) => {
				let response = service.search(SearchRequest {
					keywords: service.parse_keywords(&raw),
					combinator: state.combinator,
					categories: state.categories.clone(),
				});

				write!(out, "{}", crate::render_search(service, &response, format)?)?;
			},
			ShellCommand::Similar(query) => {
				match service.similar(SimilarRequest { query, top_k: None }) {
					Ok(response) =>
						write!(out, "{}", crate::render_similar(service, &response, format)?)?,
					Err(err) => writeln!(out, "{err}")?,
				}
			},
			ShellCommand::Mode(combinator) => {
				state.combinator = combinator;

				writeln!(out, "mode: {combinator}")?;
			},
			ShellCommand::Category(categories) => {
				state.categories = categories;

				writeln!(out, "categories: {}", state.categories.join(separator))?;
			},
			ShellCommand::Categories =>
				write!(out, "{}", render::categories(&service.categories()))?,
			ShellCommand::Clear => {
				state = ShellState::new(service);

				writeln!(out, "mode: {}", state.combinator)?;
			},
			ShellCommand::Help => write!(out, "{HELP}")?,
			ShellCommand::Quit => break,
			ShellCommand::Empty => {},
		}

		out.flush()?;
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_commands() {
		assert_eq!(
			ShellCommand::parse("search 保険金, 免責", ","),
			Ok(ShellCommand::Search("保険金, 免責".to_string()))
		);
		assert_eq!(
			ShellCommand::parse("  q 保険金を支払う場合 ", ","),
			Ok(ShellCommand::Similar("保険金を支払う場合".to_string()))
		);
		assert_eq!(ShellCommand::parse("mode ANY", ","), Ok(ShellCommand::Mode(Combinator::Any)));
		assert_eq!(
			ShellCommand::parse("category 火災, 自動車", ","),
			Ok(ShellCommand::Category(vec!["火災".to_string(), "自動車".to_string()]))
		);
		assert_eq!(ShellCommand::parse("category", ","), Ok(ShellCommand::Category(Vec::new())));
		assert_eq!(ShellCommand::parse("categories", ","), Ok(ShellCommand::Categories));
		assert_eq!(ShellCommand::parse("", ","), Ok(ShellCommand::Empty));
		assert_eq!(ShellCommand::parse("exit", ","), Ok(ShellCommand::Quit));
	}

	#[test]
	fn rejects_unknown_commands_and_modes() {
		assert!(ShellCommand::parse("delete everything", ",").is_err());
		assert!(ShellCommand::parse("mode xor", ",").is_err());
	}
}
