use std::path::PathBuf;

use clap::{
	Parser, Subcommand, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

use kitei_service::Combinator;

/// Package version, git commit and target triple, e.g. `0.1.0-1a2b3c4-x86_64-unknown-linux-gnu`.
pub const VERSION: &str = concat!(
	env!("CARGO_PKG_VERSION"),
	"-",
	env!("VERGEN_GIT_SHA"),
	"-",
	env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default() | Effects::BOLD)
		.usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
		.literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
		.error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Debug, Parser)]
#[command(
	version = VERSION,
	rename_all = "kebab",
	styles = styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	/// Spreadsheet or JSON table; overrides `table.path` from the config.
	#[arg(long, short = 't', value_name = "FILE")]
	pub table: Option<PathBuf>,
	/// Worksheet name; overrides `table.sheet` from the config.
	#[arg(long, value_name = "NAME")]
	pub sheet: Option<String>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// List the unique categories of the table.
	Categories,
	/// Literal keyword search with highlighting.
	Search(SearchArgs),
	/// Rank clauses by similarity to free text.
	Similar(SimilarArgs),
	/// Answer one command per stdin line against a single fitted index.
	Shell(ShellArgs),
}

#[derive(Debug, clap::Args)]
pub struct SearchArgs {
	/// Keywords split by `search.keyword_separator`.
	pub keywords: String,
	#[arg(long, value_enum)]
	pub combinator: Option<CombinatorArg>,
	#[arg(long = "category", value_name = "NAME")]
	pub categories: Vec<String>,
	#[arg(long, value_enum, default_value_t = Format::Text)]
	pub format: Format,
}

#[derive(Debug, clap::Args)]
pub struct SimilarArgs {
	pub query: String,
	#[arg(long, value_name = "N")]
	pub top_k: Option<u32>,
	#[arg(long, value_enum, default_value_t = Format::Text)]
	pub format: Format,
}

#[derive(Debug, clap::Args)]
pub struct ShellArgs {
	#[arg(long, value_enum, default_value_t = Format::Text)]
	pub format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
	Text,
	Html,
	Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CombinatorArg {
	All,
	Any,
}
impl From<CombinatorArg> for Combinator {
	fn from(value: CombinatorArg) -> Self {
		match value {
			CombinatorArg::All => Self::All,
			CombinatorArg::Any => Self::Any,
		}
	}
}
