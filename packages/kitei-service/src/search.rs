use std::{fmt, str::FromStr};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::{KiteiService, highlight::Highlighted};
use kitei_domain::{Cell, Record};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
	/// Every keyword must be present.
	#[default]
	All,
	/// At least one keyword must be present.
	Any,
}
impl Combinator {
	pub fn holds(self, keywords: &[String], cell: &Cell) -> bool {
		match self {
			Self::All => keywords.iter().all(|keyword| cell.contains(keyword)),
			Self::Any => keywords.iter().any(|keyword| cell.contains(keyword)),
		}
	}
}
impl FromStr for Combinator {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"all" | "and" => Ok(Self::All),
			"any" | "or" => Ok(Self::Any),
			other => Err(format!("Unknown combinator {other:?}; expected all or any.")),
		}
	}
}
impl fmt::Display for Combinator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::All => f.write_str("all"),
			Self::Any => f.write_str("any"),
		}
	}
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchRequest {
	pub keywords: Vec<String>,
	pub combinator: Combinator,
	/// Category allow-list. Empty means every category.
	#[serde(default)]
	pub categories: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchResponse {
	/// False when no keyword survived parsing; nothing was searched.
	pub performed: bool,
	pub keywords: Vec<String>,
	pub combinator: Combinator,
	pub total: usize,
	pub regulation_counts: Vec<RegulationCount>,
	pub items: Vec<SearchItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegulationCount {
	pub regulation: String,
	pub hits: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchItem {
	pub row: usize,
	pub record: Record,
	pub clause_title: Highlighted,
	pub body: Highlighted,
}

/// Splits raw keyword input on `separator`, trimming each piece and dropping empty ones.
pub fn parse_keywords(raw: &str, separator: &str) -> Vec<String> {
	raw.split(separator)
		.map(str::trim)
		.filter(|keyword| !keyword.is_empty())
		.map(str::to_string)
		.collect()
}

/// True when every (or any) keyword is in the body, or every (or any) keyword is in the title.
///
/// The two fields are checked separately, so ALL is never satisfied by keywords spread across
/// body and title, while a title-only match is enough on its own.
pub fn matches_record(record: &Record, keywords: &[String], combinator: Combinator) -> bool {
	combinator.holds(keywords, &record.body) || combinator.holds(keywords, &record.clause_title)
}

/// Hit counts per regulation name, most hits first; ties keep first-appearance order.
pub fn count_by_regulation<'a>(
	records: impl IntoIterator<Item = &'a Record>,
) -> Vec<RegulationCount> {
	let mut position: AHashMap<String, usize> = AHashMap::new();
	let mut counts: Vec<RegulationCount> = Vec::new();

	for record in records {
		let regulation = record.regulation.to_string();

		match position.get(&regulation) {
			Some(&idx) => counts[idx].hits += 1,
			None => {
				position.insert(regulation.clone(), counts.len());
				counts.push(RegulationCount { regulation, hits: 1 });
			},
		}
	}

	counts.sort_by(|a, b| b.hits.cmp(&a.hits));

	counts
}

fn highlight_cell(cell: &Cell, keywords: &[String]) -> Highlighted {
	match cell.as_text() {
		Some(text) => Highlighted::new(text, keywords),
		None => Highlighted::plain(cell.to_string()),
	}
}

impl KiteiService {
	pub fn parse_keywords(&self, raw: &str) -> Vec<String> {
		parse_keywords(raw, &self.cfg.search.keyword_separator)
	}

	pub fn search(&self, req: SearchRequest) -> SearchResponse {
		let keywords: Vec<String> = req
			.keywords
			.iter()
			.map(|keyword| keyword.trim())
			.filter(|keyword| !keyword.is_empty())
			.map(str::to_string)
			.collect();

		if keywords.is_empty() {
			tracing::debug!("Skipping literal search without keywords.");

			return SearchResponse {
				performed: false,
				keywords,
				combinator: req.combinator,
				total: 0,
				regulation_counts: Vec::new(),
				items: Vec::new(),
			};
		}

		let matched: Vec<&Record> = self
			.table
			.iter()
			.filter(|record| matches_record(record, &keywords, req.combinator))
			.filter(|record| {
				req.categories.is_empty()
					|| req.categories.iter().any(|category| record.category.to_string() == *category)
			})
			.collect();
		let regulation_counts = count_by_regulation(matched.iter().copied());
		let items: Vec<SearchItem> = matched
			.into_iter()
			.map(|record| SearchItem {
				row: record.row,
				record: record.clone(),
				clause_title: highlight_cell(&record.clause_title, &keywords),
				body: highlight_cell(&record.body, &keywords),
			})
			.collect();

		tracing::info!(
			keywords = ?keywords,
			combinator = %req.combinator,
			categories = req.categories.len(),
			hits = items.len(),
			"Literal search completed."
		);

		SearchResponse {
			performed: true,
			keywords,
			combinator: req.combinator,
			total: items.len(),
			regulation_counts,
			items,
		}
	}
}
