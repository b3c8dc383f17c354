pub mod highlight;
pub mod search;
pub mod similar;

mod error;

pub use error::{Error, Result};
pub use highlight::{Highlighted, Segment};
pub use search::{
	Combinator, RegulationCount, SearchItem, SearchRequest, SearchResponse, count_by_regulation,
	matches_record, parse_keywords,
};
pub use similar::{
	IndexOptions, Preprocessor, SimilarItem, SimilarRequest, SimilarResponse, SimilarityIndex,
};

use std::sync::Arc;

use kitei_config::Config;
use kitei_domain::{Table, normalize};
use kitei_morph::MorphAnalyzer;

/// Request/response entry point over one loaded table and its fitted similarity index.
pub struct KiteiService {
	pub cfg: Config,
	pub table: Table,
	pub index: SimilarityIndex,
}
impl KiteiService {
	/// Strips layout characters from every text cell and fits the similarity index once.
	pub fn new(cfg: Config, table: Table, analyzer: Arc<dyn MorphAnalyzer>) -> Self {
		let table = table.map_text(normalize::strip_layout);
		let options = IndexOptions::from_config(&cfg.similarity);
		let index = SimilarityIndex::fit(&table, analyzer, options);

		Self { cfg, table, index }
	}

	pub fn categories(&self) -> Vec<String> {
		self.table.categories()
	}

	pub fn default_combinator(&self) -> Combinator {
		self.cfg.search.default_combinator.parse().unwrap_or_default()
	}
}
