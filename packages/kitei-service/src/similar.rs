pub mod scaler;
pub mod sparse;
pub mod stopwords;
pub mod tfidf;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Error, KiteiService, Result};
use kitei_config::Similarity;
use kitei_domain::{Cell, Record, Table, normalize};
use kitei_morph::MorphAnalyzer;
use scaler::FeatureScaler;
use sparse::SparseVector;
use tfidf::TfidfVectorizer;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimilarRequest {
	pub query: String,
	/// Falls back to `similarity.top_k` when unset.
	pub top_k: Option<u32>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SimilarResponse {
	pub query: String,
	pub pseudo_document: String,
	/// True when the cleaned query has no vocabulary term; no record is ranked.
	pub degenerate: bool,
	pub items: Vec<SimilarItem>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SimilarItem {
	pub rank: usize,
	pub row: usize,
	pub score: f64,
	pub record: Record,
	pub pseudo_document: String,
}

#[derive(Clone, Debug)]
pub struct IndexOptions {
	pub min_term_chars: usize,
	pub stop_words: Vec<String>,
}
impl IndexOptions {
	pub fn from_config(cfg: &Similarity) -> Self {
		Self {
			min_term_chars: cfg.min_term_chars as usize,
			stop_words: cfg.stop_words.clone().unwrap_or_else(stopwords::default_stop_words),
		}
	}
}
impl Default for IndexOptions {
	fn default() -> Self {
		Self { min_term_chars: 2, stop_words: stopwords::default_stop_words() }
	}
}

/// Text to pseudo-document: canonical form, content words, stop-word removal.
#[derive(Clone)]
pub struct Preprocessor {
	analyzer: Arc<dyn MorphAnalyzer>,
	stop_words: Vec<String>,
}
impl Preprocessor {
	pub fn new(analyzer: Arc<dyn MorphAnalyzer>, stop_words: Vec<String>) -> Self {
		Self { analyzer, stop_words }
	}

	pub fn pseudo_document(&self, text: &str) -> String {
		self.content_words(&normalize::canonicalize(text))
	}

	/// Non-text cells skip normalization and go straight to the analyzer.
	pub fn cell_document(&self, cell: &Cell) -> String {
		match cell {
			Cell::Text(text) => self.pseudo_document(text),
			Cell::Value(value) => self.content_words(value),
			Cell::Empty => String::new(),
		}
	}

	fn content_words(&self, text: &str) -> String {
		let joined = self
			.analyzer
			.analyze(text)
			.into_iter()
			.filter(|morpheme| morpheme.pos.is_content())
			.map(|morpheme| morpheme.surface)
			.collect::<Vec<_>>()
			.join(" ");

		stopwords::remove_stop_words(&joined, &self.stop_words)
	}
}

/// Fitted once over the whole corpus and reused for every query.
pub struct SimilarityIndex {
	preprocessor: Preprocessor,
	vectorizer: TfidfVectorizer,
	scaler: FeatureScaler,
	documents: Vec<String>,
	vectors: Vec<SparseVector>,
}
impl SimilarityIndex {
	/// Builds pseudo-documents from every record body and fits the vectorizer and scaler.
	pub fn fit(table: &Table, analyzer: Arc<dyn MorphAnalyzer>, options: IndexOptions) -> Self {
		let preprocessor = Preprocessor::new(analyzer, options.stop_words);
		let documents: Vec<String> =
			table.iter().map(|record| preprocessor.cell_document(&record.body)).collect();
		let vectorizer = TfidfVectorizer::fit(&documents, options.min_term_chars);
		let weighted: Vec<SparseVector> =
			documents.iter().map(|doc| vectorizer.transform(doc)).collect();
		let scaler = FeatureScaler::fit(&weighted, vectorizer.vocabulary_len());
		let vectors = weighted.into_iter().map(|vector| scaler.transform(vector)).collect();

		tracing::info!(
			documents = documents.len(),
			vocabulary = vectorizer.vocabulary_len(),
			"Fitted similarity index."
		);

		Self { preprocessor, vectorizer, scaler, documents, vectors }
	}

	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}

	pub fn vocabulary_len(&self) -> usize {
		self.vectorizer.vocabulary_len()
	}

	pub fn documents(&self) -> &[String] {
		&self.documents
	}

	pub fn preprocessor(&self) -> &Preprocessor {
		&self.preprocessor
	}

	/// Scaled query vector; the zero vector when nothing survives cleaning.
	pub fn query_vector(&self, query: &str) -> SparseVector {
		let document = self.preprocessor.pseudo_document(query);

		self.scaler.transform(self.vectorizer.transform(&document))
	}

	/// Cosine similarity of `query` against every document, or `None` for a zero query vector.
	pub fn scores(&self, query: &str) -> Option<Vec<f64>> {
		let query = self.query_vector(query);

		if query.is_zero() {
			return None;
		}

		Some(self.vectors.iter().map(|vector| query.cosine(vector)).collect())
	}

	/// Document positions and scores of the `top_k` best matches, descending, stable on ties.
	pub fn rank(&self, query: &str, top_k: usize) -> Option<Vec<(usize, f64)>> {
		let scores = self.scores(query)?;

		Some(top_k_stable(scores, top_k))
	}
}

pub fn top_k_stable(scores: Vec<f64>, top_k: usize) -> Vec<(usize, f64)> {
	let mut ranked: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();

	ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
	ranked.truncate(top_k);

	ranked
}

impl KiteiService {
	pub fn similar(&self, req: SimilarRequest) -> Result<SimilarResponse> {
		let top_k = req.top_k.unwrap_or(self.cfg.similarity.top_k);

		if top_k == 0 {
			return Err(Error::InvalidRequest {
				message: "top_k must be greater than zero.".to_string(),
			});
		}

		let pseudo_document = self.index.preprocessor().pseudo_document(&req.query);
		let Some(ranked) = self.index.rank(&req.query, top_k as usize) else {
			tracing::debug!(query = %req.query, "Query is empty after cleaning.");

			return Ok(SimilarResponse {
				query: req.query,
				pseudo_document,
				degenerate: true,
				items: Vec::new(),
			});
		};
		let records = self.table.records();
		let items: Vec<SimilarItem> = ranked
			.into_iter()
			.enumerate()
			.map(|(rank, (position, score))| SimilarItem {
				rank: rank + 1,
				row: records[position].row,
				score,
				record: records[position].clone(),
				pseudo_document: self.index.documents()[position].clone(),
			})
			.collect();

		tracing::info!(
			query = %req.query,
			top_k,
			returned = items.len(),
			best = items.first().map(|item| item.score).unwrap_or(0.0),
			"Similarity search completed."
		);

		Ok(SimilarResponse { query: req.query, pseudo_document, degenerate: false, items })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ranking_is_descending_and_stable() {
		let ranked = top_k_stable(vec![0.2, 0.9, 0.2, 0.5, 0.9], 4);

		assert_eq!(ranked, vec![(1, 0.9), (4, 0.9), (3, 0.5), (0, 0.2)]);
	}

	#[test]
	fn ranking_never_exceeds_top_k() {
		assert_eq!(top_k_stable(vec![0.1; 20], 10).len(), 10);
		assert_eq!(top_k_stable(vec![0.1; 3], 10).len(), 3);
	}
}
