use std::collections::BTreeSet;

use ahash::AHashMap;

use super::sparse::SparseVector;

/// TF-IDF weighting with smoothed IDF and L2-normalized rows.
#[derive(Clone, Debug)]
pub struct TfidfVectorizer {
	vocabulary: AHashMap<String, usize>,
	idf: Vec<f64>,
	min_term_chars: usize,
}
impl TfidfVectorizer {
	/// Learns the vocabulary and `idf(t) = ln((1 + n) / (1 + df(t))) + 1` from `documents`.
	pub fn fit<S: AsRef<str>>(documents: &[S], min_term_chars: usize) -> Self {
		let min_term_chars = min_term_chars.max(1);
		let tokenized: Vec<Vec<String>> =
			documents.iter().map(|doc| terms(doc.as_ref(), min_term_chars)).collect();
		let ordered: BTreeSet<&str> =
			tokenized.iter().flat_map(|doc| doc.iter().map(String::as_str)).collect();
		let vocabulary: AHashMap<String, usize> =
			ordered.into_iter().enumerate().map(|(idx, term)| (term.to_string(), idx)).collect();
		let mut df = vec![0_usize; vocabulary.len()];

		for doc in &tokenized {
			let unique: BTreeSet<usize> =
				doc.iter().filter_map(|term| vocabulary.get(term)).copied().collect();

			for idx in unique {
				df[idx] += 1;
			}
		}

		let n = documents.len() as f64;
		let idf = df.into_iter().map(|df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0).collect();

		Self { vocabulary, idf, min_term_chars }
	}

	pub fn vocabulary_len(&self) -> usize {
		self.vocabulary.len()
	}

	pub fn term_index(&self, term: &str) -> Option<usize> {
		self.vocabulary.get(term).copied()
	}

	/// Weights `document` against the fitted vocabulary. Unknown terms are ignored.
	pub fn transform(&self, document: &str) -> SparseVector {
		let mut counts: AHashMap<usize, f64> = AHashMap::new();

		for term in terms(document, self.min_term_chars) {
			if let Some(&idx) = self.vocabulary.get(&term) {
				*counts.entry(idx).or_insert(0.0) += 1.0;
			}
		}

		let entries =
			counts.into_iter().map(|(idx, count)| (idx, count * self.idf[idx])).collect();

		SparseVector::from_entries(entries).l2_normalized()
	}
}

/// Lowercased runs of word characters at least `min_chars` characters long.
pub fn terms(document: &str, min_chars: usize) -> Vec<String> {
	document
		.split(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
		.filter(|term| term.chars().count() >= min_chars)
		.map(str::to_lowercase)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn terms_drop_short_runs_and_lowercase() {
		assert_eq!(terms("保険金 金 ABC x_y 支払い", 2), vec!["保険金", "abc", "x_y", "支払い"]);
		assert_eq!(terms("保険金 金", 1), vec!["保険金", "金"]);
		assert!(terms("   ", 2).is_empty());
	}

	#[test]
	fn vocabulary_is_sorted() {
		let vectorizer = TfidfVectorizer::fit(&["bb aa", "cc aa"], 2);

		assert_eq!(vectorizer.vocabulary_len(), 3);
		assert_eq!(vectorizer.term_index("aa"), Some(0));
		assert_eq!(vectorizer.term_index("bb"), Some(1));
		assert_eq!(vectorizer.term_index("cc"), Some(2));
	}

	#[test]
	fn smooth_idf_weights_rare_terms_higher() {
		let vectorizer = TfidfVectorizer::fit(&["aa bb", "aa cc", "aa dd"], 2);
		let vector = vectorizer.transform("aa bb");
		let weight = |term: &str| {
			let idx = vectorizer.term_index(term).expect("Term must be in vocabulary.");

			vector.entries().iter().find(|(i, _)| *i == idx).map(|(_, w)| *w).unwrap_or(0.0)
		};
		// idf(aa) = ln(4/4) + 1 = 1, idf(bb) = ln(4/2) + 1.
		let expected_ratio = (2.0_f64).ln() + 1.0;

		assert!((weight("bb") / weight("aa") - expected_ratio).abs() < 1e-12);
		assert!((vector.norm() - 1.0).abs() < 1e-12);
	}

	#[test]
	fn unknown_terms_give_zero_vector() {
		let vectorizer = TfidfVectorizer::fit(&["aa bb"], 2);

		assert!(vectorizer.transform("zz yy").is_zero());
		assert!(vectorizer.transform("").is_zero());
	}
}
