//! Morphological analysis for clause text.
//!
//! [`MorphAnalyzer`] is the seam for any dictionary-backed analyzer. [`ScriptAnalyzer`] is the
//! built-in implementation: it needs no dictionary and segments by Unicode script runs, tagging
//! kanji, katakana and alphanumeric runs as nouns and kanji stems carrying conjugation okurigana
//! as verbs.

mod lexicon;
mod script;

pub use script::ScriptAnalyzer;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
	Noun,
	Verb,
	Particle,
	Auxiliary,
	Symbol,
	Other,
}
impl PartOfSpeech {
	/// Nouns and verbs carry the content of a clause.
	pub fn is_content(self) -> bool {
		matches!(self, Self::Noun | Self::Verb)
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Morpheme {
	pub surface: String,
	pub pos: PartOfSpeech,
}
impl Morpheme {
	pub fn new(surface: impl Into<String>, pos: PartOfSpeech) -> Self {
		Self { surface: surface.into(), pos }
	}
}

pub trait MorphAnalyzer
where
	Self: Send + Sync,
{
	fn analyze(&self, text: &str) -> Vec<Morpheme>;
}
