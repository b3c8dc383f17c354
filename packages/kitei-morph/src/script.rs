use unicode_script::{Script, UnicodeScript};

use crate::{
	MorphAnalyzer, Morpheme, PartOfSpeech,
	lexicon::{
		AUXILIARIES, HIRAGANA_NOUNS, HIRAGANA_VERBS, PARTICLES, SURU_FORMS, VERB_ENDINGS,
		longest_prefix,
	},
};

/// Dictionary-free analyzer driven by Unicode script runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptAnalyzer;
impl MorphAnalyzer for ScriptAnalyzer {
	fn analyze(&self, text: &str) -> Vec<Morpheme> {
		let runs = script_runs(text);
		let mut out = Vec::new();
		let mut idx = 0;

		while idx < runs.len() {
			let (class, surface) = runs[idx];

			match class {
				CharClass::Han => {
					let okurigana = runs
						.get(idx + 1)
						.filter(|(next, _)| *next == CharClass::Hiragana)
						.map(|(_, next)| *next);

					if let Some(okurigana) = okurigana {
						let rest = attach_okurigana(surface, okurigana, &mut out);

						tag_hiragana(rest, &mut out);

						idx += 2;

						continue;
					}

					out.push(Morpheme::new(surface, PartOfSpeech::Noun));
				},
				CharClass::Hiragana => tag_hiragana(surface, &mut out),
				CharClass::Katakana | CharClass::Alnum =>
					out.push(Morpheme::new(surface, PartOfSpeech::Noun)),
				CharClass::Symbol => out.push(Morpheme::new(surface, PartOfSpeech::Symbol)),
				CharClass::Space => {},
			}

			idx += 1;
		}

		out
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharClass {
	Han,
	Hiragana,
	Katakana,
	Alnum,
	Symbol,
	Space,
}

fn classify(ch: char, prev: Option<CharClass>) -> CharClass {
	match ch {
		'々' | '〆' | '〇' => return CharClass::Han,
		// The prolonged sound mark continues whatever kana run it follows.
		'ー' => {
			return match prev {
				Some(CharClass::Hiragana) => CharClass::Hiragana,
				_ => CharClass::Katakana,
			};
		},
		_ => {},
	}

	if ch.is_whitespace() {
		return CharClass::Space;
	}

	match ch.script() {
		Script::Han => CharClass::Han,
		Script::Hiragana => CharClass::Hiragana,
		Script::Katakana => CharClass::Katakana,
		_ if ch.is_alphanumeric() || ch == '_' => CharClass::Alnum,
		_ => CharClass::Symbol,
	}
}

/// Splits `text` into maximal same-class runs. Every symbol is its own run.
fn script_runs(text: &str) -> Vec<(CharClass, &str)> {
	let mut out = Vec::new();
	let mut start = 0;
	let mut current: Option<CharClass> = None;

	for (idx, ch) in text.char_indices() {
		let class = classify(ch, current);

		match current {
			Some(active) if active == class && class != CharClass::Symbol => {},
			Some(active) => {
				out.push((active, &text[start..idx]));

				start = idx;
				current = Some(class);
			},
			None => {
				start = idx;
				current = Some(class);
			},
		}
	}

	if let Some(active) = current {
		out.push((active, &text[start..]));
	}

	out
}

/// Tags a kanji stem by the okurigana that follows it and returns the unconsumed kana.
fn attach_okurigana<'a>(stem: &str, okurigana: &'a str, out: &mut Vec<Morpheme>) -> &'a str {
	if let Some(form) = longest_prefix(okurigana, SURU_FORMS) {
		out.push(Morpheme::new(stem, PartOfSpeech::Noun));
		out.push(Morpheme::new(form, PartOfSpeech::Verb));

		return &okurigana[form.len()..];
	}
	if let Some(ending) = longest_prefix(okurigana, VERB_ENDINGS)
		&& !starts_function_word(okurigana, ending)
	{
		out.push(Morpheme::new(format!("{stem}{ending}"), PartOfSpeech::Verb));

		return &okurigana[ending.len()..];
	}

	out.push(Morpheme::new(stem, PartOfSpeech::Noun));

	okurigana
}

/// True when `kana` opens with a particle at least as long as `ending`, or with a longer
/// auxiliary, so the kanji before it stays a noun (`保険契約者または`, `限度額まで`).
fn starts_function_word(kana: &str, ending: &str) -> bool {
	let particle = longest_prefix(kana, PARTICLES).map_or(0, str::len);
	let auxiliary = longest_prefix(kana, AUXILIARIES).map_or(0, str::len);

	particle >= ending.len() || auxiliary > ending.len()
}

fn tag_hiragana(mut text: &str, out: &mut Vec<Morpheme>) {
	// Later tables win ties on match length.
	let tables = [
		(AUXILIARIES, PartOfSpeech::Auxiliary),
		(PARTICLES, PartOfSpeech::Particle),
		(HIRAGANA_NOUNS, PartOfSpeech::Noun),
		(HIRAGANA_VERBS, PartOfSpeech::Verb),
	];
	let mut unknown = String::new();

	while let Some(ch) = text.chars().next() {
		let best = tables
			.iter()
			.filter_map(|(table, pos)| longest_prefix(text, table).map(|word| (word, *pos)))
			.max_by_key(|(word, _)| word.len());

		match best {
			Some((word, pos)) => {
				if !unknown.is_empty() {
					out.push(Morpheme::new(std::mem::take(&mut unknown), PartOfSpeech::Other));
				}

				out.push(Morpheme::new(word, pos));

				text = &text[word.len()..];
			},
			None => {
				unknown.push(ch);

				text = &text[ch.len_utf8()..];
			},
		}
	}

	if !unknown.is_empty() {
		out.push(Morpheme::new(unknown, PartOfSpeech::Other));
	}
}
