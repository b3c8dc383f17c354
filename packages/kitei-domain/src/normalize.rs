//! Canonical text forms shared by both search pipelines.

use unicode_normalization::UnicodeNormalization;

/// Removes line breaks, half-width spaces and full-width spaces.
pub fn strip_layout(input: &str) -> String {
	input.chars().filter(|ch| !is_layout(*ch)).collect()
}

/// NFKC, bracket variants folded to `(` `)`, layout characters removed.
///
/// The trailing NFKC pass recomposes sequences that only became adjacent once a space between
/// them was removed, which keeps the function idempotent.
pub fn canonicalize(input: &str) -> String {
	let compat: String = input.nfkc().collect();
	let folded: String =
		compat.chars().filter(|ch| !is_layout(*ch)).map(fold_bracket).collect();

	folded.nfkc().collect()
}

fn is_layout(ch: char) -> bool {
	matches!(ch, '\n' | '\r' | ' ' | '\u{3000}')
}

fn fold_bracket(ch: char) -> char {
	match ch {
		'（' | '〔' | '﹙' | '⁽' | '₍' | '⦅' | '❨' | '❪' | '﹝' => '(',
		'）' | '〕' | '﹚' | '⁾' | '₎' | '⦆' | '❩' | '❫' | '﹞' => ')',
		_ => ch,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_spaces_and_newlines() {
		assert_eq!(strip_layout("保険金 の\n支払\u{3000}い\r\n"), "保険金の支払い");
	}

	#[test]
	fn canonical_form_folds_width_and_brackets() {
		assert_eq!(canonicalize("（注）　ＡＢＣ１２３"), "(注)ABC123");
		assert_eq!(canonicalize("〔免責〕"), "(免責)");
		assert_eq!(canonicalize("ｶﾞｲﾄﾞ"), "ガイド");
	}

	#[test]
	fn canonical_form_recomposes_across_removed_space() {
		let once = canonicalize("e \u{301}");

		assert_eq!(once, "\u{e9}");
		assert_eq!(canonicalize(&once), once);
	}
}
