/// Hand-curated terms with no discriminating value across policy clauses.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
	"当会社", "する", "ある", "いる", "なる", "できる", "こと", "もの", "とき", "ところ", "ため",
	"よう", "場合", "規定", "及び", "又は", "並びに", "若しくは",
];

/// Deletes every occurrence of each stop word, in list order, by plain substring removal.
///
/// Removal is not token aware: a stop word inside a longer token is cut out of it as well.
pub fn remove_stop_words(text: &str, stop_words: &[String]) -> String {
	let mut out = text.to_string();

	for word in stop_words {
		if word.is_empty() {
			continue;
		}

		out = out.replace(word.as_str(), "");
	}

	out
}

pub fn default_stop_words() -> Vec<String> {
	DEFAULT_STOP_WORDS.iter().map(|word| word.to_string()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn removes_whole_tokens() {
		let words = vec!["こと".to_string()];

		assert_eq!(remove_stop_words("保険金 こと 支払い", &words), "保険金  支払い");
	}

	#[test]
	fn removal_cuts_inside_longer_tokens() {
		let words = vec!["金".to_string()];

		assert_eq!(remove_stop_words("保険金 金額", &words), "保険 額");
	}

	#[test]
	fn removal_follows_list_order() {
		let first = vec!["保険".to_string(), "険金".to_string()];
		let second = vec!["険金".to_string(), "保険".to_string()];

		assert_eq!(remove_stop_words("保険金", &first), "金");
		assert_eq!(remove_stop_words("保険金", &second), "保");
	}
}
