use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
	pub text: String,
	/// Index of the keyword this segment matched, if any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub keyword: Option<usize>,
}

/// Text split into plain and matched segments, ready to be wrapped with any markers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Highlighted {
	pub segments: Vec<Segment>,
}
impl Highlighted {
	pub fn plain(text: impl Into<String>) -> Self {
		let text = text.into();

		if text.is_empty() {
			return Self::default();
		}

		Self { segments: vec![Segment { text, keyword: None }] }
	}

	/// Locates every keyword independently in `text`.
	///
	/// Occurrences of one keyword are found left to right without overlap. Where occurrences of
	/// different keywords overlap, the keyword listed last owns the overlapping characters.
	pub fn new(text: &str, keywords: &[String]) -> Self {
		// (keyword, occurrence) owning each byte.
		let mut owner: Vec<Option<(usize, usize)>> = vec![None; text.len()];
		let mut occurrence = 0_usize;

		for (keyword_idx, keyword) in keywords.iter().enumerate() {
			if keyword.is_empty() {
				continue;
			}

			for (start, matched) in text.match_indices(keyword.as_str()) {
				owner[start..start + matched.len()].fill(Some((keyword_idx, occurrence)));

				occurrence += 1;
			}
		}

		let mut segments = Vec::new();
		let mut start = 0;

		for idx in 1..=text.len() {
			if idx < text.len() && owner[idx] == owner[start] {
				continue;
			}

			segments.push(Segment {
				text: text[start..idx].to_string(),
				keyword: owner[start].map(|(keyword_idx, _)| keyword_idx),
			});

			start = idx;
		}

		Self { segments }
	}

	pub fn is_highlighted(&self) -> bool {
		self.segments.iter().any(|segment| segment.keyword.is_some())
	}

	pub fn text(&self) -> String {
		self.segments.iter().map(|segment| segment.text.as_str()).collect()
	}

	pub fn render(&self, open: &str, close: &str) -> String {
		let mut out = String::new();

		for segment in &self.segments {
			if segment.keyword.is_some() {
				out.push_str(open);
				out.push_str(&segment.text);
				out.push_str(close);
			} else {
				out.push_str(&segment.text);
			}
		}

		out
	}
}
