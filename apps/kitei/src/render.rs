use kitei_config::Columns;
use kitei_service::{Highlighted, SearchResponse, SimilarResponse};

pub const ANSI_RED: Markers<'static> = Markers { open: "\x1b[31m", close: "\x1b[0m" };

#[derive(Clone, Copy, Debug)]
pub struct Markers<'a> {
	pub open: &'a str,
	pub close: &'a str,
}
impl Markers<'_> {
	fn wrap(&self, text: &Highlighted) -> String {
		text.render(self.open, self.close)
	}
}

pub fn categories(categories: &[String]) -> String {
	lines(categories.iter().cloned())
}

pub fn search(response: &SearchResponse, columns: &Columns, markers: Markers) -> String {
	if !response.performed {
		return lines(["キーワードが入力されていません。".to_string()]);
	}

	let mut out = vec![
		format!("検索結果総数: {} 件", response.total),
		format!("各{}ごとのヒット件数:", columns.regulation),
	];

	out.extend(
		response
			.regulation_counts
			.iter()
			.map(|count| format!("  {}: {}", count.regulation, count.hits)),
	);

	for item in &response.items {
		out.extend([
			String::new(),
			format!("結果 {}", item.row + 1),
			format!("  {}: {}", columns.regulation, item.record.regulation),
			format!("  {}: {}", columns.clause_title, markers.wrap(&item.clause_title)),
			format!("  {}: {}", columns.clause_number, item.record.clause_number),
			format!("  {}:", columns.body),
			format!("  {}", markers.wrap(&item.body)),
		]);
	}

	lines(out)
}

pub fn similar(response: &SimilarResponse, columns: &Columns) -> String {
	if response.degenerate {
		return lines(["クエリに検索可能な語が含まれていません。".to_string()]);
	}

	let mut out = vec![format!("類似度上位 {} 件", response.items.len())];

	for item in &response.items {
		let record = &item.record;

		out.extend([
			String::new(),
			format!("{}. 類似度 {:.4} (結果 {})", item.rank, item.score, item.row + 1),
			format!("  {}: {}", columns.regulation, record.regulation),
			format!("  {}: {}", columns.clause_title, record.clause_title),
			format!("  {}: {}", columns.clause_number, record.clause_number),
			format!("  {}:", columns.body),
			format!("  {}", record.body),
		]);
	}

	lines(out)
}

/// Newline-terminated output, empty for no lines.
fn lines(items: impl IntoIterator<Item = String>) -> String {
	items.into_iter().map(|line| line + "\n").collect()
}
