use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub service: Service,
	#[serde(default)]
	pub table: Table,
	#[serde(default)]
	pub columns: Columns,
	#[serde(default)]
	pub search: Search,
	#[serde(default)]
	pub similarity: Similarity,
	#[serde(default)]
	pub highlight: Highlight,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	/// A `tracing_subscriber::EnvFilter` directive, e.g. "info" or "kitei_service=debug".
	#[serde(default = "default_log_level")]
	pub log_level: String,
}
impl Default for Service {
	fn default() -> Self {
		Self { log_level: default_log_level() }
	}
}

#[derive(Debug, Default, Deserialize)]
pub struct Table {
	/// Spreadsheet (`.xlsx`, `.xlsm`, `.xls`, `.ods`) or JSON row file.
	pub path: Option<std::path::PathBuf>,
	/// Worksheet name. The first worksheet is used when unset.
	pub sheet: Option<String>,
}

/// User-facing header labels of the source table.
#[derive(Debug, Deserialize)]
pub struct Columns {
	#[serde(default = "default_category_column")]
	pub category: String,
	#[serde(default = "default_regulation_column")]
	pub regulation: String,
	#[serde(default = "default_clause_title_column")]
	pub clause_title: String,
	#[serde(default = "default_clause_number_column")]
	pub clause_number: String,
	#[serde(default = "default_body_column")]
	pub body: String,
}
impl Columns {
	pub fn labels(&self) -> [&str; 5] {
		[
			self.category.as_str(),
			self.regulation.as_str(),
			self.clause_title.as_str(),
			self.clause_number.as_str(),
			self.body.as_str(),
		]
	}
}
impl Default for Columns {
	fn default() -> Self {
		Self {
			category: default_category_column(),
			regulation: default_regulation_column(),
			clause_title: default_clause_title_column(),
			clause_number: default_clause_number_column(),
			body: default_body_column(),
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct Search {
	#[serde(default = "default_keyword_separator")]
	pub keyword_separator: String,
	/// One of "all" or "any".
	#[serde(default = "default_combinator")]
	pub default_combinator: String,
}
impl Default for Search {
	fn default() -> Self {
		Self {
			keyword_separator: default_keyword_separator(),
			default_combinator: default_combinator(),
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct Similarity {
	#[serde(default = "default_top_k")]
	pub top_k: u32,
	/// Shortest run of word characters that becomes a vocabulary term.
	#[serde(default = "default_min_term_chars")]
	pub min_term_chars: u32,
	/// Optional. Replaces the built-in stop-word list when set.
	pub stop_words: Option<Vec<String>>,
}
impl Default for Similarity {
	fn default() -> Self {
		Self { top_k: default_top_k(), min_term_chars: default_min_term_chars(), stop_words: None }
	}
}

#[derive(Debug, Deserialize)]
pub struct Highlight {
	#[serde(default = "default_highlight_open")]
	pub open: String,
	#[serde(default = "default_highlight_close")]
	pub close: String,
}
impl Default for Highlight {
	fn default() -> Self {
		Self { open: default_highlight_open(), close: default_highlight_close() }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_category_column() -> String {
	"保険種名".to_string()
}

fn default_regulation_column() -> String {
	"規程名".to_string()
}

fn default_clause_title_column() -> String {
	"条文名".to_string()
}

fn default_clause_number_column() -> String {
	"条番号".to_string()
}

fn default_body_column() -> String {
	"本文".to_string()
}

fn default_keyword_separator() -> String {
	",".to_string()
}

fn default_combinator() -> String {
	"all".to_string()
}

fn default_top_k() -> u32 {
	10
}

fn default_min_term_chars() -> u32 {
	2
}

fn default_highlight_open() -> String {
	"<span style='color:red;'>".to_string()
}

fn default_highlight_close() -> String {
	"</span>".to_string()
}
