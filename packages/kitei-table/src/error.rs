use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read table file at {path:?}.")]
	ReadTable { path: PathBuf, source: std::io::Error },
	#[error("Failed to read spreadsheet at {path:?}.")]
	Spreadsheet { path: PathBuf, source: calamine::Error },
	#[error("Failed to parse JSON table at {path:?}.")]
	ParseJson { path: PathBuf, source: serde_json::Error },
	#[error("Unsupported table format at {path:?}; expected xlsx, xlsm, xlsb, xls, ods or json.")]
	UnsupportedFormat { path: PathBuf },
	#[error("Spreadsheet at {path:?} contains no worksheet.")]
	NoWorksheet { path: PathBuf },
	#[error("Table at {path:?} has no header row.")]
	MissingHeader { path: PathBuf },
	#[error("Table at {path:?} is missing column {label:?}.")]
	MissingColumn { path: PathBuf, label: String },
}
