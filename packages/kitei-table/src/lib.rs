mod error;

pub use error::{Error, Result};

use std::{
	fs,
	path::{Path, PathBuf},
};

use calamine::{Data, Reader};
use serde_json::{Map, Value};

use kitei_config::Columns;
use kitei_domain::{Cell, Record, Table};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
	Spreadsheet,
	Json,
}
impl Format {
	pub fn from_path(path: &Path) -> Option<Self> {
		let extension = path.extension()?.to_str()?.to_ascii_lowercase();

		match extension.as_str() {
			"xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Spreadsheet),
			"json" => Some(Self::Json),
			_ => None,
		}
	}
}

/// Loads the regulation table. Any failure is fatal; no partial table is returned.
pub fn load(path: &Path, sheet: Option<&str>, columns: &Columns) -> Result<Table> {
	let format = Format::from_path(path)
		.ok_or_else(|| Error::UnsupportedFormat { path: path.to_path_buf() })?;
	let table = match format {
		Format::Spreadsheet => load_spreadsheet(path, sheet, columns)?,
		Format::Json => load_json(path, columns)?,
	};

	tracing::info!(path = %path.display(), rows = table.len(), "Loaded regulation table.");

	Ok(table)
}

fn load_spreadsheet(path: &Path, sheet: Option<&str>, columns: &Columns) -> Result<Table> {
	if let Err(err) = fs::metadata(path) {
		return Err(Error::ReadTable { path: path.to_path_buf(), source: err });
	}

	let spreadsheet_err = |source| Error::Spreadsheet { path: path.to_path_buf(), source };
	let mut workbook = calamine::open_workbook_auto(path).map_err(spreadsheet_err)?;
	let range = match sheet {
		Some(name) => workbook.worksheet_range(name).map_err(spreadsheet_err)?,
		None => workbook
			.worksheet_range_at(0)
			.ok_or_else(|| Error::NoWorksheet { path: path.to_path_buf() })?
			.map_err(spreadsheet_err)?,
	};
	let mut rows = range.rows();
	let header: Vec<String> = rows
		.next()
		.ok_or_else(|| Error::MissingHeader { path: path.to_path_buf() })?
		.iter()
		.map(|cell| cell.to_string().trim().to_string())
		.collect();
	let layout = ColumnLayout::resolve(path, columns, |label| {
		header.iter().position(|name| name == label)
	})?;
	let cells = rows.map(|row| layout.pick(|idx| row.get(idx).map(cell_from_data)));

	Ok(build_table(cells))
}

fn load_json(path: &Path, columns: &Columns) -> Result<Table> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadTable { path: path.to_path_buf(), source: err })?;
	let rows: Vec<Map<String, Value>> = serde_json::from_str(&raw)
		.map_err(|err| Error::ParseJson { path: path.to_path_buf(), source: err })?;
	let Some(first) = rows.first() else { return Ok(Table::default()) };
	let labels: Vec<&str> = first.keys().map(String::as_str).collect();
	let layout = ColumnLayout::resolve(path, columns, |label| {
		labels.iter().position(|name| name.trim() == label)
	})?;
	let names = layout.idx.map(|idx| labels[idx]);
	let cells = rows.iter().map(|row| {
		[0, 1, 2, 3, 4].map(|slot| row.get(names[slot]).map(cell_from_json).unwrap_or_default())
	});

	Ok(build_table(cells))
}

/// Source positions of category, regulation, clause title, clause number and body.
struct ColumnLayout {
	idx: [usize; 5],
}
impl ColumnLayout {
	fn resolve(
		path: &Path,
		columns: &Columns,
		find: impl Fn(&str) -> Option<usize>,
	) -> Result<Self> {
		let mut idx = [0_usize; 5];

		for (slot, label) in columns.labels().into_iter().enumerate() {
			idx[slot] = find(label).ok_or_else(|| Error::MissingColumn {
				path: PathBuf::from(path),
				label: label.to_string(),
			})?;
		}

		Ok(Self { idx })
	}

	fn pick(&self, get: impl Fn(usize) -> Option<Cell>) -> [Cell; 5] {
		self.idx.map(|idx| get(idx).unwrap_or_default())
	}
}

/// Rows keep their offset below the header, so skipped blank rows leave gaps in `Record::row`.
fn build_table(rows: impl Iterator<Item = [Cell; 5]>) -> Table {
	let records = rows
		.enumerate()
		.filter(|(_, cells)| cells.iter().any(|cell| *cell != Cell::Empty))
		.map(|(row, [category, regulation, clause_title, clause_number, body])| Record {
			row,
			category,
			regulation,
			clause_title,
			clause_number,
			body,
		})
		.collect();

	Table::new(records)
}

fn cell_from_data(data: &Data) -> Cell {
	match data {
		Data::String(text) => Cell::Text(text.clone()),
		Data::Float(value) => Cell::number(*value),
		Data::Int(value) => Cell::Value(value.to_string()),
		Data::Empty => Cell::Empty,
		other => Cell::Value(other.to_string()),
	}
}

fn cell_from_json(value: &Value) -> Cell {
	match value {
		Value::String(text) => Cell::Text(text.clone()),
		Value::Number(number) => match number.as_f64() {
			Some(value) if number.is_f64() => Cell::number(value),
			_ => Cell::Value(number.to_string()),
		},
		Value::Null => Cell::Empty,
		other => Cell::Value(other.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detects_format_from_extension() {
		assert_eq!(Format::from_path(Path::new("a/b.XLSX")), Some(Format::Spreadsheet));
		assert_eq!(Format::from_path(Path::new("rows.json")), Some(Format::Json));
		assert_eq!(Format::from_path(Path::new("rows.csv")), None);
		assert_eq!(Format::from_path(Path::new("no_extension")), None);
	}

	#[test]
	fn blank_rows_are_skipped_without_renumbering() {
		let rows = vec![
			[Cell::text("火災"), Cell::Empty, Cell::Empty, Cell::Empty, Cell::text("第一")],
			[Cell::Empty, Cell::Empty, Cell::Empty, Cell::Empty, Cell::Empty],
			[Cell::text("火災"), Cell::Empty, Cell::Empty, Cell::Empty, Cell::text("第三")],
		];
		let table = build_table(rows.into_iter());
		let rows: Vec<usize> = table.iter().map(|record| record.row).collect();

		assert_eq!(table.len(), 2);
		assert_eq!(rows, vec![0, 2]);
		assert_eq!(table.records()[1].body, Cell::text("第三"));
	}

	#[test]
	fn json_values_map_to_cells() {
		assert_eq!(cell_from_json(&Value::from("x")), Cell::text("x"));
		assert_eq!(cell_from_json(&Value::from(3)), Cell::Value("3".to_string()));
		assert_eq!(cell_from_json(&Value::from(4.0)), Cell::Value("4".to_string()));
		assert_eq!(cell_from_json(&Value::from(true)), Cell::Value("true".to_string()));
		assert_eq!(cell_from_json(&Value::Null), Cell::Empty);
	}
}
