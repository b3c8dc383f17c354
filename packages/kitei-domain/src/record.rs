use std::{collections::HashSet, fmt};

use serde::Serialize;

/// One spreadsheet cell. Only `Text` takes part in normalization and substring matching.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
	Text(String),
	/// Numbers, booleans and dates, carried as their display form.
	Value(String),
	#[default]
	Empty,
}
impl Cell {
	pub fn text(value: impl Into<String>) -> Self {
		Self::Text(value.into())
	}

	pub fn number(value: f64) -> Self {
		if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
			Self::Value(format!("{}", value as i64))
		} else {
			Self::Value(value.to_string())
		}
	}

	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text.as_str()),
			_ => None,
		}
	}

	/// Substring test; non-text cells never contain anything.
	pub fn contains(&self, needle: &str) -> bool {
		self.as_text().map(|text| text.contains(needle)).unwrap_or(false)
	}

	/// Applies `f` to text cells and passes every other cell through untouched.
	pub fn map_text(&self, f: impl FnOnce(&str) -> String) -> Self {
		match self {
			Self::Text(text) => Self::Text(f(text)),
			other => other.clone(),
		}
	}
}
impl fmt::Display for Cell {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(value) | Self::Value(value) => f.write_str(value),
			Self::Empty => Ok(()),
		}
	}
}
impl From<&str> for Cell {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
	/// Zero-based position in the source table, excluding the header.
	pub row: usize,
	pub category: Cell,
	pub regulation: Cell,
	pub clause_title: Cell,
	pub clause_number: Cell,
	pub body: Cell,
}
impl Record {
	pub fn map_text(&self, f: impl Fn(&str) -> String) -> Self {
		Self {
			row: self.row,
			category: self.category.map_text(&f),
			regulation: self.regulation.map_text(&f),
			clause_title: self.clause_title.map_text(&f),
			clause_number: self.clause_number.map_text(&f),
			body: self.body.map_text(&f),
		}
	}
}

/// Ordered, read-only collection of records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
	records: Vec<Record>,
}
impl Table {
	pub fn new(records: Vec<Record>) -> Self {
		Self { records }
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn records(&self) -> &[Record] {
		&self.records
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Record> {
		self.records.iter()
	}

	/// Unique non-empty categories in first-appearance order.
	pub fn categories(&self) -> Vec<String> {
		let mut seen = HashSet::new();
		let mut out = Vec::new();

		for record in &self.records {
			let category = record.category.to_string();

			if category.is_empty() {
				continue;
			}
			if seen.insert(category.clone()) {
				out.push(category);
			}
		}

		out
	}

	/// Returns a copy with `f` applied to every text cell.
	pub fn map_text(&self, f: impl Fn(&str) -> String) -> Self {
		Self { records: self.records.iter().map(|record| record.map_text(&f)).collect() }
	}
}
impl<'a> IntoIterator for &'a Table {
	type IntoIter = std::slice::Iter<'a, Record>;
	type Item = &'a Record;

	fn into_iter(self) -> Self::IntoIter {
		self.records.iter()
	}
}
