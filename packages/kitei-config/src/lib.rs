mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Columns, Config, Highlight, Search, Service, Similarity, Table};

use std::{collections::HashSet, fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(&raw).map_err(|err| match err {
		Error::ParseConfig { source, .. } => Error::ParseConfig { path: path.to_path_buf(), source },
		other => other,
	})
}

/// Parses, normalizes and validates a config document that did not come from a file.
pub fn parse(raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: Default::default(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	let mut seen = HashSet::new();

	for label in cfg.columns.labels() {
		if label.is_empty() {
			return Err(Error::Validation {
				message: "columns labels must be non-empty.".to_string(),
			});
		}
		if !seen.insert(label) {
			return Err(Error::Validation {
				message: format!("columns label {label:?} is used more than once."),
			});
		}
	}

	if cfg.search.keyword_separator.is_empty() {
		return Err(Error::Validation {
			message: "search.keyword_separator must be non-empty.".to_string(),
		});
	}
	if !matches!(cfg.search.default_combinator.as_str(), "all" | "any") {
		return Err(Error::Validation {
			message: "search.default_combinator must be one of all or any.".to_string(),
		});
	}
	if cfg.similarity.top_k == 0 {
		return Err(Error::Validation {
			message: "similarity.top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.similarity.min_term_chars == 0 {
		return Err(Error::Validation {
			message: "similarity.min_term_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.highlight.open.is_empty() || cfg.highlight.close.is_empty() {
		return Err(Error::Validation {
			message: "highlight.open and highlight.close must be non-empty.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.table.path.as_deref().map(|path| path.as_os_str().is_empty()).unwrap_or(false) {
		cfg.table.path = None;
	}
	if cfg.table.sheet.as_deref().map(|sheet| sheet.trim().is_empty()).unwrap_or(false) {
		cfg.table.sheet = None;
	}

	for label in [
		&mut cfg.columns.category,
		&mut cfg.columns.regulation,
		&mut cfg.columns.clause_title,
		&mut cfg.columns.clause_number,
		&mut cfg.columns.body,
	] {
		*label = label.trim().to_string();
	}

	cfg.search.default_combinator = cfg.search.default_combinator.trim().to_ascii_lowercase();

	if let Some(words) = cfg.similarity.stop_words.as_mut() {
		words.retain_mut(|word| {
			*word = word.trim().to_string();

			!word.is_empty()
		});
	}
}
