pub mod cli;
pub mod render;
pub mod shell;

pub use cli::{Args, CombinatorArg, Command, Format, SearchArgs, ShellArgs, SimilarArgs};

use std::{
	io::{self, Write},
	sync::Arc,
};

use color_eyre::eyre;
use tracing_subscriber::EnvFilter;

use kitei_config::Config;
use kitei_morph::ScriptAnalyzer;
use kitei_service::{
	Combinator, KiteiService, SearchRequest, SearchResponse, SimilarRequest, SimilarResponse,
};

pub fn render_search(
	service: &KiteiService,
	response: &SearchResponse,
	format: Format,
) -> serde_json::Result<String> {
	let columns = &service.cfg.columns;

	match format {
		Format::Text => Ok(render::search(response, columns, render::ANSI_RED)),
		Format::Html => {
			let highlight = &service.cfg.highlight;
			let markers = render::Markers { open: &highlight.open, close: &highlight.close };

			Ok(render::search(response, columns, markers))
		},
		Format::Json => serde_json::to_string_pretty(response).map(|json| json + "\n"),
	}
}

/// Similarity results carry no highlights, so html renders like text.
pub fn render_similar(
	service: &KiteiService,
	response: &SimilarResponse,
	format: Format,
) -> serde_json::Result<String> {
	match format {
		Format::Text | Format::Html => Ok(render::similar(response, &service.cfg.columns)),
		Format::Json => serde_json::to_string_pretty(response).map(|json| json + "\n"),
	}
}

/// Loads the table named by `args`/`cfg` and fits the service over it.
pub fn build_service(args: &Args, cfg: Config) -> color_eyre::Result<KiteiService> {
	let path = args
		.table
		.clone()
		.or_else(|| cfg.table.path.clone())
		.ok_or_else(|| eyre::eyre!("No table given; pass --table or set table.path."))?;
	let sheet = args.sheet.as_deref().or(cfg.table.sheet.as_deref());
	let table = kitei_table::load(&path, sheet, &cfg.columns)?;

	Ok(KiteiService::new(cfg, table, Arc::new(ScriptAnalyzer)))
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let cfg = match &args.config {
		Some(path) => kitei_config::load(path)?,
		None => Config::default(),
	};
	let filter = EnvFilter::new(cfg.service.log_level.clone());

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

	tracing::debug!(config = ?args.config, table = ?args.table, "Starting kitei.");

	let service = build_service(&args, cfg)?;
	let mut stdout = io::stdout().lock();

	match args.command {
		Command::Categories => write!(stdout, "{}", render::categories(&service.categories()))?,
		Command::Search(search) => {
			let combinator = search
				.combinator
				.map(Combinator::from)
				.unwrap_or_else(|| service.default_combinator());
			let response = service.search(SearchRequest {
				keywords: service.parse_keywords(&search.keywords),
				combinator,
				categories: search.categories,
			});

			write!(stdout, "{}", render_search(&service, &response, search.format)?)?;
		},
		Command::Similar(similar) => {
			let response =
				service.similar(SimilarRequest { query: similar.query, top_k: similar.top_k })?;

			write!(stdout, "{}", render_similar(&service, &response, similar.format)?)?;
		},
		Command::Shell(session) =>
			shell::run(&service, io::stdin().lock(), &mut stdout, session.format)?,
	}

	stdout.flush()?;

	Ok(())
}
