use std::sync::Arc;

use kitei_config::Config;
use kitei_domain::{Cell, Record, Table};
use kitei_morph::ScriptAnalyzer;
use kitei_service::{
	Combinator, Error, KiteiService, SearchRequest, SimilarRequest, matches_record,
};
use kitei_testkit::{record, sample_table, two_row_table};

const KEYWORD_SETS: &[&[&str]] = &[
	&["保険金"],
	&["保険金", "損害"],
	&["当会社", "支払"],
	&["弁護士", "費用"],
	&["保険期間"],
	&["存在しない"],
	&["保険", "告知", "午後"],
];

fn service(table: Table) -> KiteiService {
	KiteiService::new(Config::default(), table, Arc::new(ScriptAnalyzer))
}

fn keywords(words: &[&str]) -> Vec<String> {
	words.iter().map(|word| word.to_string()).collect()
}

fn search(service: &KiteiService, words: &[&str], combinator: Combinator) -> Vec<usize> {
	service
		.search(SearchRequest { keywords: keywords(words), combinator, categories: Vec::new() })
		.items
		.into_iter()
		.map(|item| item.row)
		.collect()
}

fn contains_all(cell: &Cell, words: &[String]) -> bool {
	words.iter().all(|word| cell.contains(word))
}

fn contains_any(cell: &Cell, words: &[String]) -> bool {
	words.iter().any(|word| cell.contains(word))
}

#[test]
fn any_search_returns_only_the_matching_record() {
	let service = service(two_row_table());

	assert_eq!(search(&service, &["保険金"], Combinator::Any), vec![0]);
}

#[test]
fn all_search_needs_every_keyword_in_one_field() {
	let service = service(two_row_table());

	assert!(search(&service, &["保険金", "無関係"], Combinator::All).is_empty());
}

#[test]
fn all_results_hold_every_keyword_in_body_or_in_title() {
	let service = service(sample_table());

	for words in KEYWORD_SETS {
		let words = keywords(words);
		let response = service.search(SearchRequest {
			keywords: words.clone(),
			combinator: Combinator::All,
			categories: Vec::new(),
		});

		for item in &response.items {
			assert!(
				contains_all(&item.record.body, &words)
					|| contains_all(&item.record.clause_title, &words),
				"Row {} does not hold {words:?} in a single field.",
				item.row
			);
		}

		let expected =
			service.table.iter().filter(|r| matches_record(r, &words, Combinator::All)).count();

		assert_eq!(response.total, expected);
	}
}

#[test]
fn any_results_hold_at_least_one_keyword() {
	let service = service(sample_table());

	for words in KEYWORD_SETS {
		let words = keywords(words);
		let response = service.search(SearchRequest {
			keywords: words.clone(),
			combinator: Combinator::Any,
			categories: Vec::new(),
		});

		for item in &response.items {
			assert!(
				contains_any(&item.record.body, &words)
					|| contains_any(&item.record.clause_title, &words),
				"Row {} holds none of {words:?}.",
				item.row
			);
		}

		let expected = service
			.table
			.iter()
			.filter(|r| contains_any(&r.body, &words) || contains_any(&r.clause_title, &words))
			.count();

		assert_eq!(response.total, expected);
	}
}

#[test]
fn title_alone_satisfies_all() {
	let table = Table::new(vec![record(0, "火災", "約款", "保険金の免責", "無関係な本文")]);
	let service = service(table);

	assert_eq!(search(&service, &["保険金", "免責"], Combinator::All), vec![0]);
}

#[test]
fn category_filter_is_a_strict_subset() {
	let service = service(sample_table());

	for category in service.categories() {
		let response = service.search(SearchRequest {
			keywords: keywords(&["保険"]),
			combinator: Combinator::Any,
			categories: vec![category.clone()],
		});

		assert!(response.total > 0, "Expected hits for {category}.");
		assert!(response.items.iter().all(|item| item.record.category.to_string() == category));
	}

	let response = service.search(SearchRequest {
		keywords: keywords(&["保険"]),
		combinator: Combinator::Any,
		categories: vec!["存在しない種別".to_string()],
	});

	assert_eq!(response.total, 0);
}

#[test]
fn regulation_counts_reflect_true_frequency() {
	let service = service(sample_table());
	let response = service.search(SearchRequest {
		keywords: keywords(&["保険金"]),
		combinator: Combinator::Any,
		categories: Vec::new(),
	});
	let counted: usize = response.regulation_counts.iter().map(|count| count.hits).sum();

	assert_eq!(counted, response.total);

	for count in &response.regulation_counts {
		let actual = response
			.items
			.iter()
			.filter(|item| item.record.regulation.to_string() == count.regulation)
			.count();

		assert_eq!(count.hits, actual);
	}
	for pair in response.regulation_counts.windows(2) {
		assert!(pair[0].hits >= pair[1].hits);
	}
}

#[test]
fn empty_keyword_input_performs_no_search() {
	let service = service(sample_table());
	let keywords = service.parse_keywords(" , ,");
	let response =
		service.search(SearchRequest { keywords, combinator: Combinator::All, categories: vec![] });

	assert!(!response.performed);
	assert_eq!(response.total, 0);
	assert!(response.items.is_empty());
}

#[test]
fn matches_are_highlighted_in_body_and_title() {
	let service = service(sample_table());
	let response = service.search(SearchRequest {
		keywords: keywords(&["保険金", "支払"]),
		combinator: Combinator::All,
		categories: Vec::new(),
	});
	let item = response.items.first().expect("Expected at least one hit.");

	assert!(item.body.is_highlighted());
	assert_eq!(item.body.text(), item.record.body.to_string());
	assert!(item.clause_title.render("[", "]").contains("[保険金]"));
}

#[test]
fn layout_characters_are_stripped_before_matching() {
	let table = Table::new(vec![record(0, "火災", "約款", "第1条", "保険\n金を　支払 います")]);
	let service = service(table);

	assert_eq!(search(&service, &["保険金を支払います"], Combinator::All), vec![0]);
}

#[test]
fn non_text_cells_pass_through() {
	let mut numeric = record(1, "火災", "約款", "第2条", "");

	numeric.body = Cell::number(100.0);

	let mut empty = record(2, "火災", "約款", "第3条", "");

	empty.body = Cell::Empty;

	let table = Table::new(vec![record(0, "火災", "約款", "第1条", "保険金100円"), numeric, empty]);
	let service = service(table);

	assert_eq!(search(&service, &["100"], Combinator::Any), vec![0]);
	assert_eq!(service.index.documents()[1], "100");
	assert_eq!(service.index.documents()[2], "");
	assert!(service.similar(SimilarRequest { query: "保険金".to_string(), top_k: None }).is_ok());
}

#[test]
fn query_equal_to_a_record_scores_one() {
	let query = "被保険者が弁護士へ委任した場合に要した費用に対して、保険金を支払います。";
	let mut records: Vec<Record> = sample_table().records().to_vec();
	let row = records.len();

	records.push(record(row, "自動車保険", "自動車保険特約", "追加条文", query));

	let service = service(Table::new(records));
	let response = service
		.similar(SimilarRequest { query: query.to_string(), top_k: None })
		.expect("Similarity search must succeed.");

	assert!(!response.degenerate);

	let best = response.items.first().expect("Expected ranked items.");

	assert_eq!(best.row, row);
	assert!((best.score - 1.0).abs() < 1e-9, "Unexpected self score {}.", best.score);
	assert!(response.items.iter().all(|item| item.score <= best.score + 1e-12));
}

#[test]
fn ranking_is_bounded_sorted_and_stable() {
	let mut records = Vec::new();

	for row in 0..15 {
		records.push(record(row, "火災", "約款", "条", "保険金を支払います。"));
	}

	records.push(record(15, "火災", "約款", "条", "告知義務の違反"));

	let service = service(Table::new(records));
	let response = service
		.similar(SimilarRequest { query: "保険金".to_string(), top_k: None })
		.expect("Similarity search must succeed.");

	assert_eq!(response.items.len(), 10);

	let rows: Vec<usize> = response.items.iter().map(|item| item.row).collect();

	assert_eq!(rows, (0..10).collect::<Vec<_>>());

	for pair in response.items.windows(2) {
		assert!(pair[0].score >= pair[1].score);
	}
	for (idx, item) in response.items.iter().enumerate() {
		assert_eq!(item.rank, idx + 1);
	}

	let response = service
		.similar(SimilarRequest { query: "保険金".to_string(), top_k: Some(3) })
		.expect("Similarity search must succeed.");

	assert_eq!(response.items.len(), 3);
}

#[test]
fn empty_query_after_cleaning_is_degenerate() {
	let service = service(sample_table());

	for query in ["", "   ", "の", "、。", "zzzz"] {
		let response = service
			.similar(SimilarRequest { query: query.to_string(), top_k: None })
			.expect("Degenerate queries must not fail.");

		assert!(response.degenerate, "Expected degenerate result for {query:?}.");
		assert!(response.items.is_empty());
	}
}

#[test]
fn zero_top_k_is_rejected() {
	let service = service(sample_table());
	let err = service
		.similar(SimilarRequest { query: "保険金".to_string(), top_k: Some(0) })
		.expect_err("Expected invalid request.");

	assert!(matches!(err, Error::InvalidRequest { .. }));
}

#[test]
fn configured_stop_words_cut_inside_tokens() {
	let cfg = kitei_config::parse("[similarity]\nstop_words = [\"金\"]\n")
		.expect("Config must be valid.");
	let service = KiteiService::new(cfg, two_row_table(), Arc::new(ScriptAnalyzer));

	assert_eq!(service.index.preprocessor().pseudo_document("保険金を支払う"), "保険 支払う");
}

#[test]
fn default_combinator_follows_config() {
	let cfg = kitei_config::parse("[search]\ndefault_combinator = \"any\"\n")
		.expect("Config must be valid.");
	let service = KiteiService::new(cfg, two_row_table(), Arc::new(ScriptAnalyzer));

	assert_eq!(service.default_combinator(), Combinator::Any);
}

#[test]
fn nouns_before_conjunctions_stay_searchable() {
	let service = service(Table::new(vec![
		record(0, "傷害保険", "約款", "告知義務", "保険契約者または被保険者"),
		record(1, "傷害保険", "約款", "免責", "保険契約者の故意"),
	]));

	assert_eq!(service.index.documents()[0], "保険契約者 被保険者");

	let response = service
		.similar(SimilarRequest { query: "保険契約者".to_string(), top_k: None })
		.expect("Similarity search must succeed.");
	let rows: Vec<usize> = response.items.iter().map(|item| item.row).collect();

	assert_eq!(rows, vec![0, 1]);
	assert!(response.items.iter().all(|item| item.score > 0.0), "{:?}", response.items);
	assert!((response.items[0].score - response.items[1].score).abs() < 1e-12);
}
