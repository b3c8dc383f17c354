// Closed-class word lists used by the script analyzer. Matching always takes the longest entry.

/// Okurigana that turn a preceding kanji stem into a verb form.
pub(crate) const VERB_ENDINGS: &[&str] = &[
	"われる", "わせる", "わせ", "められる", "める", "めた", "めて", "め", "える", "えた", "えて",
	"え", "ける", "けた", "けて", "け", "げる", "げ", "じる", "じた", "じて", "じ", "せる", "てる",
	"ねる", "べる", "れる", "びる", "りる", "いる", "きる", "ちる", "みる", "わ", "い", "う", "き",
	"く", "ぎ", "ぐ", "す", "た", "ち", "つ", "っ", "ぬ", "び", "ぶ", "ま", "み", "む", "り", "る",
	"ん",
];

/// Forms of する that attach to a sahen noun.
pub(crate) const SURU_FORMS: &[&str] = &[
	"させる", "させ", "される", "され", "された", "されて", "すれば", "する", "した", "して",
	"しない", "し",
];

pub(crate) const HIRAGANA_VERBS: &[&str] = &[
	"する", "します", "した", "して", "し", "される", "され", "させる", "ある", "あり", "あった",
	"あれば", "いる", "います", "なる", "なり", "なった", "なります", "できる", "でき", "おこなう",
	"いう",
];

pub(crate) const HIRAGANA_NOUNS: &[&str] = &[
	"こと", "もの", "とき", "ところ", "ため", "うち", "ほか", "よう", "わけ",
];

pub(crate) const PARTICLES: &[&str] = &[
	"は", "が", "を", "に", "で", "と", "の", "へ", "も", "や", "か", "から", "まで", "より",
	"について", "において", "による", "により", "によって", "または", "もしくは", "および",
	"ならびに", "など", "ず", "つつ", "ながら", "ば", "て", "ても", "でも", "しか", "のみ",
	"だけ", "ただし",
];

pub(crate) const AUXILIARIES: &[&str] = &[
	"ます", "ません", "ました", "まし", "ない", "なかった", "なければ", "ぬ", "れる", "られる",
	"た", "だ", "です", "でし", "う", "べき", "ん",
];

pub(crate) fn longest_prefix(text: &str, table: &[&'static str]) -> Option<&'static str> {
	table.iter().copied().filter(|entry| text.starts_with(entry)).max_by_key(|entry| entry.len())
}
