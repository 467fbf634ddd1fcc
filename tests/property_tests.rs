use bib2html::parser::entries;
use bib2html::record::entry::{EntryType, Record};
use bib2html::record::normalize::normalize_field;
use proptest::prelude::*;

const TAGS: &[&str] = &["article", "inproceedings", "inbook", "techreport", "phdthesis", "misc"];
const NAMES: &[&str] = &[
    "author", "title", "journal", "booktitle", "volume", "number", "pages", "note", "month",
    "year", "url", "doi", "pdf", "school", "publisher", "chapter", "keywords",
];

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9{}.,:/-]{1,10}", 1..6)
}

fn record() -> impl Strategy<Value = Record> {
    (
        prop::sample::select(TAGS),
        "[a-z][a-z0-9]{0,10}",
        prop::collection::btree_map(prop::sample::select(NAMES), words(), 0..8),
    )
        .prop_map(|(tag, key, fields)| {
            fields
                .into_iter()
                .fold(Record::new(EntryType::from_tag(tag), key), |record, (name, words)| {
                    record.with_field(name, words.join(" "))
                })
        })
}

#[test]
fn reserialized_records_parse_back() {
    proptest::proptest!(|(record in record())| {
        let reparsed = entries(&record.to_bib_string()).next().unwrap().unwrap();
        prop_assert_eq!(reparsed, record);
    })
}

#[test]
fn continuation_lines_recover_the_value() {
    proptest::proptest!(|(words in words(), indent in 1usize..6)| {
        let mut source = format!("@misc{{m,\nnote = {}\n", words[0]);
        for word in &words[1..] {
            source.push_str(&format!("{}{}\n", " ".repeat(indent), word));
        }
        source.push_str("}\n");
        let record = entries(&source).next().unwrap().unwrap();
        prop_assert_eq!(record.fields.note, Some(words.join(" ")));
    })
}

#[test]
fn cleaning_twice_is_cleaning_once() {
    proptest::proptest!(|(record in record())| {
        let once = record.cleaned();
        prop_assert_eq!(once.clone().cleaned(), once);
    })
}

#[test]
fn cleaning_keeps_single_pass_author_lists() {
    proptest::proptest!(|(
        given in "[A-Z][a-z]{1,8}",
        surname in "[A-Z][a-z]{1,8}",
        other in "[A-Z][a-z]{1,8} [A-Z][a-z]{1,8}"
    )| {
        let raw = format!("{{{}, {} and {}}},", surname, given, other);
        let once = Record::new(EntryType::Article, "a")
            .with_field("author", raw.as_str())
            .cleaned();
        let expected = normalize_field("author", &raw);
        prop_assert_eq!(once.fields.author.as_deref(), Some(expected.as_str()));
        prop_assert_eq!(once.clone().cleaned().fields.author, Some(expected));
    })
}

#[test]
fn normalizing_clean_text_changes_nothing() {
    proptest::proptest!(|(
        name in prop::sample::select(NAMES[1..].to_vec()),
        value in "[A-Za-z0-9 .:/-]{0,30}"
    )| {
        let once = normalize_field(name, &value);
        prop_assert_eq!(normalize_field(name, &once), once);
    })
}
