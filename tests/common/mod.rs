use std::fs;

use bib2html::parser::entries;
use bib2html::record::entry::Record;

pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/data/{}", name)).expect("Unable to read test fixture")
}

pub fn parse_all(source: &str) -> Vec<Record> {
    entries(source)
        .collect::<Result<Vec<Record>, _>>()
        .expect("Unable to parse test bibliography")
}
