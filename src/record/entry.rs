use std::fmt;

use log::debug;
use serde::{Serialize, Serializer};

use crate::record::fields::Fields;
use crate::record::normalize::normalize_field;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Publication kinds the renderer knows how to lay out; anything else is carried along as
/// `Other` with its lower-cased tag
pub enum EntryType {
    Article,
    InProceedings,
    InBook,
    TechReport,
    PhdThesis,
    Other(String),
}

impl EntryType {
    /// Case-insensitive, e.g. `@Article{` and `@article{` are the same thing
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        match tag.as_str() {
            "article" => EntryType::Article,
            "inproceedings" => EntryType::InProceedings,
            "inbook" => EntryType::InBook,
            "techreport" => EntryType::TechReport,
            "phdthesis" => EntryType::PhdThesis,
            _ => EntryType::Other(tag),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntryType::Article => "article",
            EntryType::InProceedings => "inproceedings",
            EntryType::InBook => "inbook",
            EntryType::TechReport => "techreport",
            EntryType::PhdThesis => "phdthesis",
            EntryType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    #[default]
    Raw,
    Clean,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// One bibliography entry. Field values start out as the raw source text and are rewritten in
/// place, once, by [`Record::clean`].
pub struct Record {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub key: String,
    pub fields: Fields,
    #[serde(skip)]
    state: FieldState,
}

impl Record {
    pub fn new(entry_type: EntryType, key: impl Into<String>) -> Self {
        Record {
            entry_type,
            key: key.into(),
            fields: Fields::default(),
            state: FieldState::Raw,
        }
    }

    /// Builder-style helper, mostly for tests
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name, value.into());
        self
    }

    pub fn is_clean(&self) -> bool {
        self.state == FieldState::Clean
    }

    /// Normalizes every field value for display (see [`crate::record::normalize`]). Cleaning is
    /// a one-way trip: calling this on an already clean record does nothing.
    pub fn clean(&mut self) {
        if self.is_clean() {
            debug!("Record {} is already clean", self.key);
            return;
        }
        for (name, value) in self.fields.iter_mut() {
            *value = normalize_field(name, value.as_str());
        }
        self.state = FieldState::Clean;
    }

    pub fn cleaned(mut self) -> Self {
        self.clean();
        self
    }

    /// Writes the record back out in the line-oriented grammar the parser reads, one field per
    /// line
    pub fn to_bib_string(&self) -> String {
        let mut bib = format!("@{}{{{},\n", self.entry_type, self.key);
        for (name, value) in self.fields.iter() {
            bib.push_str(&format!("{name} = {value}\n"));
        }
        bib.push_str("}\n");
        bib
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("article", EntryType::Article)]
    #[case("Article", EntryType::Article)]
    #[case("INPROCEEDINGS", EntryType::InProceedings)]
    #[case("inbook", EntryType::InBook)]
    #[case("TechReport", EntryType::TechReport)]
    #[case("phdthesis", EntryType::PhdThesis)]
    #[case("Misc", EntryType::Other("misc".to_string()))]
    fn entry_types_from_tags(#[case] tag: &str, #[case] expected: EntryType) {
        assert_eq!(EntryType::from_tag(tag), expected)
    }

    #[test]
    fn cleaning_rewrites_every_field() {
        let mut record = Record::new(EntryType::Article, "a1")
            .with_field("author", "{Smith, John},")
            .with_field("pages", "{1--9},")
            .with_field("keywords", "{cod},");
        assert!(!record.is_clean());
        record.clean();
        assert!(record.is_clean());
        assert_eq!(record.fields.author.as_deref(), Some("John&nbsp;Smith"));
        assert_eq!(record.fields.pages.as_deref(), Some("1&ndash;9"));
        assert_eq!(record.fields.get("keywords"), Some("cod"));
        assert_eq!(record.key, "a1");
    }

    #[test]
    fn cleaning_twice_changes_nothing() {
        let once = Record::new(EntryType::Article, "a1")
            .with_field("author", "{Smith, John and Doe, Jane},")
            .with_field("title", "{\\emph{Gadus} {morhua}},")
            .cleaned();
        let twice = once.clone().cleaned();
        assert_eq!(once, twice);
    }

    #[test]
    fn serializes_back_to_bibtex() {
        let record = Record::new(EntryType::TechReport, "tr7")
            .with_field("number", "7,")
            .with_field("title", "{Report},");
        assert_eq!(
            record.to_bib_string(),
            "@techreport{tr7,\ntitle = {Report},\nnumber = 7,\n}\n"
        );
    }
}
