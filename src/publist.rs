//! Groups the records of a bibliography into the sections of a publication list.

use log::debug;
use serde::Serialize;

use crate::errors::ParserError;
use crate::parser::entries;
use crate::record::entry::{EntryType, Record};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Journals,
    Conferences,
    BookChapters,
    TechnicalReports,
    Thesis,
}

impl Section {
    /// Sections in the order they appear in the list
    pub const ALL: [Section; 5] = [
        Section::Journals,
        Section::Conferences,
        Section::BookChapters,
        Section::TechnicalReports,
        Section::Thesis,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            Section::Journals => "Journals",
            Section::Conferences => "Conferences and Workshops",
            Section::BookChapters => "Book Chapters",
            Section::TechnicalReports => "Technical Reports",
            Section::Thesis => "Thesis",
        }
    }

    pub fn for_entry_type(entry_type: &EntryType) -> Option<Self> {
        match entry_type {
            EntryType::Article => Some(Section::Journals),
            EntryType::InProceedings => Some(Section::Conferences),
            EntryType::InBook => Some(Section::BookChapters),
            EntryType::TechReport => Some(Section::TechnicalReports),
            EntryType::PhdThesis => Some(Section::Thesis),
            EntryType::Other(_) => None,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub section: Section,
    pub heading: &'static str,
    pub records: Vec<Record>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Cleaned records sorted into one bucket per [`Section`], keeping source order within each
pub struct PublicationList {
    pub buckets: Vec<Bucket>,
}

impl Default for PublicationList {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicationList {
    pub fn new() -> Self {
        PublicationList {
            buckets: Section::ALL
                .iter()
                .map(|section| Bucket {
                    section: *section,
                    heading: section.heading(),
                    records: vec![],
                })
                .collect(),
        }
    }

    /// Parses and cleans every entry of `source`; the first parse error aborts
    pub fn from_source(source: &str) -> Result<Self, ParserError> {
        let mut list = PublicationList::new();
        for record in entries(source) {
            list.push(record?);
        }
        Ok(list)
    }

    /// Cleans the record and files it under its section. Records of a type without a section are
    /// dropped, and `false` is returned.
    pub fn push(&mut self, mut record: Record) -> bool {
        let Some(section) = Section::for_entry_type(&record.entry_type) else {
            debug!(
                "Skipping {}: {} entries are not listed",
                record.key, record.entry_type
            );
            return false;
        };
        record.clean();
        self.buckets
            .iter_mut()
            .find(|bucket| bucket.section == section)
            .map(|bucket| bucket.records.push(record))
            .is_some()
    }

    pub fn section(&self, section: Section) -> &[Record] {
        self.buckets
            .iter()
            .find(|bucket| bucket.section == section)
            .map(|bucket| bucket.records.as_slice())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Record> for PublicationList {
    fn from_iter<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut list = PublicationList::new();
        for record in records {
            list.push(record);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_records_into_sections() {
        let list: PublicationList = [
            Record::new(EntryType::TechReport, "t1"),
            Record::new(EntryType::Article, "a1"),
            Record::new(EntryType::Other("misc".into()), "m1"),
            Record::new(EntryType::Article, "a2"),
            Record::new(EntryType::PhdThesis, "p1"),
        ]
        .into_iter()
        .collect();

        let keys = |section| {
            list.section(section)
                .iter()
                .map(|r| r.key.as_str())
                .collect::<Vec<&str>>()
        };
        assert_eq!(keys(Section::Journals), vec!["a1", "a2"]);
        assert_eq!(keys(Section::TechnicalReports), vec!["t1"]);
        assert_eq!(keys(Section::Thesis), vec!["p1"]);
        assert!(keys(Section::Conferences).is_empty());
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn pushed_records_are_cleaned() {
        let mut list = PublicationList::new();
        assert!(list.push(Record::new(EntryType::InBook, "b1").with_field("pages", "1--2")));
        let record = &list.section(Section::BookChapters)[0];
        assert!(record.is_clean());
        assert_eq!(record.fields.pages.as_deref(), Some("1&ndash;2"));
    }

    #[test]
    fn unknown_types_are_dropped() {
        let mut list = PublicationList::new();
        assert!(!list.push(Record::new(EntryType::Other("book".into()), "b")));
        assert!(list.is_empty());
    }

    #[test]
    fn buckets_follow_heading_order() {
        let headings: Vec<&str> = PublicationList::new()
            .buckets
            .iter()
            .map(|b| b.heading)
            .collect();
        assert_eq!(
            headings,
            vec![
                "Journals",
                "Conferences and Workshops",
                "Book Chapters",
                "Technical Reports",
                "Thesis"
            ]
        );
    }

    #[test]
    fn parse_errors_abort() {
        assert!(PublicationList::from_source("@misc{m,\ntitle = {A}\n").is_err());
    }
}
