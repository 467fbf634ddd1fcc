//! Turns bibtex text into [`Record`]s, either by streaming through a whole file ([`Entries`]) or
//! by picking out a single entry by its citation key ([`locate`]).
//!
//! Both share the same per-entry state machine: after the declaration line we are either waiting
//! for a field or accumulating one, and each following line is a new field, a continuation of the
//! current field, or the closing `}`.

use log::debug;

use crate::errors::ParserError;
use crate::record::entry::{EntryType, Record};
use crate::scanner::Scanner;
use crate::scanner::lines::{BibLine, LineType};

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldState {
    AwaitingField,
    Accumulating { name: String, text: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Closed,
}

/// Builds one [`Record`] from the lines following its declaration
#[derive(Debug)]
pub struct EntryParser {
    record: Record,
    state: FieldState,
}

impl EntryParser {
    /// Starts an entry from its `@type{key,` line
    pub fn from_declaration(declaration: &BibLine) -> Result<Self, ParserError> {
        let (Some(entry_type), Some(key)) = (declaration.entry_type(), declaration.key()) else {
            return Err(ParserError::parse(
                declaration.line,
                format!("Malformed entry declaration: {}", declaration.text),
            ));
        };
        Ok(EntryParser {
            record: Record::new(EntryType::from_tag(entry_type), key),
            state: FieldState::AwaitingField,
        })
    }

    pub fn push_line(&mut self, line: &BibLine) -> Result<Transition, ParserError> {
        match line.line_type() {
            LineType::Field => {
                self.flush();
                if let Some((name, text)) = line.field() {
                    self.state = FieldState::Accumulating { name, text };
                }
                Ok(Transition::Continue)
            }
            LineType::Continuation => match &mut self.state {
                FieldState::Accumulating { text, .. } => {
                    text.push(' ');
                    text.push_str(&line.continuation());
                    Ok(Transition::Continue)
                }
                FieldState::AwaitingField => Err(ParserError::parse(
                    line.line,
                    format!("Expected a field declaration (name = value), found: {}", line.text),
                )),
            },
            LineType::Blank => Ok(Transition::Continue),
            LineType::Terminator => {
                self.flush();
                Ok(Transition::Closed)
            }
            LineType::Declaration => Err(ParserError::parse(
                line.line,
                format!("Entry {} was never closed", self.record.key),
            )),
        }
    }

    fn flush(&mut self) {
        if let FieldState::Accumulating { name, text } =
            std::mem::replace(&mut self.state, FieldState::AwaitingField)
        {
            self.record.fields.insert(&name, text);
        }
    }

    pub fn finish(self) -> Record {
        self.record
    }
}

/// Reads the entry opened by `declaration` from `lines`, consuming up to and including its
/// closing `}`
fn read_entry<'a, I>(declaration: &BibLine<'a>, lines: &mut I) -> Result<Record, ParserError>
where
    I: Iterator<Item = BibLine<'a>>,
{
    let mut entry = EntryParser::from_declaration(declaration)?;
    let mut last_line = declaration.line;
    for line in lines {
        last_line = line.line;
        if entry.push_line(&line)? == Transition::Closed {
            let record = entry.finish();
            debug!("Parsed {} entry {}", record.entry_type, record.key);
            return Ok(record);
        }
    }
    Err(ParserError::parse(
        last_line,
        format!("Entry {} was never closed", entry.finish().key),
    ))
}

/// Lazily yields every entry of a bibliography, in source order. Lines outside of entries are
/// skipped. The first error ends the iteration.
#[derive(Debug)]
pub struct Entries<'a> {
    lines: Scanner<'a>,
    done: bool,
}

impl<'a> Entries<'a> {
    pub fn new(source: &'a str) -> Self {
        Entries {
            lines: Scanner::new(source),
            done: false,
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Result<Record, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(declaration) = self
            .lines
            .by_ref()
            .find(|line| line.line_type() == LineType::Declaration)
        else {
            self.done = true;
            return None;
        };
        let result = read_entry(&declaration, &mut self.lines);
        self.done = result.is_err();
        Some(result)
    }
}

impl std::iter::FusedIterator for Entries<'_> {}

/// Convenience function for [`Entries`]
pub fn entries(source: &str) -> Entries<'_> {
    Entries::new(source)
}

/// Finds the entry declared as `@type{key,` and parses just that entry
pub fn locate(source: &str, key: &str) -> Result<Record, ParserError> {
    let mut lines = Scanner::new(source);
    let declaration = lines
        .by_ref()
        .find(|line| line.declares_key(key))
        .ok_or_else(|| ParserError::KeyNotFound(key.to_string()))?;
    let mut record = read_entry(&declaration, &mut lines)?;
    record.key = key.to_string();
    Ok(record)
}
