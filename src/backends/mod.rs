//! Backends turn parsed and cleaned records into output documents. Currently the backends include:
//!
//! - HTML: a publication list page, single list items, and reference lists for other pages
//! - JSON: the grouped records, mostly useful for debugging a bibliography

use clap::ValueEnum;

pub mod htmls;
pub mod json;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backends {
    Html,
    Json,
}

impl Backends {
    /// Extension of the file written when no output path is given
    pub fn extension(&self) -> &'static str {
        match self {
            Backends::Html => "html",
            Backends::Json => "json",
        }
    }
}
