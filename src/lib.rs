//! Turns a hand-written bibtex file into HTML: a publication list grouped by publication type,
//! and single formatted references that other page generators can splice into their output.
//!
//! This crate provides a CLI tool (`bib2html`) as well as library access to the parser, the
//! record model and its cleaning pass, and the HTML/JSON backends.
//!
//! NOTE: this is not a full bibtex parser. The grammar it reads is restricted:
//!
//! - entries start with `@type{key,` in the first column
//! - fields are declared as `name = value`, with whitespace on both sides of the `=`; a field's
//!   value may continue onto the following lines
//! - entries end with a `}` alone in the first column
//! - only a small set of accent escapes is understood; `\emph{}` is supported in titles
//!
//! Comments, `@string` macros and fields spanning several brace levels over multiple lines are
//! not supported.
//!
//! ```
//! use bib2html::{backends::htmls::render_by_key, config::Config};
//!
//! let bib = "@article{smith2001,\nauthor = {Smith, John},\ntitle = {On cod},\nyear = 2001\n}\n";
//! let html = render_by_key(bib, "smith2001", &Config::default()).unwrap();
//! assert!(html.contains("<span class=\"author\">John&nbsp;Smith</span>"));
//! ```

pub mod backends;
pub mod citations;
pub mod config;
pub mod errors;
pub mod parser;
pub mod publist;
pub mod record;
pub mod scanner;
