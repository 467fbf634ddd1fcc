//! This module contains the bibliographic record model: the entry types the renderer knows, the
//! typed set of fields an entry may carry, and the cleaning pass that turns raw bibtex text into
//! HTML-ready text.

pub mod entry;
pub mod fields;
pub mod normalize;
pub mod substitutions;
