//! Rewrites raw field text, as it sits in the bibtex source, into the HTML-ready text the
//! renderer emits.
//!
//! Every field gets, in this order: whitespace trimming, accent substitution, `\emph{}` to `<i>`
//! (titles only), removal of `{`, `}` and `"`, and the loss of one trailing comma. Authors and
//! pages then get their own treatment.
//!
//! NOTE: this is a single-application transformation. Re-running [`normalize_field`] over an
//! author list it already produced re-splits the joined names (see
//! [`crate::record::entry::Record::clean`], which guards against that).

use crate::record::substitutions::{ACCENT_SUBSTITUTIONS, NBSP, NDASH, RE_EMPH};

pub fn normalize_field(name: &str, raw: &str) -> String {
    let mut value = replace_accents(raw.trim());
    if name == "title" {
        value = emphasize(&value);
    }
    value.retain(|c| !matches!(c, '{' | '}' | '"'));
    if value.ends_with(',') {
        value.pop();
    }
    match name {
        "author" => format_authors(&value),
        "pages" => format_pages(&value),
        _ => value,
    }
}

pub fn replace_accents(value: &str) -> String {
    ACCENT_SUBSTITUTIONS
        .iter()
        .fold(value.to_string(), |acc, (escape, replacement)| {
            acc.replace(escape, replacement)
        })
}

/// `\emph{Gadus morhua}` -> `<i>Gadus morhua</i>`
pub fn emphasize(value: &str) -> String {
    RE_EMPH.replace_all(value, "<i>${1}</i>").into_owned()
}

/// Splits an author list on " and ", reorders any "Surname, Given" names, keeps each name on one
/// line with non-breaking spaces and joins the list with ", ".
pub fn format_authors(value: &str) -> String {
    value
        .split(" and ")
        .map(|name| format_name(name.trim()))
        .collect::<Vec<String>>()
        .join(", ")
}

fn format_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.split_first() {
        Some((surname, given)) if surname.ends_with(',') && !given.is_empty() => {
            format!("{}{NBSP}{}", given.join(NBSP), surname.replace(',', ""))
        }
        Some((surname, _)) if surname.ends_with(',') => surname.replace(',', ""),
        _ => parts.join(NBSP),
    }
}

/// `12--34` and `12-34` both become `12&ndash;34`
pub fn format_pages(value: &str) -> String {
    value.replace("--", NDASH).replace('-', NDASH)
}
