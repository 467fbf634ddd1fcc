use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// A citation inside a page, e.g., `see [{smith2001}]`
static RE_CITATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\{(.*?)\}\]").unwrap());

/// Every key cited in `text`, sorted and without duplicates
pub fn citation_keys(text: &str) -> Vec<String> {
    RE_CITATION
        .captures_iter(text)
        .map(|captures| {
            let (_, [key]) = captures.extract();
            key.to_string()
        })
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
