use once_cell::sync::Lazy;
use regex::Regex;

/// Latex accent escapes and what they become in HTML, applied in order. Escapes not listed pass
/// through untouched.
pub static ACCENT_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("\\AE", "Æ"),
    ("\\O", "Ø"),
    ("\\AA", "Å"),
    ("\\ae", "æ"),
    ("\\o", "ø"),
    ("\\^o", "&ocirc;"),
    ("\\aa", "å"),
    ("\\\"a", "&auml;"),
    ("\\'a", "&aacute;"),
    ("\\'e", "&eacute;"),
    ("\\c{c}", "&ccedil;"),
];

/// `\emph{...}`, where the emphasized text may hold one level of balanced braces
pub static RE_EMPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\emph\{((?:[^{}]*\{[^{}]*\})*.*?)\}").unwrap());

pub const NBSP: &str = "&nbsp;";
pub const NDASH: &str = "&ndash;";
