use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::ConversionError;

#[derive(Serialize, Deserialize, ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq)]
/// Character encodings the output document can be written in
pub enum OutputEncoding {
    #[default]
    #[serde(rename = "UTF-8", alias = "utf-8")]
    #[value(name = "utf-8")]
    Utf8,
    #[serde(rename = "ISO-8859-1", alias = "iso-8859-1", alias = "latin1")]
    #[value(name = "iso-8859-1")]
    Latin1,
}

impl OutputEncoding {
    /// The name declared in the document's `charset`
    pub fn charset(&self) -> &'static str {
        match self {
            OutputEncoding::Utf8 => "UTF-8",
            OutputEncoding::Latin1 => "ISO-8859-1",
        }
    }

    /// Encodes the finished document. Characters ISO-8859-1 can't hold are written as numeric
    /// character references.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            OutputEncoding::Utf8 => text.as_bytes().to_vec(),
            OutputEncoding::Latin1 => {
                let mut bytes = Vec::with_capacity(text.len());
                for c in text.chars() {
                    match u8::try_from(u32::from(c)) {
                        Ok(byte) => bytes.push(byte),
                        Err(_) => bytes.extend(format!("&#{};", u32::from(c)).as_bytes()),
                    }
                }
                bytes
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
/// Everything the renderers need to know beyond the records themselves. Built once (from
/// defaults, a JSON file, and/or CLI flags) and passed around by reference.
pub struct Config {
    pub encoding: OutputEncoding,
    /// Page title of the publication list
    pub title: String,
    /// Stylesheet linked from the publication list
    pub css_file: String,
    /// Prefix for `pdf` fields; the field value is appended as-is
    pub pdf_path: String,
    /// Surnames to highlight in author lists (not yet applied to the output)
    pub selected_authors: Vec<String>,
    /// Optional link to the bibtex file itself, shown above the list
    pub bib_link: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            encoding: OutputEncoding::Utf8,
            title: "Publication List".to_string(),
            css_file: "style.css".to_string(),
            pdf_path: "pdf/".to_string(),
            selected_authors: vec![],
            bib_link: None,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ConversionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file; keys it leaves out keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConversionError> {
        let json = fs::read_to_string(path).map_err(|source| ConversionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            Config::from_json_str(r#"{"title": "Papers", "encoding": "ISO-8859-1"}"#).unwrap();
        assert_eq!(config.title, "Papers");
        assert_eq!(config.encoding, OutputEncoding::Latin1);
        assert_eq!(config.css_file, "style.css");
        assert_eq!(config.pdf_path, "pdf/");
        assert!(config.selected_authors.is_empty());
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(
            Config::from_json_str("{title: nope}"),
            Err(ConversionError::Json(_))
        ));
    }

    #[rstest]
    #[case(OutputEncoding::Utf8, "Bjørn &ndash;", "Bjørn &ndash;".as_bytes().to_vec())]
    #[case(OutputEncoding::Latin1, "Bjørn", vec![b'B', b'j', 0xF8, b'r', b'n'])]
    #[case(OutputEncoding::Latin1, "a—b", b"a&#8212;b".to_vec())]
    fn encodes_output(
        #[case] encoding: OutputEncoding,
        #[case] text: &str,
        #[case] expected: Vec<u8>,
    ) {
        assert_eq!(encoding.encode(text), expected)
    }

    #[test]
    fn charset_names() {
        assert_eq!(OutputEncoding::default().charset(), "UTF-8");
        assert_eq!(OutputEncoding::Latin1.charset(), "ISO-8859-1");
    }
}
