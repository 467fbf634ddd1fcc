use std::path::PathBuf;

/// Errors raised while reading bibliography text
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParserError {
    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("Unable to find {0} in bibliography")]
    KeyNotFound(String),
}

impl ParserError {
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        ParserError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Errors raised while turning records into an output document
#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unable to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
