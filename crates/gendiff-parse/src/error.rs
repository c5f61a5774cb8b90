//! Error types for the parse crate.

use std::path::PathBuf;

use crate::format::DocumentFormat;

/// Errors that can occur while loading a document from disk.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The file extension does not map to a known decoder.
    #[error("unsupported file extension: {0:?}")]
    UnsupportedFormat(String),

    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its contents are not a valid document.
    #[error("failed to parse {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

/// Errors produced when decoding in-memory content.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Malformed JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Syntactically valid, but the top level is not a mapping.
    #[error("expected a mapping at the top level of the {format} document, found {found}")]
    NotAMapping {
        format: DocumentFormat,
        found: &'static str,
    },

    /// Two mapping keys became the same string once non-string keys were
    /// stringified (`1:` and `"1":`).
    #[error("duplicate key {key:?} after stringifying mapping keys")]
    DuplicateKey { key: String },
}

/// Result alias for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;
