use std::fmt;
use std::path::Path;

use crate::error::ParseError;

/// The encoding of a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Every supported format, in dispatch order.
    pub const ALL: [Self; 2] = [Self::Json, Self::Yaml];

    /// Resolve the format from a path's extension.
    ///
    /// Matching is ASCII case-insensitive. A missing or unknown extension
    /// yields [`ParseError::UnsupportedFormat`] carrying the extension as
    /// written (with its leading dot), or an empty string when there is none.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_extension(&ext).ok_or_else(|| {
            ParseError::UnsupportedFormat(if ext.is_empty() {
                ext
            } else {
                format!(".{ext}")
            })
        })
    }

    /// Resolve the format from a bare extension (no leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Extensions recognised for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Yaml => &["yaml", "yml"],
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Yaml => f.write_str("YAML"),
        }
    }
}
