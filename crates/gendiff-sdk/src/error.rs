use std::fmt;

use gendiff_parse::ParseError;
use gendiff_format::FormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenDiffError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl GenDiffError {
    /// Which class of failure this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::Io { .. }) => ErrorKind::Io,
            Self::Parse(ParseError::Decode { .. }) => ErrorKind::Parse,
            Self::Parse(ParseError::UnsupportedFormat(_)) => ErrorKind::UnsupportedFormat,
            Self::Format(FormatError::UnsupportedFormat { .. }) => ErrorKind::UnsupportedFormat,
        }
    }
}

/// Coarse failure classes reported by [`GenDiffError::kind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A file could not be read.
    Io,
    /// A file was malformed or its top level was not a mapping.
    Parse,
    /// Unknown file extension or unknown output format name.
    UnsupportedFormat,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => f.write_str("io"),
            Self::Parse => f.write_str("parse"),
            Self::UnsupportedFormat => f.write_str("unsupported format"),
        }
    }
}

pub type GenDiffResult<T> = Result<T, GenDiffError>;
