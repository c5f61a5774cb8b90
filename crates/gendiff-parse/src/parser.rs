use std::path::Path;

use gendiff_types::Document;
use tracing::debug;

use crate::error::{DecodeError, ParseError, ParseResult};
use crate::format::DocumentFormat;
use crate::{json, yaml};

/// Read `path` and decode it into a [`Document`].
///
/// The decoder is chosen from the extension before the file is touched, so an
/// unsupported extension never triggers a read. The file is read once, in
/// full, and either decodes completely or fails.
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<Document> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    debug!(path = %path.display(), %format, "reading document");

    let content = std::fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_str(&content, format).map_err(|source| ParseError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), keys = document.len(), "document decoded");
    Ok(document)
}

/// Decode in-memory content with an explicit format.
pub fn parse_str(content: impl AsRef<[u8]>, format: DocumentFormat) -> Result<Document, DecodeError> {
    match format {
        DocumentFormat::Json => json::decode(content.as_ref()),
        DocumentFormat::Yaml => yaml::decode(content.as_ref()),
    }
}
