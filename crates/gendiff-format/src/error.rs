//! Error types for the format crate.

/// Errors that can occur while resolving a formatter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// No formatter is registered under the requested name.
    #[error("unsupported format: {name} (available: {})", available.join(", "))]
    UnsupportedFormat {
        name: String,
        available: Vec<String>,
    },
}

/// Result alias for format operations.
pub type FormatResult<T> = Result<T, FormatError>;
