use serde::{Deserialize, Serialize};

/// Name of the output style used when none is requested.
pub const DEFAULT_FORMAT: &str = "stylish";

/// Options for a comparison run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenDiffConfig {
    /// Output style name, resolved against the formatter registry.
    pub format: String,
}

impl Default for GenDiffConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_owned(),
        }
    }
}

impl GenDiffConfig {
    /// A configuration rendering with the named style.
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}
