use std::fmt;

use gendiff_types::Value;

/// How a key compares between the old and new document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiffStatus {
    /// Key exists in both with an equal value.
    Unchanged,
    /// Key exists only in the new document.
    Added,
    /// Key exists only in the old document.
    Removed,
    /// Key exists in both with different values.
    Changed,
}

impl DiffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
        }
    }
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The comparison outcome for one key.
///
/// `old_value` is set for `Removed`, `Changed` and `Unchanged`; `new_value`
/// is set for `Added` and `Changed`. Build entries through the constructors
/// so the two fields always agree with `status`.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffEntry {
    pub key: String,
    pub status: DiffStatus,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
}

impl DiffEntry {
    pub fn unchanged(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            status: DiffStatus::Unchanged,
            old_value: Some(value),
            new_value: None,
        }
    }

    pub fn added(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            status: DiffStatus::Added,
            old_value: None,
            new_value: Some(value),
        }
    }

    pub fn removed(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            status: DiffStatus::Removed,
            old_value: Some(value),
            new_value: None,
        }
    }

    pub fn changed(key: impl Into<String>, old: Value, new: Value) -> Self {
        Self {
            key: key.into(),
            status: DiffStatus::Changed,
            old_value: Some(old),
            new_value: Some(new),
        }
    }
}
