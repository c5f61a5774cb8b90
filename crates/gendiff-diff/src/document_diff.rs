//! Document-level diff: compare two configuration documents key by key.
//!
//! Documents are `BTreeMap<String, Value>`. Every key of either side yields
//! exactly one entry, in ascending byte-wise key order.

use std::collections::BTreeSet;

use gendiff_types::Document;
use tracing::debug;

use crate::entry::{DiffEntry, DiffStatus};

/// The result of comparing two documents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diff {
    /// One entry per key of the union, sorted by key.
    pub entries: Vec<DiffEntry>,
}

impl Diff {
    /// Returns `true` if neither document had any keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries (the size of the key union).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if any key was added, removed or changed.
    pub fn has_changes(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.status != DiffStatus::Unchanged)
    }

    /// Number of added keys.
    pub fn additions(&self) -> usize {
        self.count(DiffStatus::Added)
    }

    /// Number of removed keys.
    pub fn removals(&self) -> usize {
        self.count(DiffStatus::Removed)
    }

    /// Number of changed keys.
    pub fn modifications(&self) -> usize {
        self.count(DiffStatus::Changed)
    }

    /// Number of unchanged keys.
    pub fn unchanged(&self) -> usize {
        self.count(DiffStatus::Unchanged)
    }

    /// Iterate over the keys in entry order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    fn count(&self, status: DiffStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}

impl<'a> IntoIterator for &'a Diff {
    type Item = &'a DiffEntry;
    type IntoIter = std::slice::Iter<'a, DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Compute the diff between two documents.
///
/// Keys present only in `new` are `Added`, keys present only in `old` are
/// `Removed`, keys in both with deep-equal values are `Unchanged`, and the
/// rest are `Changed`. Neither input is modified.
pub fn diff_documents(old: &Document, new: &Document) -> Diff {
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();

    let entries: Vec<DiffEntry> = keys
        .into_iter()
        .filter_map(|key| match (old.get(key), new.get(key)) {
            (None, Some(new_val)) => Some(DiffEntry::added(key.clone(), new_val.clone())),
            (Some(old_val), None) => Some(DiffEntry::removed(key.clone(), old_val.clone())),
            (Some(old_val), Some(new_val)) if old_val == new_val => {
                Some(DiffEntry::unchanged(key.clone(), old_val.clone()))
            }
            (Some(old_val), Some(new_val)) => Some(DiffEntry::changed(
                key.clone(),
                old_val.clone(),
                new_val.clone(),
            )),
            (None, None) => None,
        })
        .collect();

    let diff = Diff { entries };
    debug!(
        keys = diff.len(),
        added = diff.additions(),
        removed = diff.removals(),
        changed = diff.modifications(),
        "documents compared"
    );
    diff
}
