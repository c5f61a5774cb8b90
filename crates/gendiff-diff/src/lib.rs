//! Diff engine for gendiff.
//!
//! Compares two [`Document`]s key by key and produces one [`DiffEntry`] per
//! key in the union of both key sets, sorted by key. Only top-level keys are
//! compared; a nested mapping that differs anywhere is a single `Changed`
//! entry carrying both whole values.
//!
//! # Key Types
//!
//! - [`Diff`] -- Ordered entries plus summary counts
//! - [`DiffEntry`] / [`DiffStatus`] -- Outcome for a single key
//!
//! [`Document`]: gendiff_types::Document

pub mod document_diff;
pub mod entry;

pub use document_diff::{diff_documents, Diff};
pub use entry::{DiffEntry, DiffStatus};
