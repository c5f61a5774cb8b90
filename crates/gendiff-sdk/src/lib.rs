//! High-level API for gendiff.
//!
//! Ties the parser, diff engine and formatters together behind a single
//! call. This is the main entry point for applications embedding gendiff.

pub mod config;
pub mod error;
pub mod gendiff;

pub use config::{GenDiffConfig, DEFAULT_FORMAT};
pub use error::{ErrorKind, GenDiffError, GenDiffResult};
pub use gendiff::{gen_diff, GenDiff};

// Re-export key types
pub use gendiff_diff::{Diff, DiffEntry, DiffStatus};
pub use gendiff_format::{Formatter, FormatterRegistry};
pub use gendiff_parse::DocumentFormat;
pub use gendiff_types::{Document, Value};
