//! Output formatters for gendiff.
//!
//! A [`Formatter`] turns an ordered slice of [`DiffEntry`] values into the
//! text shown to the user. Formatters are looked up by name in a
//! [`FormatterRegistry`]; the default registry knows only `"stylish"`.
//!
//! # Key Types
//!
//! - [`Formatter`] -- Render capability implemented by every style
//! - [`FormatterRegistry`] -- Name-to-formatter lookup
//! - [`StylishFormatter`] -- `{ ... }` block with `+` / `-` markers
//!
//! [`DiffEntry`]: gendiff_diff::DiffEntry

pub mod error;
pub mod formatter;
pub mod registry;
pub mod styles;

pub use error::{FormatError, FormatResult};
pub use formatter::Formatter;
pub use registry::{format_diff, FormatterRegistry};
pub use styles::StylishFormatter;
