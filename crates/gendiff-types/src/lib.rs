//! Foundation types for gendiff.
//!
//! Every other gendiff crate depends on `gendiff-types`. It defines the
//! in-memory shape of a parsed configuration file.
//!
//! # Key Types
//!
//! - [`Value`] -- Closed tagged variant over null, bool, number, string, sequence and mapping
//! - [`Document`] -- Top-level key/value mapping produced by the parser

pub mod value;

pub use value::{Document, Value};
