//! Document parser for gendiff.
//!
//! Reads a configuration file and decodes it into a [`Document`], choosing
//! the decoder from the file extension: `.json` for JSON, `.yaml` / `.yml`
//! for YAML. The top level of every file must be a mapping.
//!
//! # Key Types
//!
//! - [`DocumentFormat`] -- Source encoding resolved from a path
//! - [`ParseError`] / [`DecodeError`] -- Read, decode and dispatch failures
//!
//! [`Document`]: gendiff_types::Document

pub mod error;
pub mod format;
mod json;
pub mod parser;
mod yaml;

pub use error::{DecodeError, ParseError, ParseResult};
pub use format::DocumentFormat;
pub use parser::{parse_file, parse_str};
