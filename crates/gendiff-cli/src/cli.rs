use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use gendiff_sdk::DEFAULT_FORMAT;

#[derive(Parser, Debug)]
#[command(
    name = "gendiff",
    about = "Compares two configuration files and shows a difference.",
    version
)]
pub struct Cli {
    /// The two files to compare (JSON or YAML)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Color added lines green and removed lines red
    #[arg(long)]
    pub color: bool,
}

/// What the parsed arguments ask for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// No files given: show usage.
    Usage,
    /// Compare `old` against `new`.
    Compare { old: PathBuf, new: PathBuf },
}

impl Cli {
    /// Validate the positional argument count.
    pub fn invocation(&self) -> Result<Invocation, clap::Error> {
        match self.files.as_slice() {
            [] => Ok(Invocation::Usage),
            [old, new] => Ok(Invocation::Compare {
                old: old.clone(),
                new: new.clone(),
            }),
            other => Err(Self::command().error(
                ErrorKind::WrongNumberOfValues,
                format!("expected 2 arguments, got {}", other.len()),
            )),
        }
    }

    /// Rendered help text.
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}
