use colored::Colorize;
use gendiff_sdk::GenDiff;

use crate::cli::{Cli, Invocation};

/// Execute the invocation and return the text to print.
pub fn run_command(cli: &Cli, invocation: Invocation) -> anyhow::Result<String> {
    match invocation {
        Invocation::Usage => Ok(Cli::usage()),
        Invocation::Compare { old, new } => {
            tracing::debug!(old = %old.display(), new = %new.display(), format = %cli.format, "comparing");
            let output = GenDiff::new()
                .format(cli.format.as_str())
                .run(&old, &new)
                .inspect_err(|e| tracing::debug!(kind = %e.kind(), "comparison failed"))?;
            Ok(if cli.color { colorize(&output) } else { output })
        }
    }
}

/// Color stylish output: `+` lines green, `-` lines red.
fn colorize(output: &str) -> String {
    output
        .lines()
        .map(|line| {
            if line.starts_with("  + ") {
                line.green().to_string()
            } else if line.starts_with("  - ") {
                line.red().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
