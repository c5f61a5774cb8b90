use gendiff_diff::{DiffEntry, DiffStatus};
use gendiff_types::Value;

use crate::formatter::Formatter;

/// Renders a diff as a brace-delimited block, one line per key:
///
/// ```text
/// {
///     host: localhost
///   - port: 8080
///   + port: 443
///   + timeout: 30
/// }
/// ```
///
/// Unchanged keys get four spaces of indent, added keys `  + `, removed keys
/// `  - `. A changed key is a removed line followed by an added line. There
/// is no newline after the closing brace.
#[derive(Clone, Copy, Debug, Default)]
pub struct StylishFormatter;

impl StylishFormatter {
    pub const NAME: &'static str = "stylish";
}

impl Formatter for StylishFormatter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self, entries: &[DiffEntry]) -> String {
        let mut out = String::from("{\n");
        for entry in entries {
            let old = entry.old_value.as_ref();
            let new = entry.new_value.as_ref();
            match entry.status {
                DiffStatus::Unchanged => push_line(&mut out, ' ', &entry.key, old),
                DiffStatus::Added => push_line(&mut out, '+', &entry.key, new),
                DiffStatus::Removed => push_line(&mut out, '-', &entry.key, old),
                DiffStatus::Changed => {
                    push_line(&mut out, '-', &entry.key, old);
                    push_line(&mut out, '+', &entry.key, new);
                }
            }
        }
        out.push('}');
        out
    }
}

fn push_line(out: &mut String, marker: char, key: &str, value: Option<&Value>) {
    let value = value.unwrap_or(&Value::Null);
    out.push_str(&format!("  {marker} {key}: {value}\n"));
}
