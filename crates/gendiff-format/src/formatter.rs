use gendiff_diff::DiffEntry;

/// A rendering style for diff entries.
///
/// Entries are rendered in the order given; callers pass the key-sorted
/// sequence produced by the diff engine. The trait is object-safe and
/// `Send + Sync` so styles can be stored as `Box<dyn Formatter>`.
pub trait Formatter: Send + Sync {
    /// Name the style is registered under (e.g., "stylish").
    fn name(&self) -> &str;

    /// Render the entries as display text.
    fn render(&self, entries: &[DiffEntry]) -> String;
}
