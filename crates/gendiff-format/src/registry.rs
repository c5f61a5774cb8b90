use std::collections::BTreeMap;
use std::fmt;

use gendiff_diff::DiffEntry;
use tracing::debug;

use crate::error::{FormatError, FormatResult};
use crate::formatter::Formatter;
use crate::styles::StylishFormatter;

/// Lookup table from format name to formatter.
///
/// Starts empty with [`Self::new`]; [`Self::with_default_formatters`] (also
/// the `Default` impl) registers the built-in styles. Adding a style is a
/// [`Self::register`] call and never changes how names are resolved.
pub struct FormatterRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Create a registry with no formatters.
    pub fn new() -> Self {
        Self {
            formatters: BTreeMap::new(),
        }
    }

    /// Create a registry holding the built-in styles: `stylish`.
    pub fn with_default_formatters() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(StylishFormatter));
        registry
    }

    /// Register a formatter under its own name, returning any formatter it
    /// replaced.
    pub fn register(&mut self, formatter: Box<dyn Formatter>) -> Option<Box<dyn Formatter>> {
        let name = formatter.name().to_owned();
        self.formatters.insert(name, formatter)
    }

    /// Look up a formatter by name.
    pub fn resolve(&self, name: &str) -> FormatResult<&dyn Formatter> {
        match self.formatters.get(name) {
            Some(formatter) => {
                debug!(format = name, "formatter resolved");
                Ok(formatter.as_ref())
            }
            None => Err(FormatError::UnsupportedFormat {
                name: name.to_owned(),
                available: self.names().map(str::to_owned).collect(),
            }),
        }
    }

    /// Returns `true` if a formatter is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formatters.keys().map(String::as_str)
    }

    /// Number of registered formatters.
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    /// Resolve `name` and render `entries` with it.
    pub fn render(&self, name: &str, entries: &[DiffEntry]) -> FormatResult<String> {
        Ok(self.resolve(name)?.render(entries))
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_default_formatters()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

/// Render `entries` with the built-in style called `name`.
pub fn format_diff(name: &str, entries: &[DiffEntry]) -> FormatResult<String> {
    FormatterRegistry::with_default_formatters().render(name, entries)
}

#[cfg(test)]
mod tests {
    use gendiff_types::Value;

    use super::*;

    struct KeysOnly;

    impl Formatter for KeysOnly {
        fn name(&self) -> &str {
            "keys"
        }

        fn render(&self, entries: &[DiffEntry]) -> String {
            entries
                .iter()
                .map(|e| e.key.as_str())
                .collect::<Vec<_>>()
                .join(",")
        }
    }

    #[test]
    fn default_registry_has_only_stylish() {
        let registry = FormatterRegistry::default();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["stylish"]);
        assert!(registry.contains("stylish"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = FormatterRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("stylish").is_err());
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let registry = FormatterRegistry::default();
        let err = registry.resolve("plain").err().unwrap();
        assert_eq!(
            err,
            FormatError::UnsupportedFormat {
                name: "plain".into(),
                available: vec!["stylish".into()],
            }
        );
        assert_eq!(err.to_string(), "unsupported format: plain (available: stylish)");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(FormatterRegistry::default().resolve("Stylish").is_err());
    }

    #[test]
    fn registering_a_style_extends_lookup() {
        let mut registry = FormatterRegistry::default();
        assert!(registry.register(Box::new(KeysOnly)).is_none());

        let entries = vec![
            DiffEntry::added("a", Value::from(1i64)),
            DiffEntry::removed("b", Value::from(2i64)),
        ];
        assert_eq!(registry.render("keys", &entries).unwrap(), "a,b");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["keys", "stylish"]);
    }

    #[test]
    fn registering_same_name_replaces() {
        let mut registry = FormatterRegistry::default();
        let previous = registry.register(Box::new(StylishFormatter));
        assert_eq!(previous.map(|f| f.name().to_owned()), Some("stylish".to_owned()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn format_diff_uses_builtin_styles() {
        let entries = vec![DiffEntry::unchanged("key", Value::from("value"))];
        assert_eq!(format_diff("stylish", &entries).unwrap(), "{\n    key: value\n}");
        assert!(matches!(
            format_diff("plain", &entries),
            Err(FormatError::UnsupportedFormat { .. })
        ));
    }
}
