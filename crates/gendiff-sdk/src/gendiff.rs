use std::path::Path;

use gendiff_diff::{diff_documents, Diff};
use gendiff_format::{Formatter, FormatterRegistry};
use gendiff_parse::parse_file;
use tracing::info;

use crate::config::GenDiffConfig;
use crate::error::GenDiffResult;

/// Compare two configuration files and render the differences with the style
/// called `format`.
///
/// Both files are parsed (the first failure is returned), diffed, and the
/// result rendered. Nothing is returned on failure.
pub fn gen_diff(
    path1: impl AsRef<Path>,
    path2: impl AsRef<Path>,
    format: &str,
) -> GenDiffResult<String> {
    GenDiff::with_config(GenDiffConfig::with_format(format)).run(path1, path2)
}

/// A configured comparison: output style plus the formatters it can use.
#[derive(Debug, Default)]
pub struct GenDiff {
    config: GenDiffConfig,
    formatters: FormatterRegistry,
}

impl GenDiff {
    /// Default configuration with the built-in formatters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GenDiffConfig) -> Self {
        Self {
            config,
            formatters: FormatterRegistry::with_default_formatters(),
        }
    }

    /// Select the output style by name.
    pub fn format(mut self, name: impl Into<String>) -> Self {
        self.config.format = name.into();
        self
    }

    /// Make an additional style available by its name.
    pub fn register_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.formatters.register(formatter);
    }

    pub fn config(&self) -> &GenDiffConfig {
        &self.config
    }

    pub fn formatters(&self) -> &FormatterRegistry {
        &self.formatters
    }

    /// Parse both files and diff them without rendering.
    pub fn compare(&self, path1: impl AsRef<Path>, path2: impl AsRef<Path>) -> GenDiffResult<Diff> {
        let old = parse_file(path1.as_ref())?;
        let new = parse_file(path2.as_ref())?;
        Ok(diff_documents(&old, &new))
    }

    /// Render a diff with the configured style.
    pub fn render(&self, diff: &Diff) -> GenDiffResult<String> {
        let formatter = self.formatters.resolve(&self.config.format)?;
        Ok(formatter.render(&diff.entries))
    }

    /// Parse, diff and render.
    pub fn run(&self, path1: impl AsRef<Path>, path2: impl AsRef<Path>) -> GenDiffResult<String> {
        let (path1, path2) = (path1.as_ref(), path2.as_ref());
        let diff = self.compare(path1, path2)?;
        let output = self.render(&diff)?;
        info!(
            old = %path1.display(),
            new = %path2.display(),
            format = %self.config.format,
            changes = diff.len() - diff.unchanged(),
            "diff rendered"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use gendiff_diff::{DiffEntry, DiffStatus};
    use tempfile::TempDir;

    use super::*;
    use crate::error::{ErrorKind, GenDiffError};

    fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn json_pair(old: &str, new: &str) -> (TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "a.json", old);
        let b = write_fixture(&dir, "b.json", new);
        (dir, a, b)
    }

    #[test]
    fn identical_files() {
        let (_dir, a, b) = json_pair(r#"{"key": "value"}"#, r#"{"key": "value"}"#);
        assert_eq!(gen_diff(&a, &b, "stylish").unwrap(), "{\n    key: value\n}");
    }

    #[test]
    fn added_key() {
        let (_dir, a, b) = json_pair("{}", r#"{"key": "value"}"#);
        assert_eq!(gen_diff(&a, &b, "stylish").unwrap(), "{\n  + key: value\n}");
    }

    #[test]
    fn removed_key() {
        let (_dir, a, b) = json_pair(r#"{"key": "value"}"#, "{}");
        assert_eq!(gen_diff(&a, &b, "stylish").unwrap(), "{\n  - key: value\n}");
    }

    #[test]
    fn changed_value() {
        let (_dir, a, b) = json_pair(r#"{"key": "old"}"#, r#"{"key": "new"}"#);
        assert_eq!(gen_diff(&a, &b, "stylish").unwrap(), "{\n  - key: old\n  + key: new\n}");
    }

    #[test]
    fn multiple_changes() {
        let (_dir, a, b) = json_pair(r#"{"a": 1, "b": 2, "c": 3}"#, r#"{"a": 1, "b": 20, "d": 4}"#);
        assert_eq!(
            gen_diff(&a, &b, "stylish").unwrap(),
            "{\n    a: 1\n  - b: 2\n  + b: 20\n  - c: 3\n  + d: 4\n}"
        );
    }

    #[test]
    fn yaml_complex_diff() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "a.yaml", "host: localhost\nport: 8080\nssl: false");
        let b = write_fixture(&dir, "b.yml", "host: localhost\nport: 443\nssl: true\ntimeout: 30");

        assert_eq!(
            gen_diff(&a, &b, "stylish").unwrap(),
            "{\n    host: localhost\n  - port: 8080\n  + port: 443\n  - ssl: false\n  + ssl: true\n  + timeout: 30\n}"
        );
    }

    #[test]
    fn mixed_json_and_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "a.json", r#"{"key": "value1"}"#);
        let b = write_fixture(&dir, "b.yaml", "key: value2");

        assert_eq!(gen_diff(&a, &b, "stylish").unwrap(), "{\n  - key: value1\n  + key: value2\n}");
    }

    #[test]
    fn cross_format_equal_content_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "a.json", r#"{"port": 42, "debug": true, "name": "svc"}"#);
        let b = write_fixture(&dir, "b.yaml", "name: svc\nport: 42\ndebug: true\n");

        let diff = GenDiff::new().compare(&a, &b).unwrap();
        assert_eq!(diff.len(), 3);
        assert!(diff.entries.iter().all(|e| e.status == DiffStatus::Unchanged));
    }

    #[test]
    fn first_file_missing_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let b = write_fixture(&dir, "b.json", "{}");

        let err = gen_diff(dir.path().join("nonexistent.json"), &b, "stylish").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn second_file_missing_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "a.json", "{}");

        let err = gen_diff(&a, dir.path().join("nonexistent.json"), "stylish").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn unsupported_output_format() {
        let (_dir, a, b) = json_pair("{}", "{}");

        let err = gen_diff(&a, &b, "plain").unwrap_err();
        assert!(matches!(err, GenDiffError::Format(_)));
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn unsupported_file_extension() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "file.txt", "some content");
        let b = write_fixture(&dir, "b.json", "{}");

        let err = gen_diff(&a, &b, "stylish").unwrap_err();
        assert!(matches!(err, GenDiffError::Parse(_)));
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn invalid_json_in_either_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_fixture(&dir, "bad.json", "invalid json");
        let good = write_fixture(&dir, "good.json", "{}");

        assert_eq!(gen_diff(&bad, &good, "stylish").unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(gen_diff(&good, &bad, "stylish").unwrap_err().kind(), ErrorKind::Parse);
    }

    #[test]
    fn parse_failure_wins_over_bad_format() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_fixture(&dir, "good.json", "{}");

        let err = gen_diff(dir.path().join("missing.json"), &good, "plain").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn self_diff_renders_every_key_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fixture(&dir, "a.yaml", "zeta: 1\nalpha: two\nmid: false\n");

        assert_eq!(
            gen_diff(&a, &a, "stylish").unwrap(),
            "{\n    alpha: two\n    mid: false\n    zeta: 1\n}"
        );
    }

    #[test]
    fn self_diff_with_nan_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let nan = write_fixture(&dir, "nan.yaml", "x: .nan\n");

        assert_eq!(gen_diff(&nan, &nan, "stylish").unwrap(), "{\n    x: NaN\n}");
    }

    struct Summary;

    impl Formatter for Summary {
        fn name(&self) -> &str {
            "summary"
        }

        fn render(&self, entries: &[DiffEntry]) -> String {
            format!("{} keys", entries.len())
        }
    }

    #[test]
    fn custom_formatter_is_selectable() {
        let (_dir, a, b) = json_pair(r#"{"a": 1}"#, r#"{"b": 2}"#);

        let mut gendiff = GenDiff::new().format("summary");
        gendiff.register_formatter(Box::new(Summary));

        assert_eq!(gendiff.run(&a, &b).unwrap(), "2 keys");
        assert_eq!(gendiff.config().format, "summary");
        assert!(gendiff.formatters().contains("summary"));
    }
}
