use std::fs;

use changelog::{ChangelogError, extract_entry_from_file};
use tempfile::TempDir;

const CHANGELOG: &str = "\
# Changelog

All notable changes to this project will be documented in this file.

## [Unreleased]

## [v0.2.0] - 2024-02-01

### Added

- Second release

## [v0.1.0] - 2024-01-01

### Added

- Initial release

[Unreleased]: https://example.com/compare/v0.2.0...HEAD
[v0.2.0]: https://example.com/releases/v0.2.0
[v0.1.0]: https://example.com/releases/v0.1.0
";

#[test]
fn extracts_entries_from_changelog_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("CHANGELOG.md");
    fs::write(&path, CHANGELOG).unwrap();

    let entry = extract_entry_from_file(&path, "v0.2.0").unwrap();
    assert_eq!(entry, "### Added\n\n- Second release");

    // Last section is terminated by the link-reference block
    let entry = extract_entry_from_file(&path, "0.1.0").unwrap();
    assert_eq!(entry, "### Added\n\n- Initial release");
}

#[test]
fn missing_file_error_names_the_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does-not-exist.md");

    let err = extract_entry_from_file(&path, "v0.1.0").unwrap_err();
    assert!(matches!(err, ChangelogError::WithContext(..)));
    assert!(err.user_message().contains("does-not-exist.md"));
}
