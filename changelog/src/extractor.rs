use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ChangelogError, Result};
use crate::titles::TargetTitles;
use crate::utils::LINK_REFERENCE_PATTERN;

/// Scanner state for the single forward pass over the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Still looking for the target version's heading.
    Seeking,
    /// Inside the target section, accumulating body lines.
    Collecting,
}

/// Extracts the changelog entry for `version` from a line-readable document.
///
/// The document is scanned front to back exactly once. Once a heading
/// matching the version is found, lines are collected verbatim until the next
/// structural boundary: a higher-level heading, the next version's heading,
/// or the link-reference block at the end of the file. Running out of lines
/// is a normal entry end, so a section at the end of the document extracts
/// fine.
///
/// # Errors
/// Returns `EntryNotFound` if no heading matches the version, and
/// `EmptyEntry` if the matched section contains no lines after trimming
/// trailing blanks.
pub fn extract_entry<R: BufRead>(document: R, version: &str) -> Result<String> {
    let titles = TargetTitles::for_version(version);

    let mut entry_lines: Vec<String> = Vec::new();
    let mut state = ScanState::Seeking;

    let mut lines = document.lines();
    while let Some(line) = lines.next() {
        let line = line?;

        match state {
            ScanState::Seeking => {
                if titles.matches(&line) {
                    state = ScanState::Collecting;

                    // The line right after the heading is usually a blank
                    // separator; skip it so the entry doesn't start with a
                    // blank line. Blank lines further in are kept.
                    if let Some(next_line) = lines.next() {
                        let next_line = next_line?;
                        if !next_line.trim().is_empty() {
                            entry_lines.push(next_line);
                        }
                    }
                }
            }
            ScanState::Collecting => {
                if entry_ended(&line) {
                    break;
                }
                entry_lines.push(line);
            }
        }
    }

    if state == ScanState::Seeking {
        return Err(ChangelogError::EntryNotFound {
            version: version.to_string(),
            title_with_prefix: titles.with_prefix().to_string(),
            title_without_prefix: titles.without_prefix().to_string(),
        });
    }

    // Remove trailing blank lines from the entry
    while entry_lines.last().is_some_and(|line| line.trim().is_empty()) {
        entry_lines.pop();
    }

    if entry_lines.is_empty() {
        return Err(ChangelogError::EmptyEntry {
            version: version.to_string(),
        });
    }

    Ok(entry_lines.join("\n"))
}

/// Opens the changelog file at `path` and extracts the entry for `version`.
///
/// # Errors
/// Returns error if the file cannot be opened or read, in addition to the
/// failure modes of [`extract_entry`].
pub fn extract_entry_from_file(path: &Path, version: &str) -> Result<String> {
    let file = File::open(path).map_err(|err| {
        ChangelogError::ReadError(err)
            .with_context(format!("Failed to open changelog file '{}'", path.display()))
    })?;

    extract_entry(BufReader::new(file), version)
}

/// A changelog entry has ended if we find:
/// - a higher-level title (`# `),
/// - a new changelog entry at the same title level (`## `),
/// - the start of the link-reference section at the end of the changelog,
///   e.g. `[v0.1.0]: <link>`.
fn entry_ended(line: &str) -> bool {
    line.starts_with("# ") || line.starts_with("## ") || LINK_REFERENCE_PATTERN.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CHANGELOG: &str = "\
# Changelog

## [Unreleased]

## [v0.3.0] - 2024-03-01

- Test

## [v0.2.0] - 2024-02-01

- Version without leading 'v'

## [0.1.0] - 2024-01-01

- Changelog entry at end of file
";

    fn extract(document: &str, version: &str) -> Result<String> {
        extract_entry(Cursor::new(document), version)
    }

    #[test]
    fn extracts_entry_for_version() {
        let entry = extract(CHANGELOG, "v0.3.0").unwrap();
        assert_eq!(entry, "- Test");
    }

    #[test]
    fn version_without_leading_v_matches_heading_with_v() {
        let entry = extract(CHANGELOG, "0.2.0").unwrap();
        assert_eq!(entry, "- Version without leading 'v'");
    }

    #[test]
    fn version_with_leading_v_matches_heading_without_v() {
        let entry = extract(CHANGELOG, "v0.1.0").unwrap();
        assert_eq!(entry, "- Changelog entry at end of file");
    }

    #[test]
    fn entry_at_end_of_document_extracts_normally() {
        // No trailing heading or link block after the last section
        let entry = extract(CHANGELOG, "0.1.0").unwrap();
        assert_eq!(entry, "- Changelog entry at end of file");
    }

    #[test]
    fn missing_version_reports_both_candidate_titles() {
        let err = extract(CHANGELOG, "9.9.9").unwrap_err();

        match &err {
            ChangelogError::EntryNotFound {
                version,
                title_with_prefix,
                title_without_prefix,
            } => {
                assert_eq!(version, "9.9.9");
                assert_eq!(title_with_prefix, "## [v9.9.9]");
                assert_eq!(title_without_prefix, "## [9.9.9]");
            }
            other => panic!("Expected EntryNotFound, got {other:?}"),
        }
    }

    #[test]
    fn section_with_no_content_is_empty() {
        let document = "\
## [v0.2.0] - 2024-02-01

## [v0.1.0] - 2024-01-01

- Something
";
        let err = extract(document, "v0.2.0").unwrap_err();
        assert!(matches!(err, ChangelogError::EmptyEntry { version } if version == "v0.2.0"));
    }

    #[test]
    fn link_reference_line_terminates_entry() {
        let document = "\
## [v0.1.0] - 2024-01-01

- Initial release

[v0.1.0]: https://example.com/releases/v0.1.0
";
        let entry = extract(document, "v0.1.0").unwrap();
        assert_eq!(entry, "- Initial release");
    }

    #[test]
    fn higher_level_heading_terminates_entry() {
        let document = "\
## [v0.1.0]

- Initial release

# Appendix
";
        let entry = extract(document, "v0.1.0").unwrap();
        assert_eq!(entry, "- Initial release");
    }

    #[test]
    fn blank_lines_inside_entry_are_preserved() {
        let document = "\
## [v0.2.0]

### Added

- A thing

### Fixed

- Another thing

## [v0.1.0]
";
        let entry = extract(document, "v0.2.0").unwrap();
        assert_eq!(
            entry,
            "### Added\n\n- A thing\n\n### Fixed\n\n- Another thing"
        );
    }

    #[test]
    fn trailing_blank_lines_are_stripped() {
        let document = "## [v0.1.0]\n\n- Last change\n\n\n";
        let entry = extract(document, "v0.1.0").unwrap();
        assert_eq!(entry, "- Last change");
    }

    #[test]
    fn document_ending_right_after_heading_is_empty() {
        let err = extract("## [v0.1.0] - 2024-01-01\n", "v0.1.0").unwrap_err();
        assert!(matches!(err, ChangelogError::EmptyEntry { .. }));
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = extract(CHANGELOG, "v0.2.0").unwrap();
        let second = extract(CHANGELOG, "v0.2.0").unwrap();
        assert_eq!(first, second);
    }
}
