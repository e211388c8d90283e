/// The pair of heading prefixes that identify a version's section in a
/// changelog.
///
/// Version tags are equivalent with or without a leading 'v': a lookup for
/// "v1.2.0" must match a heading written as `## [1.2.0]`, and a lookup for
/// "1.2.0" must match `## [v1.2.0]`. Both forms are derived once, up front,
/// instead of re-prefixing strings at every comparison site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTitles {
    with_prefix: String,
    without_prefix: String,
}

impl TargetTitles {
    /// Derives both heading prefixes for a version, 'v'-prefixed form first.
    #[must_use]
    pub fn for_version(version: &str) -> Self {
        let bare = version.strip_prefix('v').unwrap_or(version);

        Self {
            with_prefix: format!("## [v{bare}]"),
            without_prefix: format!("## [{bare}]"),
        }
    }

    /// Tests whether a document line starts the target version's section.
    ///
    /// Prefix matching rather than equality: version headings usually carry
    /// a date or other trailing text after the bracketed version.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        line.starts_with(&self.with_prefix) || line.starts_with(&self.without_prefix)
    }

    #[must_use]
    pub fn with_prefix(&self) -> &str {
        &self.with_prefix
    }

    #[must_use]
    pub fn without_prefix(&self) -> &str {
        &self.without_prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_both_title_forms() {
        let titles = TargetTitles::for_version("1.2.3");
        assert_eq!(titles.with_prefix(), "## [v1.2.3]");
        assert_eq!(titles.without_prefix(), "## [1.2.3]");
    }

    #[test]
    fn invariant_under_leading_v() {
        assert_eq!(
            TargetTitles::for_version("0.5.0"),
            TargetTitles::for_version("v0.5.0")
        );
    }

    #[test]
    fn matches_headings_with_trailing_text() {
        let titles = TargetTitles::for_version("v0.2.0");
        assert!(titles.matches("## [v0.2.0] - 2024-01-15"));
        assert!(titles.matches("## [0.2.0] - 2024-01-15"));
        assert!(!titles.matches("## [v0.2.1] - 2024-01-20"));
        assert!(!titles.matches("### [v0.2.0]"));
    }
}
