use std::fmt::{self, Display, Formatter};

use once_cell::sync::Lazy;
use regex::Regex;

mod error;
pub use error::{Result, TagError};

/// Strict `X.Y.Z` version: digits and dots only, no pre-release or build
/// suffixes. Anchored at both ends so the full string must match.
static SEMVER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("Failed to compile semver regex"));

/// A release tag name, e.g. `v1.2.3` or `1.2.3`.
///
/// The leading 'v' is optional and preserved as given; [`Tag::bare`] exposes
/// the version without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    raw: String,
}

impl Tag {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Builds a tag from a fully-qualified git ref like `refs/tags/v1.2.3`.
    ///
    /// # Errors
    /// Returns error if the ref is not on the `refs/tags/<tag_name>` format.
    pub fn from_git_ref(git_ref: &str) -> Result<Self> {
        match git_ref.strip_prefix("refs/tags/") {
            Some(tag_name) if !tag_name.is_empty() => Ok(Self::new(tag_name)),
            _ => Err(TagError::InvalidRef(git_ref.to_string())),
        }
    }

    /// Checks that the tag is a well-formed semantic version.
    ///
    /// # Errors
    /// Returns error unless the tag, with any leading 'v' removed, is on the
    /// `X.Y.Z` format.
    pub fn validate(&self) -> Result<()> {
        if SEMVER_PATTERN.is_match(self.bare()) {
            Ok(())
        } else {
            Err(TagError::InvalidTag(self.raw.clone()))
        }
    }

    /// The version without its leading 'v', if any.
    #[must_use]
    pub fn bare(&self) -> &str {
        self.raw.strip_prefix('v').unwrap_or(&self.raw)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tags_pass_validation() {
        assert!(Tag::new("1.2.3").validate().is_ok());
        assert!(Tag::new("v1.2.3").validate().is_ok());
        assert!(Tag::new("v10.20.30").validate().is_ok());
    }

    #[test]
    fn invalid_tags_fail_validation() {
        for tag in ["1.2", "v1.2.3.4", "1.2.3-alpha", "v1.2.x", "version-one", ""] {
            assert!(Tag::new(tag).validate().is_err(), "expected '{tag}' to be rejected");
        }
    }

    #[test]
    fn bare_strips_leading_v() {
        assert_eq!(Tag::new("v1.2.3").bare(), "1.2.3");
        assert_eq!(Tag::new("1.2.3").bare(), "1.2.3");
    }

    #[test]
    fn tag_from_git_ref() {
        let tag = Tag::from_git_ref("refs/tags/v0.3.0").unwrap();
        assert_eq!(tag.as_str(), "v0.3.0");
    }

    #[test]
    fn non_tag_refs_are_rejected() {
        assert!(Tag::from_git_ref("refs/heads/main").is_err());
        assert!(Tag::from_git_ref("refs/tags/").is_err());
        assert!(Tag::from_git_ref("v0.3.0").is_err());
    }
}
