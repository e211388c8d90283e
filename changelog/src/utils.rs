use once_cell::sync::Lazy;
use regex::Regex;

/// Matches reference-style link definition lines, e.g. `[v0.1.0]: <url>`.
/// Anchored at line start; the bracketed label may not contain nested
/// brackets, and must be followed immediately by a colon.
pub static LINK_REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[[^\[\]]+\]:").expect("Failed to compile link reference regex")
});
