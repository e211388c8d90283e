use thiserror::Error;

/// Errors that can occur when extracting changelog entries
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error(
        "No changelog entry found for version '{version}' (looking for titles starting with '{title_with_prefix}' or '{title_without_prefix}')"
    )]
    EntryNotFound {
        version: String,
        title_with_prefix: String,
        title_without_prefix: String,
    },

    #[error("Changelog entry for version '{version}' was empty")]
    EmptyEntry { version: String },

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(err) => format!("File operation failed: {err}"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            _ => format!("{self}"),
        }
    }
}

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;
