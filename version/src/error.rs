use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("Invalid tag '{0}': expected semantic version format 'X.Y.Z' (leading 'v' is optional)")]
    InvalidTag(String),

    #[error("Expected git ref on the format 'refs/tags/<tag_name>', but got '{0}'")]
    InvalidRef(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<TagError>),
}

impl TagError {
    /// Add context to an error
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        TagError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TagError::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
            _ => format!("{self}"),
        }
    }
}

pub type Result<T> = result::Result<T, TagError>;
