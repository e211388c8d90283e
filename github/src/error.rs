use thiserror::Error;

/// Result type alias for GitHub API operations
pub type Result<T> = std::result::Result<T, GitHubError>;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Got unsuccessful response ({status}) from GitHub when trying to create release: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error(
        "GitHub create release request succeeded, but failed to get release URL from response body: {0}"
    )]
    InvalidResponse(#[source] reqwest::Error),
}
