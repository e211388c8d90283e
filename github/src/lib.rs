mod client;
mod error;

pub use client::{CreatedRelease, GitHubClient, ReleaseParams};
pub use error::{GitHubError, Result};
