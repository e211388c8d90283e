use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{GitHubError, Result};

/// Parameters for a create-release call.
#[derive(Debug, Clone)]
pub struct ReleaseParams<'a> {
    /// Existing git tag to create the release for
    pub tag_name: &'a str,
    /// Display title of the release
    pub title: &'a str,
    /// Release description, typically the changelog entry for the tag
    pub body: &'a str,
    pub repo_owner: &'a str,
    pub repo_name: &'a str,
    pub auth_token: &'a str,
}

/// A successfully created release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRelease {
    pub name: String,
    pub url: String,
}

/// Client for the GitHub releases API.
pub struct GitHubClient {
    client: Client,
    api_url: String,
}

impl GitHubClient {
    /// Creates a client against the given API base URL, usually
    /// `https://api.github.com`.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client fails to initialize.
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Creates a release for an existing tag. No retries: a failed request
    /// is surfaced directly, together with GitHub's response body.
    ///
    /// # Errors
    /// Returns error if the request fails, if GitHub responds with a non-2xx
    /// status, or if the response body has no release URL.
    pub async fn create_release(&self, params: ReleaseParams<'_>) -> Result<CreatedRelease> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.api_url, params.repo_owner, params.repo_name
        );

        let request_body = CreateReleaseRequest {
            tag_name: params.tag_name,
            name: params.title,
            body: params.body,
        };

        let response = self
            .client
            .post(url)
            .json(&request_body)
            .header("Authorization", format!("Bearer {}", params.auth_token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            // GitHub requires a User-Agent header, and recommends setting it
            // to your GitHub username:
            // https://docs.github.com/en/rest/using-the-rest-api/getting-started-with-the-rest-api#user-agent
            // In this case, that will be the repo owner.
            .header("User-Agent", params.repo_owner)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::UnexpectedStatus { status, body });
        }

        let response_body: CreateReleaseResponse =
            response.json().await.map_err(GitHubError::InvalidResponse)?;

        Ok(CreatedRelease {
            name: params.title.to_string(),
            url: response_body.html_url,
        })
    }
}

#[derive(Serialize)]
struct CreateReleaseRequest<'a> {
    tag_name: &'a str,
    name: &'a str,
    body: &'a str,
}

#[derive(Deserialize)]
struct CreateReleaseResponse {
    html_url: String,
}
