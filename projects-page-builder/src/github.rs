//! GitHub repository metadata fetching.
//!
//! This module issues one request per configured repository against the
//! public GitHub REST API and deserializes the subset of metadata that
//! appears on the generated page.

use crate::config::ProjectConfig;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Base URL of the GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Client identification sent with every request.
pub const USER_AGENT: &str = "projects-page-builder";

/// Content negotiation header for the v3 REST API.
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Errors that can occur while fetching repository metadata.
///
/// All variants are per-repository: the failed entry is dropped from the
/// generated page and the run continues.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The repository does not exist or is not visible (HTTP 404).
    #[error("Repository {owner}/{repo} not found")]
    NotFound { owner: String, repo: String },

    /// The API answered with an unexpected status code.
    #[error("GitHub API error: {status} - {body}")]
    Status { status: StatusCode, body: String },

    /// Transport-level failure (connection, TLS, body decoding).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Repository metadata as returned by the GitHub API.
///
/// Field names follow the wire format; unknown fields in the response
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryMetadata {
    /// Repository name.
    pub name: String,

    /// Canonical URL of the repository on github.com.
    pub html_url: Url,

    /// Short description, if the repository has one.
    pub description: Option<String>,

    /// Primary language, if GitHub detected one.
    pub language: Option<String>,

    /// Star count.
    #[serde(default)]
    pub stargazers_count: u64,

    /// Fork count.
    #[serde(default)]
    pub forks_count: u64,

    /// Time of the last update to the repository.
    pub updated_at: DateTime<Utc>,
}

/// Fetches metadata for a single repository.
///
/// Issues a `GET /repos/{owner}/{repo}` request with fixed identification
/// and content negotiation headers. When `token` is present it is sent as
/// a bearer credential, which raises the API rate limit and grants access
/// to private repositories. There is no retry and no caching.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `token` - Optional GitHub token
/// * `project` - Repository to fetch
///
/// # Errors
///
/// Returns [`FetchError::NotFound`] for HTTP 404, [`FetchError::Status`]
/// with the status code and raw body for any other non-200 answer, and
/// [`FetchError::Transport`] for connection or decoding failures.
pub async fn fetch_repository(
    client: &Client,
    token: Option<&str>,
    project: &ProjectConfig,
) -> Result<RepositoryMetadata, FetchError> {
    let url = format!(
        "{}/repos/{}/{}",
        GITHUB_API_BASE, project.owner, project.repo
    );
    debug!(url = %url, "Requesting repository metadata");

    let mut request = client
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", ACCEPT);

    if let Some(token) = token {
        request = request.header("Authorization", format!("Bearer {token}"));
    }

    let response = request.send().await?;

    match response.status() {
        StatusCode::OK => Ok(response.json::<RepositoryMetadata>().await?),
        StatusCode::NOT_FOUND => Err(FetchError::NotFound {
            owner: project.owner.clone(),
            repo: project.repo.clone(),
        }),
        status => {
            let body = response.text().await.unwrap_or_default();
            Err(FetchError::Status { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_deserialize_repository_metadata() {
        let body = r#"{
            "id": 20929025,
            "name": "tokio",
            "full_name": "tokio-rs/tokio",
            "html_url": "https://github.com/tokio-rs/tokio",
            "description": "A runtime for writing reliable asynchronous applications with Rust.",
            "language": "Rust",
            "stargazers_count": 24672,
            "forks_count": 2289,
            "updated_at": "2024-06-01T08:13:21Z"
        }"#;

        let repo: RepositoryMetadata = serde_json::from_str(body).unwrap();

        assert_eq!(repo.name, "tokio");
        assert_eq!(repo.html_url.as_str(), "https://github.com/tokio-rs/tokio");
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert_eq!(repo.stargazers_count, 24672);
        assert_eq!(repo.forks_count, 2289);
        assert_eq!(repo.updated_at.to_rfc3339(), "2024-06-01T08:13:21+00:00");
    }

    #[test]
    fn deserialize_with_null_optional_fields() {
        let body = r#"{
            "name": "scratch",
            "html_url": "https://github.com/someone/scratch",
            "description": null,
            "language": null,
            "updated_at": "2023-11-11T00:00:00Z"
        }"#;

        let repo: RepositoryMetadata = serde_json::from_str(body).unwrap();

        assert!(repo.description.is_none());
        assert!(repo.language.is_none());
        assert_eq!(repo.stargazers_count, 0);
        assert_eq!(repo.forks_count, 0);
    }

    #[test]
    fn not_found_error_names_repository() {
        let err = FetchError::NotFound {
            owner: "someone".to_string(),
            repo: "missing".to_string(),
        };

        assert_eq!(err.to_string(), "Repository someone/missing not found");
    }

    #[test]
    fn status_error_includes_code_and_body() {
        let err = FetchError::Status {
            status: StatusCode::FORBIDDEN,
            body: r#"{"message":"API rate limit exceeded"}"#.to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("403"));
        assert!(message.contains("API rate limit exceeded"));
    }
}
