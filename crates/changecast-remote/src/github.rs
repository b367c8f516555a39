//! GitHub REST API client for pull request lookups

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use changecast_changelog::PullRequestLookup;
use changecast_core::config::DEFAULT_GITHUB_API_URL;
use changecast_core::types::{PullRequestChange, RepoSlug};

use crate::error::{RemoteError, Result};

const USER_AGENT: &str = concat!("changecast/", env!("CARGO_PKG_VERSION"));

/// GitHub API response for a pull request
#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    title: String,
    html_url: String,
    user: Option<UserPayload>,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    login: String,
}

/// GitHub API error response
#[derive(Debug, Deserialize)]
struct GitHubErrorPayload {
    message: String,
}

impl From<PullRequestPayload> for PullRequestChange {
    fn from(payload: PullRequestPayload) -> Self {
        Self {
            number: payload.number,
            title: payload.title,
            author: payload
                .user
                .map(|u| u.login)
                .unwrap_or_else(|| "ghost".to_string()),
            url: payload.html_url,
        }
    }
}

/// GitHub API client scoped to one repository
pub struct GitHubClient {
    client: Client,
    api_url: String,
    repo: RepoSlug,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl GitHubClient {
    /// Create a client for the public GitHub API
    pub fn new(repo: RepoSlug) -> Self {
        Self {
            client: Client::new(),
            api_url: DEFAULT_GITHUB_API_URL.to_string(),
            repo,
            token: None,
            timeout: None,
        }
    }

    /// Use a different API base URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Authenticate requests with a bearer token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Apply a per-request timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pull requests associated with a commit
    #[instrument(skip(self), fields(repo = %self.repo))]
    pub async fn pulls_for_commit(&self, sha: &str) -> Result<Vec<PullRequestChange>> {
        let url = format!(
            "{}/repos/{}/{}/commits/{}/pulls",
            self.api_url, self.repo.owner, self.repo.repo, sha
        );

        let mut request = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GitHubErrorPayload>(&body)
                .map(|e| e.message)
                .unwrap_or(body);

            return Err(match status {
                StatusCode::FORBIDDEN => RemoteError::RateLimited(message),
                StatusCode::NOT_FOUND => RemoteError::NotFound(format!("commit {}", sha)),
                _ => RemoteError::ApiError {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let body = response.text().await?;
        let pulls: Vec<PullRequestPayload> = serde_json::from_str(&body)?;
        debug!(sha, count = pulls.len(), "fetched pull requests for commit");

        Ok(pulls.into_iter().map(PullRequestChange::from).collect())
    }
}

#[async_trait]
impl PullRequestLookup for GitHubClient {
    type Error = RemoteError;

    async fn pull_request_for_commit(&self, sha: &str) -> Result<Option<PullRequestChange>> {
        Ok(self.pulls_for_commit(sha).await?.into_iter().next())
    }
}
