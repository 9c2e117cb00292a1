//! Latest-release lookup on GitHub.
//!
//! `GET https://github.com/<owner>/<repo>/releases/latest` answers with a
//! redirect to `/releases/tag/<tag>`. Reading the `Location` header
//! instead of following it avoids the API rate limit and any JSON parsing.

use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::StatusCode;

use crate::error::{EddyError, Result};

use super::{GithubRepo, VersionResolver};

/// Base URL of the public release index.
pub const GITHUB_URL: &str = "https://github.com";

/// Resolves "latest" from GitHub release redirects.
pub struct GithubReleases {
    client: Client,
    base_url: String,
}

impl GithubReleases {
    /// Resolver against github.com.
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_URL)
    }

    /// Resolver against another host (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("eddy")
            .redirect(Policy::none())
            .build()
            .map_err(|e| EddyError::Other(anyhow::anyhow!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn latest_url(&self, repo: &GithubRepo) -> String {
        format!(
            "{}/{}/{}/releases/latest",
            self.base_url.trim_end_matches('/'),
            repo.owner,
            repo.name
        )
    }
}

impl VersionResolver for GithubReleases {
    fn latest(&self, repo: &GithubRepo) -> Result<String> {
        let url = self.latest_url(repo);
        tracing::debug!("Resolving latest release via {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| resolution_error(repo, format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !matches!(
            status,
            StatusCode::FOUND | StatusCode::SEE_OTHER | StatusCode::TEMPORARY_REDIRECT
        ) {
            return Err(resolution_error(
                repo,
                format!("unexpected status code: {}", status.as_u16()),
            ));
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| resolution_error(repo, "no redirect location found".to_string()))?;

        let tag = location
            .trim_matches('/')
            .rsplit('/')
            .next()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                resolution_error(repo, format!("no tag in redirect location {}", location))
            })?;

        tracing::debug!("Latest release of {} is {}", repo, tag);
        Ok(tag.to_string())
    }
}

fn resolution_error(repo: &GithubRepo, message: String) -> EddyError {
    EddyError::VersionResolution {
        repo: repo.to_string(),
        message,
    }
}
