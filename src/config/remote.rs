//! Default configuration download.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context};

use crate::error::Result;
use crate::paths::ensure_dir;

/// Where the default configuration is published.
pub const DEFAULT_CONFIG_URL: &str =
    "https://raw.githubusercontent.com/kurekszymon/eddy.sh/refs/heads/main/config.yaml";

/// Downloads configuration files over HTTP.
pub struct RemoteFetcher {
    client: reqwest::blocking::Client,
}

impl RemoteFetcher {
    /// Create a fetcher with the specified timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("eddy")
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch `url` and return the body.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} fetching {}", response.status(), url).into());
        }

        let body = response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))?;
        Ok(body)
    }

    /// Fetch `url` and write it to `dest`, creating parent directories.
    pub fn download_to(&self, url: &str, dest: &Path) -> Result<()> {
        let body = self.fetch(url)?;
        if let Some(parent) = dest.parent() {
            ensure_dir(parent)?;
        }
        fs::write(dest, body)
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        tracing::info!("Downloaded config to {}", dest.display());
        Ok(())
    }
}
