//! Release version resolution.
//!
//! Tools are declared either with an explicit version or with the
//! sentinel [`LATEST`]. Only the sentinel triggers a lookup; explicit
//! versions pass through untouched and are never parsed or compared.

pub mod github;

use std::cell::RefCell;

pub use github::{GithubReleases, GITHUB_URL};

use crate::error::Result;

/// Version sentinel meaning "newest published release".
pub const LATEST: &str = "latest";

/// Coordinates of a repository on the release index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRepo {
    pub owner: &'static str,
    pub name: &'static str,
}

impl GithubRepo {
    pub const fn new(owner: &'static str, name: &'static str) -> Self {
        Self { owner, name }
    }
}

impl std::fmt::Display for GithubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Maps a requested version to a concrete one.
pub trait VersionResolver {
    /// Tag of the newest release of `repo`, as published.
    fn latest(&self, repo: &GithubRepo) -> Result<String>;

    /// Resolve `requested` for `repo`.
    ///
    /// [`LATEST`] is looked up and has one leading `v` stripped; anything
    /// else is returned unchanged without touching the network.
    fn resolve(&self, requested: &str, repo: &GithubRepo) -> Result<String> {
        if requested != LATEST {
            return Ok(requested.to_string());
        }
        let tag = self.latest(repo)?;
        Ok(bare_version(&tag).to_string())
    }
}

/// Strip one leading `v` (`v1.12.1` -> `1.12.1`).
///
/// Download URLs embed bare version numbers.
pub fn bare_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Resolver answering every lookup with the same tag.
///
/// Records which repositories were looked up.
#[derive(Debug, Default)]
pub struct FixedResolver {
    tag: String,
    lookups: RefCell<Vec<String>>,
}

impl FixedResolver {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Repositories looked up so far, as `owner/name`.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl VersionResolver for FixedResolver {
    fn latest(&self, repo: &GithubRepo) -> Result<String> {
        self.lookups.borrow_mut().push(repo.to_string());
        Ok(self.tag.clone())
    }
}
