//! Per-user working directory and path helpers.
//!
//! Everything eddy downloads lands under a single directory, `~/.eddy.sh`
//! by default: release archives, extracted tool trees, and a `bin/`
//! directory of symlinks that users add to their `PATH`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EddyError, Result};

/// Directory name under the user's home.
pub const EDDY_DIR_NAME: &str = ".eddy.sh";

/// Default configuration file name inside the working directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// The eddy working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EddyHome {
    root: PathBuf,
}

impl EddyHome {
    /// Use an explicit root (tests, `--home`).
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `~/.eddy.sh` for the current user.
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            EddyError::Other(anyhow::anyhow!("failed to get user home directory"))
        })?;
        Ok(Self::at(home.join(EDDY_DIR_NAME)))
    }

    /// Root of the working directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding symlinks to installed executables.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// Default config file location.
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Create the root and `bin/` directories if missing.
    pub fn ensure(&self) -> Result<()> {
        ensure_dir(&self.root)?;
        ensure_dir(&self.bin_dir())
    }
}

/// Create `path` and its parents if absent.
///
/// Succeeds when the directory already exists; never removes or rewrites
/// anything already there.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| {
        EddyError::Other(anyhow::anyhow!(
            "failed to create directory {}: {}",
            path.display(),
            e
        ))
    })
}

/// Expand a leading `~` and make the path absolute.
///
/// Falls back to the input unchanged when the home directory or the
/// current directory cannot be determined.
pub fn expand_path(path: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
    if expanded.is_absolute() {
        return expanded;
    }
    std::path::absolute(&expanded).unwrap_or(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b");

        ensure_dir(&dir).unwrap();
        fs::write(dir.join("keep.txt"), "original").unwrap();
        ensure_dir(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(fs::read_to_string(dir.join("keep.txt")).unwrap(), "original");
    }

    #[test]
    fn ensure_dir_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, "x").unwrap();

        assert!(ensure_dir(&file).is_err());
        assert_eq!(fs::read_to_string(&file).unwrap(), "x");
    }

    #[test]
    fn home_layout() {
        let home = EddyHome::at("/tmp/eddy-test");
        assert_eq!(home.bin_dir(), PathBuf::from("/tmp/eddy-test/bin"));
        assert_eq!(
            home.config_file(),
            PathBuf::from("/tmp/eddy-test/config.yaml")
        );
    }

    #[test]
    fn ensure_creates_bin() {
        let temp = TempDir::new().unwrap();
        let home = EddyHome::at(temp.path().join(EDDY_DIR_NAME));
        home.ensure().unwrap();
        assert!(home.bin_dir().is_dir());
    }

    #[test]
    fn resolve_points_into_user_home() {
        if let Some(user_home) = dirs::home_dir() {
            let home = EddyHome::resolve().unwrap();
            assert_eq!(home.root(), user_home.join(EDDY_DIR_NAME));
        }
    }

    #[test]
    fn expand_path_expands_tilde() {
        if let Some(user_home) = dirs::home_dir() {
            assert_eq!(expand_path("~/projects"), user_home.join("projects"));
        }
    }

    #[test]
    fn expand_path_keeps_absolute_paths() {
        let temp = TempDir::new().unwrap();
        let p = temp.path().to_string_lossy().to_string();
        assert_eq!(expand_path(&p), temp.path());
    }

    #[test]
    fn expand_path_makes_relative_absolute() {
        let expanded = expand_path("some/dir");
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with("some/dir"));
    }
}
