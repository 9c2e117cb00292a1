//! Collaborators shared by every install procedure.

use std::path::Path;

use crate::error::{EddyError, Result};
use crate::paths::EddyHome;
use crate::shell::Shell;
use crate::version::VersionResolver;

/// How tools are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PackageManager {
    /// Delegate to the system package manager (Homebrew).
    Native,
    /// Download and unpack release artifacts into the working directory.
    #[default]
    Manual,
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "brew"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

/// Shell, version resolver and working directory.
#[derive(Clone, Copy)]
pub struct InstallContext<'a> {
    pub shell: &'a dyn Shell,
    pub resolver: &'a dyn VersionResolver,
    pub home: &'a EddyHome,
}

impl<'a> InstallContext<'a> {
    pub fn new(shell: &'a dyn Shell, resolver: &'a dyn VersionResolver, home: &'a EddyHome) -> Self {
        Self {
            shell,
            resolver,
            home,
        }
    }

    /// Install `package` through Homebrew, logging progress as `display`.
    pub fn brew_install(&self, package: &str, display: &str) -> Result<()> {
        let name = display;
        tracing::info!("Installing {} using brew", name);
        self.shell.install_package(package)?;
        tracing::info!("{} installed successfully", name);
        Ok(())
    }

    /// Symlink each of `names` from `source_dir` into `bin/`.
    ///
    /// Every link is attempted; the first failure is returned afterwards.
    pub fn link_binaries(&self, source_dir: &Path, names: &[&str]) -> Result<()> {
        let bin_dir = self.home.bin_dir();
        let mut first_error: Option<EddyError> = None;

        for name in names {
            let result = self
                .shell
                .create_symlink(&source_dir.join(name), &bin_dir.join(name));
            if let Err(e) = result {
                tracing::error!("Failed to create symlink for {}: {}", name, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
