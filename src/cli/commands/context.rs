//! State shared by every command: where things live and how to act on them.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::config::{load_config, EddyConfig, RemoteFetcher, DEFAULT_CONFIG_URL};
use crate::error::{DeclinedAction, EddyError, Result};
use crate::installers::{InstallContext, PackageManager};
use crate::paths::EddyHome;
use crate::shell::Shell;
use crate::ui::{EddyTheme, Prompt, UserInterface};
use crate::version::VersionResolver;

/// Timeout for downloading the default config.
const CONFIG_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolved global options plus the shell and resolver commands run against.
pub struct CommandContext {
    home: EddyHome,
    config_path: PathBuf,
    config_url: String,
    package_manager: Option<PackageManager>,
    no_color: bool,
    shell: Box<dyn Shell>,
    resolver: Box<dyn VersionResolver>,
}

impl CommandContext {
    /// Create a context rooted at `home`, reading `home`'s default config.
    pub fn new(home: EddyHome, shell: Box<dyn Shell>, resolver: Box<dyn VersionResolver>) -> Self {
        Self {
            config_path: home.config_file(),
            home,
            config_url: DEFAULT_CONFIG_URL.to_string(),
            package_manager: None,
            no_color: false,
            shell,
            resolver,
        }
    }

    /// Read the config from `path` instead.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    /// Download a missing config from `url` instead.
    pub fn with_config_url(mut self, url: impl Into<String>) -> Self {
        self.config_url = url.into();
        self
    }

    /// Override the config's package-manager choice.
    pub fn with_package_manager(mut self, package_manager: Option<PackageManager>) -> Self {
        self.package_manager = package_manager;
        self
    }

    /// Never style output, even on a color terminal.
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    pub fn theme(&self) -> EddyTheme {
        EddyTheme::detect(self.no_color)
    }

    pub fn home(&self) -> &EddyHome {
        &self.home
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn shell(&self) -> &dyn Shell {
        self.shell.as_ref()
    }

    /// Package manager for this invocation: the flag if given, else the config's.
    pub fn package_manager(&self, config: &EddyConfig) -> PackageManager {
        self.package_manager
            .unwrap_or_else(|| config.package_manager())
    }

    pub fn install_context(&self) -> InstallContext<'_> {
        InstallContext::new(self.shell.as_ref(), self.resolver.as_ref(), &self.home)
    }

    /// Load the config, offering to download the default one when missing.
    pub fn load_config(&self, ui: &mut dyn UserInterface) -> Result<EddyConfig> {
        if !self.config_path.exists() {
            ui.warning(&format!(
                "No config found at {}",
                self.config_path.display()
            ));
            let prompt = Prompt::new(
                "download_config",
                format!("Download the default config from {}?", self.config_url),
            );
            if !ui.confirm(&prompt)? {
                return Err(EddyError::UserDeclined {
                    action: DeclinedAction::DownloadConfig,
                });
            }

            info!("Downloading default config from {}", self.config_url);
            RemoteFetcher::new(CONFIG_DOWNLOAD_TIMEOUT)?
                .download_to(&self.config_url, &self.config_path)?;
            ui.success(&format!(
                "Default config saved to {}",
                self.config_path.display()
            ));
        }

        load_config(&self.config_path)
    }
}
