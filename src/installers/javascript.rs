//! JavaScript runtime manager installers.

use tracing::{info, warn};

use crate::error::{EddyError, Result};
use crate::version::{bare_version, GithubRepo};

use super::context::{InstallContext, PackageManager};
use super::tool::Tool;

const NVM_REPO: GithubRepo = GithubRepo::new("nvm-sh", "nvm");

pub(crate) fn install_nvm(
    ctx: &InstallContext<'_>,
    package_manager: PackageManager,
    tool: &Tool,
) -> Result<()> {
    if ctx.shell.platform().is_windows() {
        return Err(EddyError::Unsupported {
            tool: tool.name.clone(),
            message: "NVM installation is not yet supported on Windows. Please use NVM for Windows"
                .to_string(),
        });
    }

    if package_manager == PackageManager::Native {
        warn!("Note: NVM is not available via Homebrew. It will be installed manually.");
    }

    let version = ctx.resolver.resolve(&tool.version, &NVM_REPO)?;
    let version = bare_version(&version);
    info!("Downloading NVM version {}", version);

    let url = format!(
        "https://raw.githubusercontent.com/nvm-sh/nvm/v{}/install.sh",
        version
    );
    let root = ctx.home.root();
    ctx.shell.fetch_file(&url, root)?;
    ctx.shell.run_script("install.sh", root, &[])?;

    info!("NVM installed successfully");
    Ok(())
}
