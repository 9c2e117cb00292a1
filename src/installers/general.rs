//! Prerequisites: the package manager and version control.

use tracing::{info, warn};

use crate::error::{EddyError, Result};

use super::context::{InstallContext, PackageManager};

const HOMEBREW_INSTALL_URL: &str = "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// Ensure Homebrew exists. Only acts in native mode.
pub(crate) fn install_brew(ctx: &InstallContext<'_>, package_manager: PackageManager) -> Result<()> {
    if package_manager != PackageManager::Native {
        return Ok(());
    }
    if ctx.shell.platform().is_windows() {
        return Err(EddyError::Unsupported {
            tool: "brew".to_string(),
            message: "Homebrew is not available on Windows, use manual_installation".to_string(),
        });
    }
    if ctx.shell.command_exists("brew") {
        return Ok(());
    }

    warn!("Brew is not installed. Installing brew...");
    let root = ctx.home.root();
    ctx.shell.fetch_file(HOMEBREW_INSTALL_URL, root)?;
    ctx.shell.run_script("install.sh", root, &[])?;
    info!("Brew installed successfully");
    Ok(())
}

/// Ensure git exists, installing it through Homebrew when missing.
pub(crate) fn install_git(ctx: &InstallContext<'_>) -> Result<()> {
    if ctx.shell.command_exists("git") {
        return Ok(());
    }

    warn!("Git is not installed. Installing git...");
    if ctx.shell.platform().is_windows() {
        return Err(EddyError::Unsupported {
            tool: "git".to_string(),
            message: "git installation for windows is not supported yet. Please follow manual steps from https://git-scm.com/downloads/win".to_string(),
        });
    }
    ctx.brew_install("git", "Git")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::EddyHome;
    use crate::shell::{Arch, Os, Platform, RecordingShell};
    use crate::version::FixedResolver;

    fn mac() -> RecordingShell {
        RecordingShell::new().with_platform(Platform::new(Os::MacOs, Arch::Aarch64))
    }

    #[test]
    fn brew_is_noop_in_manual_mode() {
        let temp = tempfile::TempDir::new().unwrap();
        let home = EddyHome::at(temp.path());
        let shell = mac();
        let resolver = FixedResolver::new("1.0.0");
        let ctx = InstallContext::new(&shell, &resolver, &home);

        install_brew(&ctx, PackageManager::Manual).unwrap();
        assert!(shell.commands().is_empty());
    }

    #[test]
    fn brew_present_is_left_alone() {
        let temp = tempfile::TempDir::new().unwrap();
        let home = EddyHome::at(temp.path());
        let shell = mac();
        let resolver = FixedResolver::new("1.0.0");
        let ctx = InstallContext::new(&shell, &resolver, &home);

        install_brew(&ctx, PackageManager::Native).unwrap();
        assert_eq!(shell.commands().len(), 1);
    }

    #[test]
    fn missing_brew_runs_install_script() {
        let temp = tempfile::TempDir::new().unwrap();
        let home = EddyHome::at(temp.path());
        let shell = mac().fail_on("command -v brew");
        let resolver = FixedResolver::new("1.0.0");
        let ctx = InstallContext::new(&shell, &resolver, &home);

        install_brew(&ctx, PackageManager::Native).unwrap();

        assert_eq!(shell.commands_matching(HOMEBREW_INSTALL_URL).len(), 1);
        assert_eq!(shell.commands_matching("./install.sh").len(), 1);
    }

    #[test]
    fn missing_git_installs_with_brew() {
        let temp = tempfile::TempDir::new().unwrap();
        let home = EddyHome::at(temp.path());
        let shell = mac().fail_on("command -v git");
        let resolver = FixedResolver::new("1.0.0");
        let ctx = InstallContext::new(&shell, &resolver, &home);

        install_git(&ctx).unwrap();
        assert_eq!(shell.commands_matching("brew install git").len(), 1);
    }

    #[test]
    fn missing_git_on_windows_is_unsupported() {
        let temp = tempfile::TempDir::new().unwrap();
        let home = EddyHome::at(temp.path());
        let shell = RecordingShell::new()
            .with_platform(Platform::new(Os::Windows, Arch::X86_64))
            .fail_on("where git");
        let resolver = FixedResolver::new("1.0.0");
        let ctx = InstallContext::new(&shell, &resolver, &home);

        let err = install_git(&ctx).unwrap_err();
        assert!(matches!(err, EddyError::Unsupported { .. }));
    }
}
