//! Shell command execution.
//!
//! [`Shell::run`] is the only primitive; downloading, extracting,
//! symlinking, package installs, cloning and script execution are thin
//! command-string compositions over it. Swapping the implementation (see
//! [`RecordingShell`]) therefore captures every side effect an installer
//! would have.

pub mod command;
pub mod mock;
pub mod platform;

use std::path::{Path, PathBuf};

pub use command::{execute, format_command, OutputTarget, RunnerOptions, ShellRunner};
pub use mock::RecordingShell;
pub use platform::{shell_invocation, Arch, Os, Platform};

use crate::error::{EddyError, Result};
use crate::paths::ensure_dir;

/// Command execution substrate used by installers and the workflow.
pub trait Shell {
    /// Platform the command strings are built for.
    fn platform(&self) -> Platform;

    /// Run one command line through the platform shell.
    fn run(&self, command: &str) -> Result<()>;

    /// Format `template` with `args` and run it.
    fn run_formatted(&self, template: &str, args: &[&str]) -> Result<()> {
        self.run(&format_command(template, args))
    }

    /// Whether `name` resolves to an executable on `PATH`.
    fn command_exists(&self, name: &str) -> bool {
        let template = if self.platform().is_windows() {
            "where {} > NUL 2>&1"
        } else {
            "command -v {} > /dev/null 2>&1"
        };
        self.run_formatted(template, &[name]).is_ok()
    }

    /// Download `url` into `dest_dir`, keeping the URL's file name.
    fn fetch_file(&self, url: &str, dest_dir: &Path) -> Result<PathBuf> {
        let file_name = url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                EddyError::Other(anyhow::anyhow!("cannot derive a file name from {}", url))
            })?;

        ensure_dir(dest_dir)?;
        let dest = dest_dir.join(file_name);
        self.run_formatted(
            "curl -fL --silent --show-error -o {} {}",
            &[&dest.display().to_string(), url],
        )?;
        Ok(dest)
    }

    /// Unpack a `.tar.gz`/`.tgz`/`.zip` archive into `dest_dir`.
    fn extract_archive(&self, archive: &Path, dest_dir: &Path) -> Result<()> {
        ensure_dir(dest_dir)?;
        let is_zip = archive
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

        // GNU tar cannot read zip files; bsdtar on macOS and Windows can.
        let template = if is_zip && self.platform().os == Os::Linux {
            "unzip -o -q {} -d {}"
        } else {
            "tar -xf {} -C {}"
        };
        self.run_formatted(
            template,
            &[
                &archive.display().to_string(),
                &dest_dir.display().to_string(),
            ],
        )
    }

    /// Point `link` at `target`, replacing an existing link.
    fn create_symlink(&self, target: &Path, link: &Path) -> Result<()> {
        if let Some(parent) = link.parent() {
            ensure_dir(parent)?;
        }
        let target = target.display().to_string();
        let link = link.display().to_string();
        if self.platform().is_windows() {
            // mklink refuses to overwrite, so drop the old link first.
            self.run_formatted(
                "(if exist {} del /f /q {}) & mklink {} {}",
                &[&link, &link, &link, &target],
            )
        } else {
            self.run_formatted("ln -sf {} {}", &[&target, &link])
        }
    }

    /// Mark a file executable. No-op on Windows.
    fn make_executable(&self, path: &Path) -> Result<()> {
        if self.platform().is_windows() {
            return Ok(());
        }
        self.run_formatted("chmod 755 {}", &[&path.display().to_string()])
    }

    /// Install `package` through the native package manager.
    fn install_package(&self, package: &str) -> Result<()> {
        if self.platform().is_windows() {
            return Err(EddyError::Unsupported {
                tool: package.to_string(),
                message: "brew is not available on Windows, use manual_installation".to_string(),
            });
        }
        self.run_formatted("brew install {}", &[package])
    }

    /// Clone `url` inside `dest_dir`.
    fn clone_repository(&self, url: &str, dest_dir: &Path) -> Result<()> {
        ensure_dir(dest_dir)?;
        self.run_formatted(
            "git -C {} clone {}",
            &[&dest_dir.display().to_string(), url],
        )
    }

    /// Run a script file located in `dir`, from inside `dir`.
    fn run_script(&self, script: &str, dir: &Path, args: &[&str]) -> Result<()> {
        let dir = dir.display().to_string();
        let mut command = if self.platform().is_windows() {
            format_command("cd /d {} && {}", &[&dir, script])
        } else {
            format_command("cd {} && chmod +x {} && ./{}", &[&dir, script, script])
        };
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        self.run(&command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux() -> RecordingShell {
        RecordingShell::new().with_platform(Platform::new(Os::Linux, Arch::X86_64))
    }

    #[test]
    fn fetch_file_keeps_url_file_name() {
        let temp = tempfile::TempDir::new().unwrap();
        let shell = linux();

        let path = shell
            .fetch_file("https://example.com/dl/v1.0/tool.tar.gz", temp.path())
            .unwrap();

        assert_eq!(path, temp.path().join("tool.tar.gz"));
        let commands = shell.commands();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].starts_with("curl "));
        assert!(commands[0].ends_with("https://example.com/dl/v1.0/tool.tar.gz"));
    }

    #[test]
    fn fetch_file_rejects_url_without_file_name() {
        let temp = tempfile::TempDir::new().unwrap();
        let shell = linux();
        assert!(shell.fetch_file("", temp.path()).is_err());
        assert!(shell.commands().is_empty());
    }

    #[test]
    fn extract_zip_on_linux_uses_unzip() {
        let temp = tempfile::TempDir::new().unwrap();
        let shell = linux();
        shell
            .extract_archive(&temp.path().join("ninja-linux.zip"), temp.path())
            .unwrap();
        assert!(shell.commands()[0].starts_with("unzip "));
    }

    #[test]
    fn extract_tarball_uses_tar() {
        let temp = tempfile::TempDir::new().unwrap();
        let shell = RecordingShell::new().with_platform(Platform::new(Os::MacOs, Arch::Aarch64));
        shell
            .extract_archive(&temp.path().join("ninja-mac.zip"), temp.path())
            .unwrap();
        assert!(shell.commands()[0].starts_with("tar -xf "));
    }

    #[test]
    fn symlink_creates_parent_and_links() {
        let temp = tempfile::TempDir::new().unwrap();
        let shell = linux();
        let link = temp.path().join("bin").join("cmake");

        shell
            .create_symlink(Path::new("/opt/cmake/bin/cmake"), &link)
            .unwrap();

        assert!(temp.path().join("bin").is_dir());
        assert_eq!(
            shell.commands()[0],
            format!("ln -sf /opt/cmake/bin/cmake {}", link.display())
        );
    }

    #[test]
    fn windows_symlink_removes_existing_link_first() {
        let temp = tempfile::TempDir::new().unwrap();
        let shell = RecordingShell::new().with_platform(Platform::new(Os::Windows, Arch::X86_64));
        let link = temp.path().join("ninja.exe");

        shell
            .create_symlink(Path::new("C:\\tools\\ninja.exe"), &link)
            .unwrap();

        let link = link.display().to_string();
        assert_eq!(
            shell.commands(),
            vec![format!(
                "(if exist {link} del /f /q {link}) & mklink {link} C:\\tools\\ninja.exe"
            )]
        );
    }

    #[test]
    fn windows_package_install_is_unsupported() {
        let shell = RecordingShell::new().with_platform(Platform::new(Os::Windows, Arch::X86_64));
        let err = shell.install_package("cmake").unwrap_err();
        assert!(matches!(err, EddyError::Unsupported { .. }));
        assert!(shell.commands().is_empty());
    }

    #[test]
    fn command_exists_follows_run_result() {
        let shell = linux().fail_on("command -v brew");
        assert!(shell.command_exists("git"));
        assert!(!shell.command_exists("brew"));
    }

    #[test]
    fn run_script_appends_args() {
        let shell = linux();
        shell
            .run_script("emsdk", Path::new("/home/me/.eddy.sh/emsdk"), &["install", "latest"])
            .unwrap();
        assert_eq!(
            shell.commands()[0],
            "cd /home/me/.eddy.sh/emsdk && chmod +x emsdk && ./emsdk install latest"
        );
    }

    #[cfg(unix)]
    #[test]
    fn real_runner_checks_commands() {
        let runner = ShellRunner::new(RunnerOptions {
            debug: false,
            output: OutputTarget::Discard,
        });
        assert!(runner.command_exists("sh"));
        assert!(!runner.command_exists("definitely-not-a-real-command-xyz"));
    }
}
