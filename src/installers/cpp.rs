//! C/C++ toolchain installers.

use std::path::PathBuf;

use tracing::info;

use crate::error::{EddyError, Result};
use crate::shell::{Arch, Os, Platform};
use crate::version::{bare_version, GithubRepo};

use super::context::{InstallContext, PackageManager};
use super::tool::Tool;

const CMAKE_REPO: GithubRepo = GithubRepo::new("Kitware", "CMake");
const NINJA_REPO: GithubRepo = GithubRepo::new("ninja-build", "ninja");
const BAZEL_REPO: GithubRepo = GithubRepo::new("bazelbuild", "bazel");

const EMSDK_GIT_URL: &str = "https://github.com/emscripten-core/emsdk.git";

/// Executables shipped in a CMake release.
pub const CMAKE_BINARIES: [&str; 4] = ["cmake", "cpack", "ctest", "ccmake"];

pub(crate) fn install_cmake(
    ctx: &InstallContext<'_>,
    package_manager: PackageManager,
    tool: &Tool,
) -> Result<()> {
    if package_manager == PackageManager::Native {
        return ctx.brew_install("cmake", "CMake");
    }

    info!("Installing CMake manually");
    let version = ctx.resolver.resolve(&tool.version, &CMAKE_REPO)?;
    let release = CmakeRelease::new(ctx.shell.platform(), bare_version(&version));

    let root = ctx.home.root();
    let archive = ctx.shell.fetch_file(&release.url(), root)?;
    ctx.shell.extract_archive(&archive, root)?;

    let names = executables(ctx.shell.platform(), &CMAKE_BINARIES);
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    ctx.link_binaries(&root.join(release.bin_dir()), &names)?;

    info!("CMake installed successfully");
    Ok(())
}

/// Release artifact naming for one CMake version on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmakeRelease {
    version: String,
    dir_name: String,
    extension: &'static str,
    bundle: bool,
}

impl CmakeRelease {
    pub fn new(platform: Platform, version: &str) -> Self {
        let (suffix, extension, bundle) = match (platform.os, platform.arch) {
            (Os::Linux, Arch::X86_64) => ("linux-x86_64", "tar.gz", false),
            (Os::Linux, Arch::Aarch64) => ("linux-aarch64", "tar.gz", false),
            (Os::MacOs, _) => ("macos-universal", "tar.gz", true),
            (Os::Windows, Arch::X86_64) => ("windows-x86_64", "zip", false),
            (Os::Windows, Arch::Aarch64) => ("windows-arm64", "zip", false),
        };
        Self {
            version: version.to_string(),
            dir_name: format!("cmake-{}-{}", version, suffix),
            extension,
            bundle,
        }
    }

    pub fn archive_name(&self) -> String {
        format!("{}.{}", self.dir_name, self.extension)
    }

    pub fn url(&self) -> String {
        format!(
            "https://github.com/Kitware/CMake/releases/download/v{}/{}",
            self.version,
            self.archive_name()
        )
    }

    /// Directory of executables, relative to the extraction root.
    pub fn bin_dir(&self) -> PathBuf {
        let dir = PathBuf::from(&self.dir_name);
        if self.bundle {
            dir.join("CMake.app").join("Contents").join("bin")
        } else {
            dir.join("bin")
        }
    }
}

pub(crate) fn install_ninja(
    ctx: &InstallContext<'_>,
    package_manager: PackageManager,
    tool: &Tool,
) -> Result<()> {
    if package_manager == PackageManager::Native {
        return ctx.brew_install("ninja", "Ninja");
    }

    let version = ctx.resolver.resolve(&tool.version, &NINJA_REPO)?;
    let version = bare_version(&version);
    info!("Downloading ninja version {}", version);

    let platform = ctx.shell.platform();
    let url = format!(
        "https://github.com/ninja-build/ninja/releases/download/v{}/{}",
        version,
        ninja_archive(platform)
    );

    let root = ctx.home.root();
    let target_dir = root.join(format!("ninja-{}", version));
    let archive = ctx.shell.fetch_file(&url, root)?;
    ctx.shell.extract_archive(&archive, &target_dir)?;

    let names = executables(platform, &["ninja"]);
    ctx.shell.make_executable(&target_dir.join(&names[0]))?;
    ctx.link_binaries(&target_dir, &[names[0].as_str()])?;

    info!("Ninja installed successfully");
    Ok(())
}

/// Ninja release archive for `platform`.
pub fn ninja_archive(platform: Platform) -> &'static str {
    match (platform.os, platform.arch) {
        (Os::Linux, Arch::X86_64) => "ninja-linux.zip",
        (Os::Linux, Arch::Aarch64) => "ninja-linux-aarch64.zip",
        (Os::MacOs, _) => "ninja-mac.zip",
        (Os::Windows, Arch::X86_64) => "ninja-win.zip",
        (Os::Windows, Arch::Aarch64) => "ninja-winarm64.zip",
    }
}

pub(crate) fn install_bazel(
    ctx: &InstallContext<'_>,
    package_manager: PackageManager,
    tool: &Tool,
) -> Result<()> {
    if package_manager == PackageManager::Native {
        return ctx.brew_install("bazel", "Bazel");
    }

    let version = ctx.resolver.resolve(&tool.version, &BAZEL_REPO)?;
    let version = bare_version(&version);
    info!("Downloading bazel version {}", version);

    let platform = ctx.shell.platform();
    // Bazel tags carry no `v` prefix.
    let url = format!(
        "https://github.com/bazelbuild/bazel/releases/download/{}/{}",
        version,
        bazel_binary(platform, version)
    );

    let target_dir = ctx.home.root().join(format!("bazel-{}", version));
    let downloaded = ctx.shell.fetch_file(&url, &target_dir)?;
    let names = executables(platform, &["bazel"]);
    let binary = target_dir.join(&names[0]);

    ctx.shell.run_formatted(
        if platform.is_windows() { "move /Y {} {}" } else { "mv -f {} {}" },
        &[
            &downloaded.display().to_string(),
            &binary.display().to_string(),
        ],
    )?;
    ctx.shell.make_executable(&binary)?;
    ctx.link_binaries(&target_dir, &[names[0].as_str()])?;

    info!("Bazel installed successfully");
    Ok(())
}

/// Bazel single-file release name for `platform`.
pub fn bazel_binary(platform: Platform, version: &str) -> String {
    let suffix = match (platform.os, platform.arch) {
        (Os::Linux, Arch::X86_64) => "linux-x86_64",
        (Os::Linux, Arch::Aarch64) => "linux-arm64",
        (Os::MacOs, Arch::X86_64) => "darwin-x86_64",
        (Os::MacOs, Arch::Aarch64) => "darwin-arm64",
        (Os::Windows, Arch::X86_64) => "windows-x86_64.exe",
        (Os::Windows, Arch::Aarch64) => "windows-arm64.exe",
    };
    format!("bazel-{}-{}", version, suffix)
}

pub(crate) fn install_emscripten(
    ctx: &InstallContext<'_>,
    package_manager: PackageManager,
    tool: &Tool,
) -> Result<()> {
    if package_manager == PackageManager::Native {
        return ctx.brew_install("emscripten", "Emscripten");
    }

    if !ctx.shell.command_exists("git") {
        return Err(EddyError::Unsupported {
            tool: tool.name.clone(),
            message: "git is not installed, please install git to proceed with emscripten installation"
                .to_string(),
        });
    }

    let root = ctx.home.root();
    let emsdk_dir = root.join("emsdk");
    if emsdk_dir.join("emsdk").exists() {
        info!("emsdk already cloned at {}", emsdk_dir.display());
    } else {
        info!("Cloning emscripten repository");
        ctx.shell.clone_repository(EMSDK_GIT_URL, root)?;
    }

    // emsdk understands "latest" itself.
    let version = bare_version(&tool.version);

    info!("Running emscripten install script");
    ctx.shell.run_script("emsdk", &emsdk_dir, &["install", version])?;

    info!("Activating emscripten {}", version);
    ctx.shell.run_script("emsdk", &emsdk_dir, &["activate", version])?;

    let names: &[&str] = if ctx.shell.platform().is_windows() {
        &["emsdk.bat", "emsdk_env.bat"]
    } else {
        &["emsdk", "emsdk_env.sh"]
    };
    ctx.link_binaries(&emsdk_dir, names)?;

    info!("Emscripten installed successfully");
    Ok(())
}

/// Platform file names for executables (`.exe` on Windows).
fn executables(platform: Platform, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            if platform.is_windows() {
                format!("{}.exe", name)
            } else {
                name.to_string()
            }
        })
        .collect()
}
