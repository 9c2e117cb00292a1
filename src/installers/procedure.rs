//! Install procedure dispatch.
//!
//! Each recognized tool maps to one [`Procedure`] variant. The mapping is a
//! pure function of ecosystem and tool name, evaluated when a tool is
//! registered with its installer.

use crate::error::Result;

use super::context::{InstallContext, PackageManager};
use super::tool::{Ecosystem, Tool};
use super::{cpp, general, javascript};

/// A known way of installing one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    Cmake,
    Ninja,
    Bazel,
    Emscripten,
    Nvm,
    Brew,
    Git,
}

impl Procedure {
    /// Every procedure, grouped by ecosystem.
    pub const ALL: [Procedure; 7] = [
        Procedure::Cmake,
        Procedure::Ninja,
        Procedure::Bazel,
        Procedure::Emscripten,
        Procedure::Nvm,
        Procedure::Brew,
        Procedure::Git,
    ];

    /// Lower-case tool name this procedure installs.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::Cmake => "cmake",
            Self::Ninja => "ninja",
            Self::Bazel => "bazel",
            Self::Emscripten => "emscripten",
            Self::Nvm => "nvm",
            Self::Brew => "brew",
            Self::Git => "git",
        }
    }

    pub fn ecosystem(&self) -> Ecosystem {
        match self {
            Self::Cmake | Self::Ninja | Self::Bazel | Self::Emscripten => Ecosystem::Cpp,
            Self::Nvm => Ecosystem::Javascript,
            Self::Brew | Self::Git => Ecosystem::General,
        }
    }

    /// Tools of the same ecosystem that must be installed first.
    pub fn requires(&self) -> &'static [&'static str] {
        match self {
            Self::Git => &["brew"],
            _ => &[],
        }
    }

    /// Install `tool` with this procedure.
    pub fn run(
        &self,
        ctx: &InstallContext<'_>,
        package_manager: PackageManager,
        tool: &Tool,
    ) -> Result<()> {
        match self {
            Self::Cmake => cpp::install_cmake(ctx, package_manager, tool),
            Self::Ninja => cpp::install_ninja(ctx, package_manager, tool),
            Self::Bazel => cpp::install_bazel(ctx, package_manager, tool),
            Self::Emscripten => cpp::install_emscripten(ctx, package_manager, tool),
            Self::Nvm => javascript::install_nvm(ctx, package_manager, tool),
            Self::Brew => general::install_brew(ctx, package_manager),
            Self::Git => general::install_git(ctx),
        }
    }
}

/// Bind a tool name to its procedure within `ecosystem`.
///
/// Names are matched case-insensitively. `None` means the ecosystem does
/// not know the tool.
pub fn resolve_procedure(ecosystem: Ecosystem, name: &str) -> Option<Procedure> {
    let key = name.trim().to_ascii_lowercase();
    Procedure::ALL
        .into_iter()
        .find(|p| p.ecosystem() == ecosystem && p.tool_name() == key)
}

/// Find a tool by name across the configurable ecosystems.
pub fn lookup(name: &str) -> Option<Procedure> {
    Ecosystem::CONFIGURABLE
        .into_iter()
        .find_map(|ecosystem| resolve_procedure(ecosystem, name))
}
