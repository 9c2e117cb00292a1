//! Reserved process exit codes.
//!
//! The numeric values are a compatibility surface shared with earlier
//! releases of the tool; scripts wrapping `eddy` match on them.

/// Exit status of an `eddy` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EddyExit {
    Success,
    /// Generic internal failure.
    Internal,
    /// Config file missing, or the user declined to download the default one.
    NoConfig,
    /// Config file could not be parsed or failed validation.
    WrongConfig,
    /// The native package manager was requested but could not be bootstrapped.
    PackageManagerMissing,
    /// git is missing and could not be installed.
    GitMissing,
    /// User declined the SSH clone prompt.
    SshDeclined,
    /// User declined to run a custom script.
    ScriptDeclined,
    /// User declined to proceed with the installation.
    InstallDeclined,
    UnknownCommand,
    /// `install` got no target, or a target missing from the config.
    ToolNotSpecified,
    /// At least one tool failed to install.
    ToolNotInstalled,
    UnknownTool,
}

impl EddyExit {
    /// Numeric exit code.
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Internal => 2,
            Self::NoConfig => 3,
            Self::WrongConfig => 4,
            Self::PackageManagerMissing => 5,
            Self::GitMissing => 6,
            Self::SshDeclined => 7,
            Self::ScriptDeclined => 8,
            Self::InstallDeclined => 9,
            Self::UnknownCommand => 11,
            Self::ToolNotSpecified => 12,
            Self::ToolNotInstalled => 13,
            Self::UnknownTool => 14,
        }
    }

    /// Whether this status represents success.
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<EddyExit> for std::process::ExitCode {
    fn from(exit: EddyExit) -> Self {
        std::process::ExitCode::from(exit.code() as u8)
    }
}
