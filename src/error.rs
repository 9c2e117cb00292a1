//! Error types for eddy operations.
//!
//! This module defines [`EddyError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration and bootstrap errors are fatal and map to a reserved exit code
//! - Resolution and execution errors are scoped to one tool and end up in the
//!   install report instead of aborting the run
//! - Use `anyhow::Error` (via `EddyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::exit_code::EddyExit;

/// Core error type for eddy operations.
#[derive(Debug, Error)]
pub enum EddyError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Shell command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Shell command could not be launched or waited on.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    /// "latest" could not be turned into a concrete tag.
    #[error("Failed to resolve latest release of {repo}: {message}")]
    VersionResolution { repo: String, message: String },

    /// A tool's install procedure failed.
    #[error("Failed to install {tool}: {source}")]
    ToolFailed {
        tool: String,
        #[source]
        source: Box<EddyError>,
    },

    /// The tool cannot be installed on this platform or in this mode.
    #[error("{tool} is not supported here: {message}")]
    Unsupported { tool: String, message: String },

    /// A prerequisite (package manager, git) is missing and could not be installed.
    #[error("Bootstrap of '{requirement}' failed: {message}")]
    Bootstrap {
        requirement: String,
        message: String,
    },

    /// The user answered "no" to a confirmation prompt.
    #[error("Aborted: user declined to {action}")]
    UserDeclined { action: DeclinedAction },

    /// A tool name no ecosystem recognizes.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// A recognized tool that the config does not declare.
    #[error("{name} is not present in your config file")]
    ToolNotConfigured { name: String },

    /// `install` was invoked without a target.
    #[error("Please specify a tool to install, e.g. 'eddy install nvm'")]
    ToolNotSpecified,

    /// Unrecognized CLI subcommand.
    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Which confirmation prompt was declined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclinedAction {
    /// Downloading the default configuration file.
    DownloadConfig,
    /// Proceeding with the installation run.
    Install,
    /// Cloning repositories over SSH.
    SshClone,
    /// Running a named custom script.
    RunScript(String),
}

impl std::fmt::Display for DeclinedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DownloadConfig => write!(f, "download the default config"),
            Self::Install => write!(f, "proceed with installation"),
            Self::SshClone => write!(f, "clone repositories over SSH"),
            Self::RunScript(name) => write!(f, "run custom script '{}'", name),
        }
    }
}

impl EddyError {
    /// Wrap an error with the name of the tool whose procedure produced it.
    pub fn for_tool(tool: &str, source: EddyError) -> Self {
        Self::ToolFailed {
            tool: tool.to_string(),
            source: Box::new(source),
        }
    }

    /// Reserved process exit code for this error.
    pub fn exit_code(&self) -> EddyExit {
        match self {
            Self::ConfigNotFound { .. } => EddyExit::NoConfig,
            Self::ConfigParseError { .. } | Self::ConfigValidationError { .. } => {
                EddyExit::WrongConfig
            }
            Self::Bootstrap { requirement, .. } if requirement == "git" => EddyExit::GitMissing,
            Self::Bootstrap { .. } => EddyExit::PackageManagerMissing,
            Self::UserDeclined { action } => match action {
                DeclinedAction::DownloadConfig => EddyExit::NoConfig,
                DeclinedAction::Install => EddyExit::InstallDeclined,
                DeclinedAction::SshClone => EddyExit::SshDeclined,
                DeclinedAction::RunScript(_) => EddyExit::ScriptDeclined,
            },
            Self::UnknownTool { .. } => EddyExit::UnknownTool,
            Self::ToolNotConfigured { .. } | Self::ToolNotSpecified => EddyExit::ToolNotSpecified,
            Self::UnknownCommand { .. } => EddyExit::UnknownCommand,
            Self::CommandFailed { .. }
            | Self::CommandSpawn { .. }
            | Self::VersionResolution { .. }
            | Self::ToolFailed { .. }
            | Self::Unsupported { .. } => EddyExit::ToolNotInstalled,
            Self::Io(_) | Self::Other(_) => EddyExit::Internal,
        }
    }
}

/// Result type alias for eddy operations.
pub type Result<T> = std::result::Result<T, EddyError>;
