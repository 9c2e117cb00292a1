//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_URL;
use crate::installers::PackageManager;

/// eddy - Developer environment bootstrap.
#[derive(Debug, Parser)]
#[command(name = "eddy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (defaults to ~/.eddy.sh/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Working directory for downloads and tool links
    #[arg(long, global = true, env = "EDDY_HOME")]
    pub home: Option<PathBuf>,

    /// Install through the native package manager or manually
    #[arg(long, global = true, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Enable debug logging and echo every command
    #[arg(long, global = true, env = "EDDY_DEBUG")]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Where the default config is downloaded from
    #[arg(
        long,
        global = true,
        hide = true,
        env = "EDDY_CONFIG_URL",
        default_value = DEFAULT_CONFIG_URL
    )]
    pub config_url: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Install everything in the config (default if no command specified)
    Run,

    /// Install one tool, or every configured tool of an ecosystem
    Install(InstallArgs),

    /// Show the parsed configuration
    List,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Tool (cmake, ninja, nvm, ...) or ecosystem (cpp, js, ...)
    pub target: Option<String>,
}
