//! eddy - Declarative developer environment bootstrap.
//!
//! eddy reads one YAML file listing toolchains per ecosystem and installs
//! each of them, through Homebrew or by downloading release artifacts into
//! `~/.eddy.sh`. A failing tool never stops the others; failures are
//! collected and reported at the end of the run.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`exit_code`] - Reserved process exit codes
//! - [`installers`] - Tools, per-ecosystem installers and install reports
//! - [`paths`] - Working directory layout and path helpers
//! - [`runner`] - Orchestration of a full installation run
//! - [`shell`] - Shell command execution
//! - [`ui`] - Confirmation prompts and terminal output
//! - [`version`] - "latest" version resolution
//!
//! # Example
//!
//! ```
//! use eddy::installers::{Ecosystem, EcosystemInstaller, PackageManager, Tool};
//!
//! let mut cpp = EcosystemInstaller::new(Ecosystem::Cpp, PackageManager::Manual);
//! cpp.set_tool("cmake", Tool::new("cmake", "latest"));
//! cpp.set_tool("conan", Tool::new("conan", "2.1"));
//!
//! assert_eq!(cpp.known().len(), 1);
//! assert_eq!(cpp.unrecognized()[0].name, "conan");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod installers;
pub mod paths;
pub mod runner;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{EddyError, Result};
pub use exit_code::EddyExit;
