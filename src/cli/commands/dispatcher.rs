//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::Commands;
use crate::error::Result;
use crate::exit_code::EddyExit;
use crate::ui::UserInterface;

use super::context::CommandContext;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Fatal errors are returned as `Err` and mapped to their exit code by
    /// the caller; non-fatal failures come back as a failed [`CommandResult`].
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit status to report.
    pub exit: EddyExit,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit: EddyExit::Success,
        }
    }

    /// Create a failure result.
    pub fn failure(exit: EddyExit) -> Self {
        Self {
            success: false,
            exit,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Route the subcommand to its implementation and execute it.
    ///
    /// No subcommand means `run`.
    pub fn dispatch(
        &self,
        command: Option<&Commands>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match command {
            Some(Commands::Run) | None => super::run::RunCommand::new(&self.context).execute(ui),
            Some(Commands::Install(args)) => {
                super::install::InstallCommand::new(&self.context, args.clone()).execute(ui)
            }
            Some(Commands::List) => super::list::ListCommand::new(&self.context).execute(ui),
        }
    }
}
