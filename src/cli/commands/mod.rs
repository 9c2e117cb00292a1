//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Commands share one [`CommandContext`] holding the
//! resolved global flags, the shell and the version resolver.

pub mod context;
pub mod dispatcher;
pub mod install;
pub mod list;
pub mod run;

pub use context::CommandContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
