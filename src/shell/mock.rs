//! Recording shell for testing.
//!
//! `RecordingShell` implements [`Shell`] without spawning anything: every
//! command line is captured for later assertion, and commands matching a
//! configured substring fail with exit code 1.
//!
//! # Example
//!
//! ```
//! use eddy::shell::{RecordingShell, Shell};
//!
//! let shell = RecordingShell::new().fail_on("brew");
//! assert!(shell.run("echo hi").is_ok());
//! assert!(shell.run("brew install cmake").is_err());
//! assert_eq!(shell.commands().len(), 2);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{EddyError, Result};

use super::platform::Platform;
use super::Shell;

/// Shell double that records instead of executing.
///
/// Clones share one command log, so a test can keep a handle while the
/// original is boxed away.
#[derive(Debug, Default, Clone)]
pub struct RecordingShell {
    platform: Platform,
    commands: Rc<RefCell<Vec<String>>>,
    failures: Vec<String>,
}

impl RecordingShell {
    /// Create a recorder for the current platform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build command strings for `platform` instead.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Fail every command containing `pattern`.
    pub fn fail_on(mut self, pattern: &str) -> Self {
        self.failures.push(pattern.to_string());
        self
    }

    /// All commands run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    /// Commands containing `pattern`.
    pub fn commands_matching(&self, pattern: &str) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .filter(|c| c.contains(pattern))
            .cloned()
            .collect()
    }

    /// Forget recorded commands.
    pub fn clear(&self) {
        self.commands.borrow_mut().clear();
    }
}

impl Shell for RecordingShell {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn run(&self, command: &str) -> Result<()> {
        self.commands.borrow_mut().push(command.to_string());
        if self.failures.iter().any(|p| command.contains(p.as_str())) {
            return Err(EddyError::CommandFailed {
                command: command.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}
