//! Run command implementation.
//!
//! `eddy run` (or plain `eddy`) installs everything the config declares.

use tracing::debug;

use crate::error::Result;
use crate::exit_code::EddyExit;
use crate::runner::Workflow;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand<'a> {
    context: &'a CommandContext,
}

impl<'a> RunCommand<'a> {
    pub fn new(context: &'a CommandContext) -> Self {
        Self { context }
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config(ui)?;
        let package_manager = self.context.package_manager(&config);
        debug!(
            "Running {} with package manager {}",
            self.context.config_path().display(),
            package_manager
        );

        let workflow = Workflow::new(&config, self.context.install_context(), package_manager);
        let report = workflow.run(ui)?;

        if report.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(EddyExit::ToolNotInstalled))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::EddyHome;
    use crate::shell::{Arch, Os, Platform, RecordingShell};
    use crate::ui::MockUI;
    use crate::version::FixedResolver;
    use std::fs;
    use tempfile::TempDir;

    fn setup(config: &str, shell: RecordingShell) -> (TempDir, CommandContext) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.yaml"), config).unwrap();
        let ctx = CommandContext::new(
            EddyHome::at(temp.path()),
            Box::new(shell.with_platform(Platform::new(Os::Linux, Arch::X86_64))),
            Box::new(FixedResolver::new("1.12.1")),
        );
        (temp, ctx)
    }

    #[test]
    fn successful_run() {
        let (_temp, ctx) = setup(
            "languages:\n  - cpp:\n      - ninja: latest\n",
            RecordingShell::new(),
        );
        let mut ui = MockUI::new();
        ui.set_default_prompt_response("yes");

        let result = RunCommand::new(&ctx).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_output("All tools installed successfully"));
    }

    #[test]
    fn failed_tool_is_tool_not_installed() {
        let (_temp, ctx) = setup(
            "languages:\n  - cpp:\n      - ninja: latest\n",
            RecordingShell::new().fail_on("ninja-linux.zip"),
        );
        let mut ui = MockUI::new();
        ui.set_default_prompt_response("yes");

        let result = RunCommand::new(&ctx).execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::failure(EddyExit::ToolNotInstalled));
        assert_eq!(ui.errors().len(), 1);
    }

    #[test]
    fn invalid_config_is_wrong_config() {
        let (_temp, ctx) = setup(
            "languages:\n  - cpp:\n      - cmake: ''\n",
            RecordingShell::new(),
        );
        let mut ui = MockUI::new();

        let err = RunCommand::new(&ctx).execute(&mut ui).unwrap_err();

        assert_eq!(err.exit_code(), EddyExit::WrongConfig);
        assert!(ui.prompts_shown().is_empty());
    }
}
