//! Install command implementation.
//!
//! `eddy install <target>` installs a single configured tool, or every
//! configured tool of an ecosystem when the target names one.

use tracing::info;

use crate::cli::args::InstallArgs;
use crate::error::{EddyError, Result};
use crate::exit_code::EddyExit;
use crate::installers::{lookup, Ecosystem, Procedure, RunReport};
use crate::runner::{print_report, InstallPlan};
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// What an install target names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallTarget {
    Tool(Procedure),
    Ecosystem(Ecosystem),
}

impl InstallTarget {
    /// Classify `name`. Tool names take precedence over ecosystem keys.
    pub fn parse(name: &str) -> Result<Self> {
        if let Some(procedure) = lookup(name) {
            return Ok(Self::Tool(procedure));
        }
        Ecosystem::from_key(name)
            .map(Self::Ecosystem)
            .ok_or_else(|| EddyError::UnknownTool {
                name: name.to_string(),
            })
    }
}

/// The install command implementation.
pub struct InstallCommand<'a> {
    context: &'a CommandContext,
    args: InstallArgs,
}

impl<'a> InstallCommand<'a> {
    pub fn new(context: &'a CommandContext, args: InstallArgs) -> Self {
        Self { context, args }
    }

    pub fn args(&self) -> &InstallArgs {
        &self.args
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = self
            .args
            .target
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(EddyError::ToolNotSpecified)?;
        let target = InstallTarget::parse(name)?;

        let config = self.context.load_config(ui)?;
        let plan = InstallPlan::from_config(&config, self.context.package_manager(&config));
        let ecosystem = match target {
            InstallTarget::Tool(procedure) => procedure.ecosystem(),
            InstallTarget::Ecosystem(ecosystem) => ecosystem,
        };
        let installer = plan
            .installer(ecosystem)
            .filter(|installer| match target {
                InstallTarget::Tool(procedure) => installer.get(procedure.tool_name()).is_some(),
                InstallTarget::Ecosystem(_) => !installer.is_empty(),
            })
            .ok_or_else(|| EddyError::ToolNotConfigured {
                name: name.to_string(),
            })?;

        self.context.home().ensure()?;
        let ctx = self.context.install_context();

        match target {
            InstallTarget::Tool(procedure) => {
                let tool = procedure.tool_name();
                info!("Installing {} from {}", tool, self.context.config_path().display());
                installer.install_tool(tool, &ctx)?;
                ui.success(&format!("{} installed", tool));
                Ok(CommandResult::success())
            }
            InstallTarget::Ecosystem(ecosystem) => {
                ui.show_header(ecosystem.display_name());
                let mut report = RunReport::new();
                report.merge(ecosystem.key(), installer.install(&ctx));
                print_report(ui, &report);
                if report.is_empty() {
                    Ok(CommandResult::success())
                } else {
                    Ok(CommandResult::failure(EddyExit::ToolNotInstalled))
                }
            }
        }
    }
}
