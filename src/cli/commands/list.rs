//! List command implementation.
//!
//! `eddy list` prints the parsed configuration, marking what a run would
//! skip.

use crate::error::Result;
use crate::installers::{resolve_procedure, Ecosystem};
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    context: &'a CommandContext,
}

impl<'a> ListCommand<'a> {
    pub fn new(context: &'a CommandContext) -> Self {
        Self { context }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config(ui)?;
        let theme = self.context.theme();
        let declarations = config.tool_declarations();

        ui.message(&format!(
            "  {} {}",
            theme.key.apply_to("Config:"),
            theme.dim.apply_to(self.context.config_path().display())
        ));
        ui.message(&format!(
            "  {} {}",
            theme.key.apply_to("Package manager:"),
            self.context.package_manager(&config)
        ));
        ui.message("");

        ui.message(&format!("  {}", theme.key.apply_to("Languages:")));
        for key in config.ecosystem_keys() {
            let ecosystem = Ecosystem::from_key(&key);
            let heading = match ecosystem {
                Some(eco) => format!("    {} ({}):", eco.display_name(), key),
                None => format!(
                    "    {}: {}",
                    key,
                    theme.warning.apply_to("not supported, skipped")
                ),
            };
            ui.message(&heading);

            for decl in declarations.iter().filter(|d| d.ecosystem == key) {
                let supported = ecosystem
                    .and_then(|eco| resolve_procedure(eco, &decl.name))
                    .is_some();
                let note = if supported {
                    String::new()
                } else {
                    format!(" {}", theme.dim.apply_to("(will not be installed)"))
                };
                ui.message(&format!("      {}: {}{}", decl.name, decl.version, note));
            }
        }

        if !config.git.repos.is_empty() {
            ui.message("");
            let clone_dir = config
                .clone_dir()
                .map(|dir| dir.display().to_string())
                .unwrap_or_else(|| "<not set>".to_string());
            ui.message(&format!(
                "  {} {}",
                theme.key.apply_to("Repositories:"),
                theme.dim.apply_to(format!("-> {}", clone_dir))
            ));
            for repo in &config.git.repos {
                ui.message(&format!("    {}", repo));
            }
        }

        let scripts = config.scripts();
        if !scripts.is_empty() {
            ui.message("");
            ui.message(&format!("  {}", theme.key.apply_to("Custom scripts:")));
            for script in scripts {
                ui.message(&format!(
                    "    {} {}",
                    script.name,
                    theme.dim.apply_to(format!("- {}", script.command))
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
