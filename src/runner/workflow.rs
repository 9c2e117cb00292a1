//! Full installation run.
//!
//! A run confirms with the user, bootstraps the package manager and git,
//! runs every ecosystem installer, clones repositories and finally runs
//! custom scripts. Tool failures are collected into a [`RunReport`];
//! bootstrap failures and declined prompts abort the run.

use tracing::{error, info};

use crate::config::EddyConfig;
use crate::error::{DeclinedAction, EddyError, Result};
use crate::installers::{EcosystemInstaller, InstallContext, PackageManager, RunReport};
use crate::ui::{Prompt, UserInterface};

use super::plan::InstallPlan;

/// Requirements bootstrapped before any tool, in the order they are checked.
const BOOTSTRAP_REQUIREMENTS: [&str; 2] = ["brew", "git"];

/// Orchestrates one run over a loaded configuration.
pub struct Workflow<'a> {
    config: &'a EddyConfig,
    ctx: InstallContext<'a>,
    package_manager: PackageManager,
}

impl<'a> Workflow<'a> {
    pub fn new(
        config: &'a EddyConfig,
        ctx: InstallContext<'a>,
        package_manager: PackageManager,
    ) -> Self {
        Self {
            config,
            ctx,
            package_manager,
        }
    }

    /// Run every stage. The returned report is empty when all tools installed.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<RunReport> {
        self.confirm_install(ui)?;
        self.ctx.home.ensure()?;
        self.bootstrap()?;

        let report = self.install_tools(ui);
        self.clone_repositories(ui)?;
        self.run_custom_scripts(ui)?;

        print_report(ui, &report);
        Ok(report)
    }

    fn confirm_install(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let prompt = Prompt::new("install", "Do you want to proceed with the installation?");
        if ui.confirm(&prompt)? {
            Ok(())
        } else {
            Err(EddyError::UserDeclined {
                action: DeclinedAction::Install,
            })
        }
    }

    /// Make sure the package manager and git are available.
    pub fn bootstrap(&self) -> Result<()> {
        let mut report = EcosystemInstaller::general(self.package_manager).install(&self.ctx);

        for requirement in BOOTSTRAP_REQUIREMENTS {
            if let Some(err) = report.take(requirement) {
                return Err(EddyError::Bootstrap {
                    requirement: requirement.to_string(),
                    message: err.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Run every configured ecosystem installer.
    pub fn install_tools(&self, ui: &mut dyn UserInterface) -> RunReport {
        let plan = InstallPlan::from_config(self.config, self.package_manager);
        let mut run_report = RunReport::new();

        for key in plan.ignored_ecosystems() {
            ui.warning(&format!("{} is not supported yet and will be skipped", key));
        }

        for installer in plan.installers() {
            let ecosystem = installer.ecosystem();
            for tool in installer.unrecognized() {
                ui.warning(&format!(
                    "{} is not supported in {} and will not be installed",
                    tool.name,
                    ecosystem.display_name()
                ));
            }
            if installer.is_empty() {
                continue;
            }

            ui.show_header(ecosystem.display_name());
            let report = installer.install(&self.ctx);
            for entry in installer.known() {
                if report.get(&entry.key).is_none() {
                    ui.success(&format!("{} installed", entry.key));
                }
            }
            run_report.merge(ecosystem.key(), report);
        }

        run_report
    }

    /// Clone configured repositories into `clone_dir`.
    ///
    /// SSH URLs need one confirmation up front. A failing clone is logged
    /// and the rest continue.
    pub fn clone_repositories(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let repos = &self.config.git.repos;
        if repos.is_empty() {
            return Ok(());
        }
        let Some(clone_dir) = self.config.clone_dir() else {
            return Err(EddyError::ConfigValidationError {
                message: "'git.clone_dir' is required when 'git.repos' is not empty".to_string(),
            });
        };

        if repos.iter().any(|repo| is_ssh_url(repo)) {
            let prompt = Prompt::new(
                "ssh_clone",
                "Some repositories are cloned over SSH. Is your SSH key added to your git host?",
            );
            if !ui.confirm(&prompt)? {
                return Err(EddyError::UserDeclined {
                    action: DeclinedAction::SshClone,
                });
            }
        }

        ui.show_header("Repositories");
        for repo in repos {
            if let Some(name) = repository_dir_name(repo) {
                if clone_dir.join(name).exists() {
                    info!("{} already present in {}", name, clone_dir.display());
                    ui.message(&format!("{} already cloned, skipping", name));
                    continue;
                }
            }
            match self.ctx.shell.clone_repository(repo, &clone_dir) {
                Ok(()) => ui.success(&format!("Cloned {}", repo)),
                Err(e) => {
                    error!("Failed to clone {}: {}", repo, e);
                    ui.warning(&format!("Failed to clone {}: {}", repo, e));
                }
            }
        }
        Ok(())
    }

    /// Run custom scripts, each after its own confirmation.
    pub fn run_custom_scripts(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let scripts = self.config.scripts();
        if scripts.is_empty() {
            return Ok(());
        }

        ui.show_header("Custom scripts");
        for script in scripts {
            let prompt = Prompt::new(
                format!("run_script_{}", script.name),
                format!("Run custom script '{}' ({})?", script.name, script.command),
            );
            if !ui.confirm(&prompt)? {
                return Err(EddyError::UserDeclined {
                    action: DeclinedAction::RunScript(script.name),
                });
            }

            match self.ctx.shell.run(&script.command) {
                Ok(()) => ui.success(&format!("{} finished", script.name)),
                Err(e) => {
                    error!("Custom script {} failed: {}", script.name, e);
                    ui.warning(&format!("Custom script {} failed: {}", script.name, e));
                }
            }
        }
        Ok(())
    }
}

/// Print every failed ecosystem/tool pair.
pub fn print_report(ui: &mut dyn UserInterface, report: &RunReport) {
    if report.is_empty() {
        ui.success("All tools installed successfully");
        return;
    }

    ui.show_header("Failures");
    for (ecosystem, tool, err) in report.failures() {
        ui.error(&format!("{}/{}: {}", ecosystem, tool, root_cause(err)));
    }
}

fn root_cause(err: &EddyError) -> &EddyError {
    match err {
        EddyError::ToolFailed { source, .. } => root_cause(source),
        other => other,
    }
}

/// Whether `url` is cloned over SSH.
pub fn is_ssh_url(url: &str) -> bool {
    let url = url.trim();
    url.starts_with("git@") || url.starts_with("ssh://")
}

/// Directory `git clone` creates for `url`.
pub fn repository_dir_name(url: &str) -> Option<&str> {
    let last = url
        .trim()
        .trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()?;
    let name = last.strip_suffix(".git").unwrap_or(last);
    (!name.is_empty()).then_some(name)
}
