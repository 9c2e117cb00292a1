//! Per-ecosystem tool installer.

use tracing::{debug, error, info};

use crate::error::{EddyError, Result};
use crate::version::LATEST;

use super::context::{InstallContext, PackageManager};
use super::procedure::{resolve_procedure, Procedure};
use super::report::InstallReport;
use super::tool::{Ecosystem, Tool};

/// A declared tool bound to its procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredTool {
    /// Lower-cased tool name.
    pub key: String,
    pub tool: Tool,
    pub procedure: Procedure,
}

/// The tools of one ecosystem and how to install them.
#[derive(Debug, Clone)]
pub struct EcosystemInstaller {
    ecosystem: Ecosystem,
    package_manager: PackageManager,
    known: Vec<RegisteredTool>,
    unrecognized: Vec<Tool>,
}

impl EcosystemInstaller {
    pub fn new(ecosystem: Ecosystem, package_manager: PackageManager) -> Self {
        Self {
            ecosystem,
            package_manager,
            known: Vec::new(),
            unrecognized: Vec::new(),
        }
    }

    /// Installer for the prerequisites every run needs: `brew` and `git`.
    pub fn general(package_manager: PackageManager) -> Self {
        let mut installer = Self::new(Ecosystem::General, package_manager);
        installer.set_tool("git", Tool::new("git", LATEST));
        installer.set_tool("brew", Tool::new("brew", LATEST));
        installer
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    /// Register `tool` under `name`.
    ///
    /// Unrecognized names are kept aside and never installed. Registering a
    /// name twice replaces the earlier tool but keeps its position.
    pub fn set_tool(&mut self, name: &str, tool: Tool) {
        let Some(procedure) = resolve_procedure(self.ecosystem, name) else {
            debug!("{} does not recognize tool '{}'", self.ecosystem, name);
            self.unrecognized.push(tool);
            return;
        };

        let key = procedure.tool_name().to_string();
        match self.known.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => {
                entry.tool = tool;
            }
            None => self.known.push(RegisteredTool {
                key,
                tool,
                procedure,
            }),
        }
    }

    /// Registered tools in declaration order.
    pub fn known(&self) -> &[RegisteredTool] {
        &self.known
    }

    /// Tools this ecosystem does not know how to install.
    pub fn unrecognized(&self) -> &[Tool] {
        &self.unrecognized
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        let key = name.trim().to_ascii_lowercase();
        self.known.iter().find(|entry| entry.key == key)
    }

    pub fn procedure_for(&self, name: &str) -> Option<Procedure> {
        self.get(name).map(|entry| entry.procedure)
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// Registered tools in install order.
    ///
    /// Declaration order, except that a registered requirement always
    /// comes before the tools that need it.
    pub fn install_order(&self) -> Vec<&RegisteredTool> {
        let mut visited = vec![false; self.known.len()];
        let mut order = Vec::with_capacity(self.known.len());
        for idx in 0..self.known.len() {
            self.visit(idx, &mut visited, &mut order);
        }
        order
    }

    fn visit<'a>(&'a self, idx: usize, visited: &mut [bool], order: &mut Vec<&'a RegisteredTool>) {
        if visited[idx] {
            return;
        }
        visited[idx] = true;

        let entry = &self.known[idx];
        for requirement in entry.procedure.requires() {
            if let Some(dep) = self.known.iter().position(|e| e.key == *requirement) {
                self.visit(dep, visited, order);
            }
        }
        order.push(entry);
    }

    /// Install every registered tool.
    ///
    /// Each tool is attempted once regardless of earlier failures. The
    /// report holds one entry per failed tool.
    pub fn install(&self, ctx: &InstallContext<'_>) -> InstallReport {
        let mut report = InstallReport::new();

        for entry in self.install_order() {
            debug!("Installing {} ({})", entry.tool, self.package_manager);
            if let Err(e) = entry.procedure.run(ctx, self.package_manager, &entry.tool) {
                error!("Failed to install {}: {}", entry.key, e);
                report.record(entry.key.clone(), EddyError::for_tool(&entry.key, e));
            }
        }

        if report.is_empty() && !self.known.is_empty() {
            info!("All {} tools installed", self.ecosystem.display_name());
        }
        report
    }

    /// Install one registered tool.
    pub fn install_tool(&self, name: &str, ctx: &InstallContext<'_>) -> Result<()> {
        let entry = self.get(name).ok_or_else(|| EddyError::ToolNotConfigured {
            name: name.to_string(),
        })?;
        entry
            .procedure
            .run(ctx, self.package_manager, &entry.tool)
            .map_err(|e| EddyError::for_tool(&entry.key, e))
    }
}
