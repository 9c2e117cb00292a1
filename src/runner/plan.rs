//! Distribution of configured tools to ecosystem installers.

use tracing::warn;

use crate::config::EddyConfig;
use crate::installers::{Ecosystem, EcosystemInstaller, PackageManager, Tool};

/// One installer per configured ecosystem, in document order.
#[derive(Debug, Clone)]
pub struct InstallPlan {
    installers: Vec<EcosystemInstaller>,
    ignored_ecosystems: Vec<String>,
}

impl InstallPlan {
    /// Register every declared tool with the installer of its ecosystem.
    ///
    /// Unknown ecosystem keys are skipped with a warning and remembered.
    pub fn from_config(config: &EddyConfig, package_manager: PackageManager) -> Self {
        let mut installers: Vec<EcosystemInstaller> = Vec::new();
        let mut ignored_ecosystems = Vec::new();

        for key in config.ecosystem_keys() {
            match Ecosystem::from_key(&key) {
                Some(ecosystem) => {
                    if !installers.iter().any(|i| i.ecosystem() == ecosystem) {
                        installers.push(EcosystemInstaller::new(ecosystem, package_manager));
                    }
                }
                None => {
                    warn!("Ecosystem '{}' is not supported and will be skipped", key);
                    ignored_ecosystems.push(key);
                }
            }
        }

        for decl in config.tool_declarations() {
            let Some(ecosystem) = Ecosystem::from_key(&decl.ecosystem) else {
                continue;
            };
            if let Some(installer) = installers.iter_mut().find(|i| i.ecosystem() == ecosystem) {
                installer.set_tool(&decl.name, Tool::new(decl.name.clone(), decl.version));
            }
        }

        Self {
            installers,
            ignored_ecosystems,
        }
    }

    pub fn installers(&self) -> &[EcosystemInstaller] {
        &self.installers
    }

    pub fn installer(&self, ecosystem: Ecosystem) -> Option<&EcosystemInstaller> {
        self.installers.iter().find(|i| i.ecosystem() == ecosystem)
    }

    /// Ecosystem keys no installer handles.
    pub fn ignored_ecosystems(&self) -> &[String] {
        &self.ignored_ecosystems
    }

    /// Declared tools that will not be installed, with their ecosystem.
    pub fn unrecognized_tools(&self) -> Vec<(Ecosystem, &Tool)> {
        self.installers
            .iter()
            .flat_map(|i| i.unrecognized().iter().map(move |t| (i.ecosystem(), t)))
            .collect()
    }
}
