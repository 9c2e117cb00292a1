//! Installation run orchestration.

pub mod plan;
pub mod workflow;

pub use plan::InstallPlan;
pub use workflow::{is_ssh_url, print_report, repository_dir_name, Workflow};
