//! Tool installation framework.
//!
//! Declared tools are registered with the [`EcosystemInstaller`] of their
//! ecosystem, which binds each recognized name to a [`Procedure`]. Running
//! an installer attempts every bound tool and collects failures into an
//! [`InstallReport`] instead of stopping at the first one.

pub mod context;
pub mod cpp;
pub mod general;
pub mod installer;
pub mod javascript;
pub mod procedure;
pub mod report;
pub mod tool;

pub use context::{InstallContext, PackageManager};
pub use installer::{EcosystemInstaller, RegisteredTool};
pub use procedure::{lookup, resolve_procedure, Procedure};
pub use report::{InstallReport, RunReport};
pub use tool::{Ecosystem, Tool};
