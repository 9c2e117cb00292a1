//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Validation in [`validator`]
//! - Default config download in [`remote`]
//!
//! # Example
//!
//! ```
//! use eddy::config::load_config;
//! use eddy::installers::PackageManager;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yaml");
//! fs::write(&path, "languages:\n  - cpp:\n      - cmake: latest\nplatform:\n  brew: true\n").unwrap();
//!
//! let config = load_config(&path).unwrap();
//! assert_eq!(config.tool_declarations()[0].name, "cmake");
//! assert_eq!(config.package_manager(), PackageManager::Native);
//! ```

pub mod loader;
pub mod remote;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config};
pub use remote::{RemoteFetcher, DEFAULT_CONFIG_URL};
pub use schema::{
    CustomScript, EddyConfig, GitConfig, OrderedMap, PlatformConfig, ToolDeclaration,
};
pub use validator::{validate, validate_config, ValidationError};
