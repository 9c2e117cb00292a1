//! Configuration file loading.

use std::fs;
use std::path::Path;

use crate::config::schema::EddyConfig;
use crate::config::validator::validate;
use crate::error::{EddyError, Result};

/// Load, parse and validate a configuration file.
pub fn load_config(path: &Path) -> Result<EddyConfig> {
    let config = load_config_file(path)?;
    validate(&config)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load and parse a configuration file without validating it.
pub fn load_config_file(path: &Path) -> Result<EddyConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EddyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EddyError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into EddyConfig.
///
/// An empty document is an empty configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<EddyConfig> {
    if content.trim().is_empty() {
        return Ok(EddyConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| EddyError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, EddyError::ConfigNotFound { .. }));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "languages: [\n  - cpp").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, EddyError::ConfigParseError { .. }));
    }

    #[test]
    fn wrong_shape_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "languages: hello\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, EddyError::ConfigParseError { .. }));
    }

    #[test]
    fn invalid_values_are_validation_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "custom_scripts:\n  - hello: \"\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, EddyError::ConfigValidationError { .. }));
    }

    #[test]
    fn loads_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "languages:\n  - cpp:\n      - cmake: latest\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.tool_declarations().len(), 1);
    }

    #[test]
    fn empty_file_is_empty_config() {
        let config = parse_config("", Path::new("config.yaml")).unwrap();
        assert!(config.tool_declarations().is_empty());
    }
}
