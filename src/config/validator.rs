//! Configuration validation rules.
//!
//! - Ecosystem keys, tool names and versions must be non-empty
//! - Custom scripts need a name and a command
//! - Repositories need a URL and a `clone_dir` to land in
//!
//! Unknown ecosystem keys and unknown tools are not errors; they are
//! reported by `eddy list` and skipped at install time.

use crate::config::schema::EddyConfig;
use crate::error::{EddyError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &EddyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for group in &config.languages {
        for (key, _) in group.iter() {
            if key.trim().is_empty() {
                errors.push(ValidationError {
                    rule: "empty-ecosystem",
                    message: "Ecosystem key under 'languages' must not be empty".to_string(),
                });
            }
        }
    }

    for decl in config.tool_declarations() {
        if decl.name.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-tool-name",
                message: format!("Tool under '{}' has an empty name", decl.ecosystem),
            });
        }
        if decl.version.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-version",
                message: format!(
                    "Tool '{}' under '{}' has an empty version (use 'latest')",
                    decl.name, decl.ecosystem
                ),
            });
        }
    }

    for script in config.scripts() {
        if script.name.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-script-name",
                message: "Custom script has an empty name".to_string(),
            });
        }
        if script.command.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-script-command",
                message: format!("Custom script '{}' has an empty command", script.name),
            });
        }
    }

    if config.git.repos.iter().any(|repo| repo.trim().is_empty()) {
        errors.push(ValidationError {
            rule: "empty-repo",
            message: "Repository URL under 'git.repos' must not be empty".to_string(),
        });
    }
    if !config.git.repos.is_empty() && config.clone_dir().is_none() {
        errors.push(ValidationError {
            rule: "missing-clone-dir",
            message: "'git.clone_dir' is required when 'git.repos' is not empty".to_string(),
        });
    }

    errors
}

/// Validate and return the first error as an [`EddyError`].
pub fn validate(config: &EddyConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(EddyError::ConfigValidationError { message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> EddyConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn valid_config_passes() {
        let config = parse(
            r#"
languages:
  - cpp:
      - cmake: latest
  - python:
      - poetry: latest
git:
  clone_dir: /tmp/projects
  repos: [https://github.com/owner/repo.git]
custom_scripts:
  - hello: echo hello
"#,
        );
        assert!(validate_config(&config).is_empty());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn empty_version_is_rejected() {
        let config = parse("languages:\n  - cpp:\n      - cmake: \"\"\n");
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "empty-version");
    }

    #[test]
    fn empty_script_command_is_rejected() {
        let config = parse("custom_scripts:\n  - hello: \"  \"\n");
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("hello"));
    }

    #[test]
    fn repos_need_clone_dir() {
        let config = parse("git:\n  repos: [git@github.com:owner/repo.git]\n");
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "missing-clone-dir");
    }

    #[test]
    fn all_errors_are_collected() {
        let config = parse(
            r#"
languages:
  - cpp:
      - cmake: ""
      - ninja: ""
custom_scripts:
  - broken: ""
"#,
        );
        assert_eq!(validate_config(&config).len(), 3);
    }
}
