//! Integration tests for config module public API.

use eddy::config::{load_config, parse_config, validate_config, EddyConfig};
use eddy::installers::PackageManager;
use eddy::EddyExit;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FULL_CONFIG: &str = r#"
languages:
  - cpp:
      - cmake: latest
      - ninja: 1.12.1
      - bazel: 7
  - javascript:
      - nvm: v0.40.1
platform:
  brew: true
  manual_installation: true
git:
  clone_dir: ~/projects
  repos:
    - git@github.com:owner/repo.git
    - https://github.com/owner/other.git
custom_scripts:
  - hello: echo hello
  - bye: echo bye
"#;

#[test]
fn public_api_is_accessible() {
    let config = EddyConfig::default();
    assert!(config.tool_declarations().is_empty());
    assert_eq!(config.package_manager(), PackageManager::Manual);
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, FULL_CONFIG).unwrap();

    let config = load_config(&path).unwrap();

    let tools: Vec<(String, String, String)> = config
        .tool_declarations()
        .into_iter()
        .map(|d| (d.ecosystem, d.name, d.version))
        .collect();
    assert_eq!(
        tools,
        vec![
            ("cpp".into(), "cmake".into(), "latest".into()),
            ("cpp".into(), "ninja".into(), "1.12.1".into()),
            ("cpp".into(), "bazel".into(), "7".into()),
            ("javascript".into(), "nvm".into(), "v0.40.1".into()),
        ]
    );
    assert_eq!(config.package_manager(), PackageManager::Native);
    assert_eq!(config.git.repos.len(), 2);
    assert!(config.clone_dir().unwrap().ends_with("projects"));
    let scripts: Vec<String> = config.scripts().into_iter().map(|s| s.name).collect();
    assert_eq!(scripts, ["hello", "bye"]);
}

#[test]
fn validation_collects_every_problem() {
    let config = parse_config(
        "languages:\n  - cpp:\n      - cmake: ''\ngit:\n  repos:\n    - repo.git\ncustom_scripts:\n  - hello: ''\n",
        Path::new("config.yaml"),
    )
    .unwrap();

    let rules: Vec<&str> = validate_config(&config).iter().map(|e| e.rule).collect();

    assert!(rules.contains(&"empty-version"));
    assert!(rules.contains(&"missing-clone-dir"));
    assert!(rules.contains(&"empty-script-command"));
}

#[test]
fn load_errors_map_to_exit_codes() {
    let temp = TempDir::new().unwrap();

    let missing = load_config(&temp.path().join("nope.yaml")).unwrap_err();
    assert_eq!(missing.exit_code(), EddyExit::NoConfig);

    let path = temp.path().join("config.yaml");
    fs::write(&path, "languages: {not: a list}\n").unwrap();
    let wrong = load_config(&path).unwrap_err();
    assert_eq!(wrong.exit_code(), EddyExit::WrongConfig);
}
