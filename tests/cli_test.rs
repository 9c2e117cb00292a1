//! Integration tests for the eddy binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"
languages:
  - cpp:
      - cmake: latest
      - conan: 2.1
  - python:
      - poetry: latest
git:
  clone_dir: /tmp/eddy-projects
  repos:
    - git@github.com:owner/repo.git
custom_scripts:
  - hello: echo hello
"#;

fn setup_home(config: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    if let Some(config) = config {
        fs::write(temp.path().join("config.yaml"), config).unwrap();
    }
    temp
}

fn eddy(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("eddy"));
    cmd.env("EDDY_HOME", home.path())
        .env("EDDY_CONFIG_URL", "http://127.0.0.1:1/config.yaml")
        .env_remove("EDDY_DEBUG")
        .env_remove("EDDY_PROMPT_INSTALL")
        .env_remove("EDDY_PROMPT_DOWNLOAD_CONFIG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("eddy"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Developer environment bootstrap"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("eddy"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn unknown_command_exits_11() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(Some(CONFIG));
    eddy(&home).arg("frobnicate").assert().code(11);
    Ok(())
}

#[test]
fn install_without_target_exits_12() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(Some(CONFIG));
    eddy(&home).arg("install").assert().code(12);
    Ok(())
}

#[test]
fn install_unknown_tool_exits_14() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(Some(CONFIG));
    eddy(&home)
        .args(["install", "conan"])
        .assert()
        .code(14)
        .stderr(predicate::str::contains("conan"));
    Ok(())
}

#[test]
fn install_unconfigured_tool_exits_12() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(Some(CONFIG));
    eddy(&home).args(["install", "bazel"]).assert().code(12);
    Ok(())
}

#[test]
fn list_shows_parsed_config() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(Some(CONFIG));
    eddy(&home)
        .args(["list", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C++ (cpp):"))
        .stdout(predicate::str::contains("cmake: latest"))
        .stdout(predicate::str::contains("conan: 2.1 (will not be installed)"))
        .stdout(predicate::str::contains("python: not supported, skipped"))
        .stdout(predicate::str::contains("git@github.com:owner/repo.git"))
        .stdout(predicate::str::contains("hello - echo hello"));
    Ok(())
}

#[test]
fn list_honors_package_manager_flag() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(Some(CONFIG));
    eddy(&home)
        .args(["list", "--package-manager", "native"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Package manager: brew"));
    Ok(())
}

#[test]
fn invalid_config_exits_4() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(Some("languages:\n  - cpp:\n      - cmake: ''\n"));
    eddy(&home).arg("list").assert().code(4);
    Ok(())
}

#[test]
fn malformed_config_exits_4() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(Some("languages: [unclosed\n"));
    eddy(&home).arg("list").assert().code(4);
    Ok(())
}

#[test]
fn declined_install_exits_9() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(Some(CONFIG));
    eddy(&home)
        .arg("run")
        .assert()
        .code(9)
        .stdout(predicate::str::contains("proceed with the installation"));
    Ok(())
}

#[test]
fn default_command_is_run() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(Some(CONFIG));
    eddy(&home).assert().code(9);
    Ok(())
}

#[test]
fn prompt_override_declines_despite_yes() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(Some(CONFIG));
    eddy(&home)
        .args(["run", "--yes"])
        .env("EDDY_PROMPT_INSTALL", "no")
        .assert()
        .code(9);
    Ok(())
}

#[test]
fn missing_config_declined_exits_3() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(None);
    eddy(&home)
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No config found"));
    assert!(!home.path().join("config.yaml").exists());
    Ok(())
}

#[test]
fn missing_config_is_downloaded_when_confirmed() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/config.yaml");
        then.status(200).body(CONFIG);
    });
    let home = setup_home(None);

    eddy(&home)
        .args(["list", "--yes"])
        .env("EDDY_CONFIG_URL", server.url("/config.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("cmake: latest"));

    mock.assert();
    assert_eq!(fs::read_to_string(home.path().join("config.yaml"))?, CONFIG);
    Ok(())
}

#[test]
fn failed_download_exits_with_error() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(None);
    eddy(&home)
        .args(["list", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn explicit_config_path_is_used() -> Result<(), Box<dyn std::error::Error>> {
    let home = setup_home(None);
    let other = TempDir::new()?;
    let path = other.path().join("team.yaml");
    fs::write(&path, "languages:\n  - js:\n      - nvm: 0.40.1\n")?;

    eddy(&home)
        .arg("list")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("nvm: 0.40.1"));
    Ok(())
}
