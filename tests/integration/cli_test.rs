//! Tests for the rcsetup binary

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use crate::helpers::{rcsetup, write_config};

#[test]
fn help_lists_self_install() {
    let home = TempDir::new().unwrap();
    rcsetup(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("self:install"));
}

#[test]
fn install_with_yes_updates_bashrc() {
    let home = TempDir::new().unwrap();
    let rc = home.path().join(".bashrc");
    fs::write(&rc, "alias ll='ls -la'\n").unwrap();
    let config = write_config(home.path());

    rcsetup(&home)
        .args(["--config", config.to_str().unwrap(), "self:install", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Updated successfully."))
        .stderr(predicate::str::contains("  source .bashrc"));

    let content = fs::read_to_string(&rc).unwrap();
    assert!(content.starts_with("alias ll='ls -la'\n\n# Automatically added by the Tool\n"));
    assert!(home.path().join(".bashrc.cli.bak").exists());
    assert!(home.path().join(".tool/shell-config.rc").exists());
}

#[test]
fn second_run_exits_zero_as_already_configured() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".bashrc"), "").unwrap();
    let config = write_config(home.path());
    let config = config.to_str().unwrap();

    rcsetup(&home)
        .args(["--config", config, "self:install", "--yes"])
        .assert()
        .success();
    let after_first = fs::read(home.path().join(".bashrc")).unwrap();

    rcsetup(&home)
        .args(["--config", config, "local:install", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Already configured:"));
    assert_eq!(fs::read(home.path().join(".bashrc")).unwrap(), after_first);
}

#[test]
fn non_interactive_without_yes_declines() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".bashrc"), "export A=1\n").unwrap();

    rcsetup(&home)
        .arg("self:install")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("use --yes"))
        .stderr(predicate::str::contains("add the following lines to:"))
        .stderr(predicate::str::contains("# CLI configuration"));

    assert_eq!(
        fs::read_to_string(home.path().join(".bashrc")).unwrap(),
        "export A=1\n"
    );
    assert!(!home.path().join(".bashrc.cli.bak").exists());
}

#[test]
fn missing_startup_file_exits_one() {
    let home = TempDir::new().unwrap();

    rcsetup(&home)
        .args(["self:install", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to find a shell configuration file.",
        ));
}

#[test]
fn invalid_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".bashrc"), "").unwrap();
    let config = home.path().join("bad.toml");
    fs::write(&config, "[application\n").unwrap();

    rcsetup(&home)
        .args(["--config", config.to_str().unwrap(), "self:install", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
    assert_eq!(fs::read_to_string(home.path().join(".bashrc")).unwrap(), "");
}
