//! Unit tests for shell module

use rcsetup::files::{backup_path_for, has_backup};
use rcsetup::shell::install::{deploy_managed_resource, reconcile};
use rcsetup::shell::paths::{locate, managed_resource_path};
use rcsetup::shell::snippet::{build, header, marker};
use rcsetup::shell::StaticEnv;
use rcsetup::{Decision, InstallError, ReconcileOutcome};
use std::fs;

use crate::helpers::{env_for, home_with, tool_dir};

const PREFIX: &str = "PLATFORM_";

#[test]
fn locator_prefers_zshrc_for_zsh_users() {
    let home = home_with(&[(".zshrc", ""), (".bashrc", "")]);
    let env = env_for(home.path(), "/bin/zsh");

    assert_eq!(locate(&env, PREFIX).unwrap(), home.path().join(".zshrc"));
}

#[test]
fn locator_prefers_zprofile_over_zshrc() {
    let home = home_with(&[(".zprofile", ""), (".zshrc", "")]);
    let env = env_for(home.path(), "/bin/zsh");

    assert_eq!(locate(&env, PREFIX).unwrap(), home.path().join(".zprofile"));
}

#[test]
fn zsh_user_falls_back_to_bash_files() {
    let home = home_with(&[(".bashrc", "")]);
    let env = env_for(home.path(), "/bin/zsh");

    assert_eq!(locate(&env, PREFIX).unwrap(), home.path().join(".bashrc"));
}

#[test]
fn locator_hosting_override_beats_bashrc() {
    let home = home_with(&[(".bashrc", "")]);
    let app_dir = home.path().to_string_lossy().to_string();
    let env = env_for(home.path(), "/bin/bash")
        .set("PLATFORM_PROJECT", "p1")
        .set("PLATFORM_APP_DIR", &app_dir);

    let path = locate(&env, PREFIX).unwrap();
    assert_eq!(path, home.path().join(".environment"));
    assert!(!path.exists());
}

#[test]
fn locator_reports_not_found() {
    let home = home_with(&[(".profile", "")]);
    let env = env_for(home.path(), "/bin/bash");

    assert!(matches!(
        locate(&env, PREFIX),
        Err(InstallError::LocatorNotFound)
    ));
}

#[test]
fn deploy_is_pure_overwrite() {
    let home = home_with(&[]);
    let dest = managed_resource_path(&tool_dir(home.path()));

    for prior in ["", "old content\n", "much longer old content\nwith lines\n"] {
        fs::create_dir_all(dest.parent().unwrap()).unwrap();
        fs::write(&dest, prior).unwrap();
        deploy_managed_resource("# managed\n", &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "# managed\n");
    }
}

#[test]
fn bashrc_scenario() {
    let home = home_with(&[(".bashrc", "alias ll='ls -la'\n")]);
    let rc = home.path().join(".bashrc");
    let dir = tool_dir(home.path());
    let snippet = build(&dir, &managed_resource_path(&dir));

    let outcome = reconcile(
        &rc,
        &snippet,
        &marker(&dir),
        &header("Tool"),
        || Decision::Confirmed,
    )
    .unwrap();

    assert_eq!(
        outcome,
        ReconcileOutcome::Applied {
            backup: Some(backup_path_for(&rc))
        }
    );
    let expected = format!(
        "alias ll='ls -la'\n\n# Automatically added by the Tool\n{}\n",
        snippet
    );
    assert_eq!(fs::read_to_string(&rc).unwrap(), expected);
    assert_eq!(
        fs::read_to_string(backup_path_for(&rc)).unwrap(),
        "alias ll='ls -la'\n"
    );

    let lines: Vec<&str> = expected.lines().collect();
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "# Automatically added by the Tool");
    assert!(lines[3].starts_with("export PATH="));
    assert!(lines[4].starts_with("[ \"$BASH\" ] || [ \"$ZSH\" ] && . "));
}

#[test]
fn second_reconcile_is_already_configured_and_byte_identical() {
    let home = home_with(&[(".zshrc", "setopt autocd")]);
    let rc = home.path().join(".zshrc");
    let dir = tool_dir(home.path());
    let snippet = build(&dir, &managed_resource_path(&dir));
    let marker = marker(&dir);
    let header = header("Tool");

    reconcile(&rc, &snippet, &marker, &header, || Decision::Confirmed).unwrap();
    let first = fs::read(&rc).unwrap();
    let outcome = reconcile(&rc, &snippet, &marker, &header, || Decision::Confirmed).unwrap();
    let second = fs::read(&rc).unwrap();

    assert_eq!(outcome, ReconcileOutcome::AlreadyConfigured);
    assert_eq!(first, second);
}

#[test]
fn marker_anywhere_counts_as_configured() {
    let home = home_with(&[]);
    let dir = tool_dir(home.path());
    let rc = home.path().join(".bashrc");
    let original = format!("# old note about {}/bin, unrelated\n", dir.display());
    fs::write(&rc, &original).unwrap();

    let outcome = reconcile(
        &rc,
        "different snippet",
        &marker(&dir),
        &header("Tool"),
        || Decision::Confirmed,
    )
    .unwrap();

    assert_eq!(outcome, ReconcileOutcome::AlreadyConfigured);
    assert_eq!(fs::read_to_string(&rc).unwrap(), original);
    assert!(!has_backup(&rc));
}

#[test]
fn decline_leaves_file_and_creates_no_backup() {
    let home = home_with(&[(".bashrc", "export EDITOR=vim\n")]);
    let rc = home.path().join(".bashrc");
    let before = fs::read(&rc).unwrap();
    let dir = tool_dir(home.path());

    let outcome = reconcile(
        &rc,
        &build(&dir, &managed_resource_path(&dir)),
        &marker(&dir),
        &header("Tool"),
        || Decision::Declined,
    )
    .unwrap();

    assert_eq!(outcome, ReconcileOutcome::Declined);
    assert_eq!(fs::read(&rc).unwrap(), before);
    assert!(!has_backup(&rc));
}

#[test]
fn confirm_on_missing_file_creates_exact_block() {
    let home = home_with(&[]);
    let rc = home.path().join(".environment");
    let dir = tool_dir(home.path());
    let snippet = build(&dir, &managed_resource_path(&dir));

    let outcome = reconcile(
        &rc,
        &snippet,
        &marker(&dir),
        &header("Tool"),
        || Decision::Confirmed,
    )
    .unwrap();

    assert_eq!(outcome, ReconcileOutcome::Applied { backup: None });
    assert_eq!(
        fs::read_to_string(&rc).unwrap(),
        format!("# Automatically added by the Tool\n{}\n", snippet)
    );
    assert!(!has_backup(&rc));
}

#[test]
fn static_env_reads_only_what_was_set() {
    use rcsetup::shell::ShellEnv;

    let env = StaticEnv::with_home("/home/u").set("SHELL", "/bin/zsh");
    assert_eq!(env.var("SHELL").as_deref(), Some("/bin/zsh"));
    assert!(env.var("PATH").is_none());
    assert!(env.current_dir().is_none());
}
