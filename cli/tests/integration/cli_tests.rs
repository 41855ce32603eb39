//! Integration tests for the CLI skeleton: help, version, argument parsing.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::fixture::terracotta;

#[test]
fn test_cli_no_args_shows_help() {
    // arg_required_else_help prints help on stderr and exits 2
    terracotta().assert().code(2).stderr(predicate::str::contains(
        "Run Terraform modules in dependency order",
    ));
}

#[test]
fn test_cli_help_flag_lists_commands() {
    terracotta()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("order"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    terracotta()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("terracotta"));
}

#[test]
fn test_version_command_shows_version() {
    terracotta()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("terracotta 0.1.0"));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let output = terracotta()
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(v["version"], "0.1.0");
}

#[test]
fn test_plan_help_shows_flags() {
    terracotta()
        .args(["plan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--upgrade"))
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn test_apply_rejects_upgrade_flag() {
    terracotta()
        .args(["apply", "--upgrade"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--upgrade"));
}

#[test]
fn test_unknown_command_fails() {
    terracotta().arg("destroy").assert().code(2);
}

/// `--help` output with wrapping undone.
fn long_help(args: &[&str]) -> String {
    let output = terracotta().args(args).output().expect("run");
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_config_help_explains_base_path_resolution() {
    let help = long_help(&["order", "--help"]);
    assert!(
        help.contains("resolved against the directory holding the file, not the current directory"),
        "{help}"
    );
}

#[test]
fn test_apply_help_explains_confirmation() {
    let help = long_help(&["apply", "--help"]);
    assert!(help.contains("Asks for confirmation first"), "{help}");
    assert!(help.contains("pass --yes, or set CI or TERRACOTTA_YES"), "{help}");
}

#[test]
fn test_plan_help_explains_upgrade_notice() {
    let help = long_help(&["plan", "--help"]);
    assert!(help.contains("Announced once per run"), "{help}");
}
