//! Integration tests for `terracotta order` and config error reporting.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::fixture::{Project, terracotta};

const STACK: &str = "\
base_path: envs/dev
modules:
  - path: app
    depends_on: [database, network]
  - path: database
    depends_on: [network]
  - path: network
";

#[test]
fn test_order_quiet_prints_one_module_per_line() {
    Project::with_config(STACK)
        .command()
        .args(["order", "--quiet"])
        .assert()
        .success()
        .stdout("network\ndatabase\napp\n");
}

#[test]
fn test_order_human_shows_positions_and_dependencies() {
    Project::with_config(STACK)
        .command()
        .arg("order")
        .assert()
        .success()
        .stdout(predicate::str::contains("Execution order"))
        .stdout(predicate::str::contains("1. network"))
        .stdout(predicate::str::contains("3. app  ← database, network"));
}

#[test]
fn test_order_json_lists_modules() {
    let output = Project::with_config(STACK)
        .command()
        .args(["order", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let modules = v["modules"].as_array().expect("modules array");
    let names: Vec<&str> = modules
        .iter()
        .map(|m| m["module"].as_str().expect("module name"))
        .collect();
    assert_eq!(names, vec!["network", "database", "app"]);
    assert_eq!(modules[0]["position"], 1);
    assert!(modules[0].get("depends_on").is_none());
}

#[test]
fn test_order_config_flag_from_other_directory() {
    let project = Project::with_config(STACK);
    let elsewhere = tempfile::TempDir::new().expect("tempdir");
    terracotta()
        .current_dir(elsewhere.path())
        .arg("--config")
        .arg(project.config_path())
        .args(["order", "-q"])
        .assert()
        .success()
        .stdout("network\ndatabase\napp\n");
}

#[test]
fn test_order_config_env_var() {
    let project = Project::with_config(STACK);
    terracotta()
        .env("TERRACOTTA_CONFIG", project.config_path())
        .args(["order", "-q"])
        .assert()
        .success()
        .stdout("network\ndatabase\napp\n");
}

#[test]
fn test_order_empty_config_succeeds() {
    Project::with_config("modules: []\n")
        .command()
        .args(["order", "-q"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_order_cycle_fails() {
    Project::with_config(
        "modules:\n  - path: a\n    depends_on: [b]\n  - path: b\n    depends_on: [a]\n",
    )
    .command()
    .arg("order")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Failed to resolve module order"))
    .stderr(predicate::str::contains("cyclic dependency detected at"));
}

#[test]
fn test_order_unknown_dependency_fails() {
    Project::with_config("modules:\n  - path: app\n    depends_on: [vpc]\n")
        .command()
        .arg("order")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown dependency vpc for module app"));
}

#[test]
fn test_order_unknown_dependency_json_error() {
    let output = Project::with_config("modules:\n  - path: app\n    depends_on: [vpc]\n")
        .command()
        .args(["order", "--json"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "order_error");
    assert!(
        v["message"]
            .as_str()
            .expect("message")
            .contains("unknown dependency vpc for module app")
    );
}

#[test]
fn test_order_missing_config_fails() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    terracotta()
        .current_dir(dir.path())
        .arg("order")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"))
        .stderr(predicate::str::contains("terracotta.yaml"));
}

#[test]
fn test_order_malformed_config_json_error_code() {
    let output = Project::with_config("modules:\n  - path: app\n    dependson: [vpc]\n")
        .command()
        .args(["order", "--json"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(v["code"], "config_error");
}

#[test]
fn test_order_duplicate_module_rejected() {
    Project::with_config("modules:\n  - path: app\n  - path: app\n")
        .command()
        .arg("order")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"))
        .stderr(predicate::str::contains("app"));
}
