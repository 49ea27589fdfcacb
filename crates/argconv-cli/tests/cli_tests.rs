//! End-to-end tests for the argconv binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a Command for the argconv binary
fn argconv_cmd() -> Command {
    let mut cmd = Command::cargo_bin("argconv").expect("Failed to find argconv binary");
    cmd.env_remove("ARGCONV_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// convert Command Tests
// ============================================================================

#[test]
fn test_convert_integer() {
    argconv_cmd()
        .args(["convert", "int", "42"])
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn test_convert_negative_long() {
    argconv_cmd()
        .args(["convert", "long", "-9000000000"])
        .assert()
        .success()
        .stdout("-9000000000\n");
}

#[test]
fn test_convert_boolean_never_fails() {
    argconv_cmd()
        .args(["convert", "boolean", "yes"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_convert_json_output() {
    argconv_cmd()
        .args(["convert", "double", "2.5", "--name", "--ratio", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"--ratio\""))
        .stdout(predicate::str::contains("\"type\": \"f64\""))
        .stdout(predicate::str::contains("\"value\": 2.5"));
}

#[test]
fn test_convert_std_type() {
    argconv_cmd()
        .args(["convert", "Duration", "250ms"])
        .assert()
        .success()
        .stdout("250ms\n");
}

#[test]
fn test_convert_path_prints_unquoted() {
    argconv_cmd()
        .args(["convert", "PathBuf", "/tmp/x"])
        .assert()
        .success()
        .stdout("/tmp/x\n");
}

#[test]
fn test_convert_rejects_lowercase_infinity() {
    argconv_cmd()
        .args(["convert", "double", "inf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can not convert \"inf\""));

    argconv_cmd()
        .args(["convert", "double", "-Infinity"])
        .assert()
        .success()
        .stdout("-inf\n");
}

#[test]
fn test_convert_failure_reports_option_value_and_type() {
    argconv_cmd()
        .args(["convert", "int", "abc", "--name", "--port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "--port: can not convert \"abc\" to a i32",
        ));
}

#[test]
fn test_convert_unknown_type() {
    argconv_cmd()
        .args(["convert", "Uuid", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown type: Uuid"));
}

// ============================================================================
// Listing Command Tests
// ============================================================================

#[test]
fn test_types_lists_builtins_and_std_types() {
    argconv_cmd()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered Types"))
        .stdout(predicate::str::contains("Integer"))
        .stdout(predicate::str::contains("IpAddr"))
        .stdout(predicate::str::contains("PathBuf"));
}

#[test]
fn test_strategies_default_order() {
    argconv_cmd()
        .arg("strategies")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. builtin"))
        .stdout(predicate::str::contains("2. fromString"))
        .stdout(predicate::str::contains("3. valueOf"))
        .stdout(predicate::str::contains("4. constructor"));
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_config_restricts_strategies() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("argconv.toml");
    fs::write(&config, "strategies = [\"builtin\"]\n").unwrap();

    argconv_cmd()
        .args(["convert", "IpAddr", "127.0.0.1", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("can not convert"));

    argconv_cmd()
        .args(["strategies", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. builtin"))
        .stdout(predicate::str::contains("fromString").not());
}

#[test]
fn test_config_from_environment() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("argconv.toml");
    fs::write(&config, "strategies = [\"valueOf\", \"builtin\"]\n").unwrap();

    argconv_cmd()
        .arg("strategies")
        .env("ARGCONV_CONFIG", &config)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. valueOf"))
        .stdout(predicate::str::contains("2. builtin"));
}

#[test]
fn test_missing_config_file() {
    argconv_cmd()
        .args(["strategies", "--config", "/nonexistent/argconv.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration not found"));
}

#[test]
fn test_no_command_shows_hint() {
    argconv_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("argconv --help"));
}
