//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get an iris command
pub fn iris() -> Command {
    Command::new(cargo::cargo_bin!("iris"))
}

/// Helper to create a test project in a temp directory
pub fn setup_test_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    iris().current_dir(tmp.path()).arg("init").assert().success();
    tmp
}

/// Helper to create a test incident, returning its full ID
///
/// `extra` appends impact flags, e.g. `&["--deaths", "1"]`.
pub fn create_test_incident(tmp: &TempDir, company: &str, extra: &[&str]) -> String {
    let mut args = vec![
        "new",
        "--company",
        company,
        "--date",
        "2025-06-12",
        "--no-edit",
    ];
    args.extend_from_slice(extra);

    let output = iris()
        .current_dir(tmp.path())
        .args(&args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "iris new failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .split_whitespace()
        .find(|w| w.starts_with("INC-"))
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Helper to create an incident and store its classification
pub fn create_classified_incident(tmp: &TempDir, company: &str, extra: &[&str]) -> String {
    let id = create_test_incident(tmp, company, extra);
    iris()
        .current_dir(tmp.path())
        .args(["classify", &id, "--write"])
        .assert()
        .success();
    id
}
