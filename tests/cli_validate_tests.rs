//! End-to-end tests for the `beadloom validate` command.

use std::process::Command;

mod fixtures;
use fixtures::*;

use beadloom::models::BoardTemplate;

/// Path to the beadloom binary
fn beadloom_bin() -> &'static str {
    env!("CARGO_BIN_EXE_beadloom")
}

#[test]
fn test_validate_valid_pattern() {
    let pattern = test_pattern_basic(BoardTemplate::SquareSmall);
    let (pattern_path, _temp_dir) = create_temp_pattern_file(&pattern);

    let output = Command::new(beadloom_bin())
        .args(["validate", "--pattern", pattern_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Valid pattern should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("✓") || stdout.contains("passed"),
        "Output should indicate success"
    );
}

#[test]
fn test_validate_valid_pattern_json() {
    let pattern = test_pattern_basic(BoardTemplate::SquareSmall);
    let (pattern_path, _temp_dir) = create_temp_pattern_file(&pattern);

    let output = Command::new(beadloom_bin())
        .args([
            "validate",
            "--pattern",
            pattern_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], true, "Should be valid");
    assert!(result["errors"].is_array(), "Should have errors array");
    assert_eq!(
        result["errors"].as_array().unwrap().len(),
        0,
        "Should have no errors"
    );
    assert!(result["checks"].is_object(), "Should have checks object");
}

#[test]
fn test_validate_json_structure() {
    let pattern = test_pattern_basic(BoardTemplate::SquareLarge);
    let (pattern_path, _temp_dir) = create_temp_pattern_file(&pattern);

    let output = Command::new(beadloom_bin())
        .args([
            "validate",
            "--pattern",
            pattern_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    // Verify JSON schema
    assert!(result["valid"].is_boolean(), "valid should be boolean");
    assert!(result["errors"].is_array(), "errors should be array");
    assert!(result["checks"].is_object(), "checks should be object");

    // Verify checks structure
    let checks = &result["checks"];
    assert!(checks["parse"].is_string(), "parse check should be string");
    assert!(
        checks["dimensions"].is_string(),
        "dimensions check should be string"
    );
    assert!(checks["cells"].is_string(), "cells check should be string");
    assert!(
        checks["bead_count"].is_string(),
        "bead_count check should be string"
    );
}

#[test]
fn test_validate_invalid_cell_value() {
    let mut pattern = test_pattern_basic(BoardTemplate::SquareSmall);
    pattern.grid[3][5] = "#NOTHEX".to_string();
    let (pattern_path, _temp_dir) = create_temp_pattern_file(&pattern);

    let output = Command::new(beadloom_bin())
        .args([
            "validate",
            "--pattern",
            pattern_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Invalid cell should exit with code 1"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], false, "Should be invalid");
    assert_eq!(result["checks"]["cells"].as_str(), Some("failed"));

    let errors = result["errors"].as_array().expect("Should have errors");
    assert!(!errors.is_empty(), "Should have at least one error");
    let first = &errors[0];
    assert_eq!(first["severity"], "error");
    assert!(
        first["message"].as_str().unwrap().contains("#NOTHEX"),
        "Error should quote the bad cell value"
    );
    assert_eq!(first["location"]["row"], 3, "Error should locate the cell");
    assert_eq!(first["location"]["col"], 5);
}

#[test]
fn test_validate_malformed_json() {
    let temp_dir = temp_config_dir();
    let pattern_path = temp_dir.path().join("broken.json");
    std::fs::write(&pattern_path, "{not json").expect("Failed to write file");

    let output = Command::new(beadloom_bin())
        .args([
            "validate",
            "--pattern",
            pattern_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Malformed JSON should exit with code 1"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], false);
    assert_eq!(result["checks"]["parse"].as_str(), Some("failed"));
    // downstream checks never ran
    assert_eq!(result["checks"]["dimensions"].as_str(), Some("skipped"));
    assert_eq!(result["checks"]["cells"].as_str(), Some("skipped"));
}

#[test]
fn test_validate_wrong_board_dimensions() {
    // a 14x14 pattern checked against the 29x29 board
    let pattern = test_pattern_basic(BoardTemplate::SquareSmall);
    let (pattern_path, _temp_dir) = create_temp_pattern_file(&pattern);

    let output = Command::new(beadloom_bin())
        .args([
            "validate",
            "--pattern",
            pattern_path.to_str().unwrap(),
            "--template",
            "square-large",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], false);
    assert_eq!(result["checks"]["dimensions"].as_str(), Some("failed"));
}

#[test]
fn test_validate_bead_count_mismatch_is_a_warning() {
    let mut pattern = test_pattern_basic(BoardTemplate::SquareSmall);
    pattern.bead_count = 999;
    let (pattern_path, _temp_dir) = create_temp_pattern_file(&pattern);

    let output = Command::new(beadloom_bin())
        .args([
            "validate",
            "--pattern",
            pattern_path.to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    // a stale stored count does not invalidate the pattern
    assert_eq!(
        output.status.code(),
        Some(0),
        "Count mismatch alone should still exit 0"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["valid"], true);
    assert_eq!(result["checks"]["bead_count"].as_str(), Some("warning"));

    let warnings: Vec<&serde_json::Value> = result["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|m| m["severity"] == "warning")
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0]["message"].as_str().unwrap().contains("999"));
}

#[test]
fn test_validate_strict_mode_rejects_warnings() {
    let mut pattern = test_pattern_basic(BoardTemplate::SquareSmall);
    pattern.bead_count = 999;
    let (pattern_path, _temp_dir) = create_temp_pattern_file(&pattern);

    let output = Command::new(beadloom_bin())
        .args([
            "validate",
            "--pattern",
            pattern_path.to_str().unwrap(),
            "--strict",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Warnings should fail the run under --strict"
    );
}

#[test]
fn test_validate_nonexistent_file() {
    let output = Command::new(beadloom_bin())
        .args(["validate", "--pattern", "/nonexistent/file.json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(2),
        "Nonexistent file should exit with code 2 (I/O error)"
    );
}
