//! End-to-end tests for the `beadloom palette` commands.
//!
//! Each test points `BEADLOOM_CONFIG_DIR` at its own temp directory, so
//! the palette store starts empty and state persists only across the
//! invocations of that test.

use std::path::Path;
use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the beadloom binary
fn beadloom_bin() -> &'static str {
    env!("CARGO_BIN_EXE_beadloom")
}

/// Runs `beadloom palette <args>` against an isolated config directory.
fn palette(config_dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(beadloom_bin())
        .env("BEADLOOM_CONFIG_DIR", config_dir)
        .arg("palette")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Fetches the palette state as JSON.
fn list_json(config_dir: &Path) -> serde_json::Value {
    let output = palette(config_dir, &["list", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "palette list should exit with code 0. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

#[test]
fn test_palette_list_defaults() {
    let config_dir = temp_config_dir();
    let state = list_json(config_dir.path());

    let base = state["base_colors"].as_array().expect("base_colors array");
    assert_eq!(base.len(), 10, "Ten fixed base colors");
    assert_eq!(base[0], "#FF6B6B");
    assert_eq!(base[9], "#000000");

    let groups = state["groups"].as_array().expect("groups array");
    assert_eq!(groups.len(), 1, "A fresh palette has one group");
    assert_eq!(groups[0]["id"], "default");
    assert_eq!(groups[0]["name"], "My Colors");
    assert_eq!(groups[0]["active"], true);
    assert_eq!(groups[0]["colors"].as_array().unwrap().len(), 0);
}

#[test]
fn test_palette_add_color_persists_across_invocations() {
    let config_dir = temp_config_dir();

    let output = palette(config_dir.path(), &["add-color", "--color", "#123456"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("#123456"), "Should confirm the added color");

    // a separate process sees the stored color
    let state = list_json(config_dir.path());
    let colors = state["groups"][0]["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0], "#123456");

    // the store file was created in the config dir
    assert!(config_dir.path().join("palette.json").exists());
}

#[test]
fn test_palette_add_duplicate_color_fails() {
    let config_dir = temp_config_dir();

    let first = palette(config_dir.path(), &["add-color", "--color", "#123456"]);
    assert_eq!(first.status.code(), Some(0));

    let second = palette(config_dir.path(), &["add-color", "--color", "#123456"]);
    assert_eq!(
        second.status.code(),
        Some(1),
        "Duplicate color should exit with code 1"
    );
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("already"), "stderr: {stderr}");
}

#[test]
fn test_palette_add_base_color_fails() {
    let config_dir = temp_config_dir();

    let output = palette(config_dir.path(), &["add-color", "--color", "#FF6B6B"]);
    assert_eq!(
        output.status.code(),
        Some(1),
        "Base colors are always available and cannot be re-added"
    );
}

#[test]
fn test_palette_add_invalid_hex_fails() {
    let config_dir = temp_config_dir();

    let output = palette(config_dir.path(), &["add-color", "--color", "blue"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid color"), "stderr: {stderr}");
}

#[test]
fn test_palette_remove_color() {
    let config_dir = temp_config_dir();

    palette(config_dir.path(), &["add-color", "--color", "#123456"]);
    let output = palette(config_dir.path(), &["remove-color", "--color", "#123456"]);
    assert_eq!(output.status.code(), Some(0));

    let state = list_json(config_dir.path());
    assert_eq!(state["groups"][0]["colors"].as_array().unwrap().len(), 0);

    // removing again reports the color as missing
    let again = palette(config_dir.path(), &["remove-color", "--color", "#123456"]);
    assert_eq!(again.status.code(), Some(1));
}

#[test]
fn test_palette_remove_base_color_fails() {
    let config_dir = temp_config_dir();

    let output = palette(config_dir.path(), &["remove-color", "--color", "#000000"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("base color"), "stderr: {stderr}");
}

#[test]
fn test_palette_group_lifecycle() {
    let config_dir = temp_config_dir();

    // create: the new group exists but stays inactive
    let created = palette(config_dir.path(), &["create-group", "--name", "Ocean"]);
    assert_eq!(
        created.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&created.stderr)
    );

    let state = list_json(config_dir.path());
    let groups = state["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    let ocean = groups
        .iter()
        .find(|g| g["name"] == "Ocean")
        .expect("Ocean group");
    assert_eq!(ocean["active"], false, "Creating does not activate");
    let ocean_id = ocean["id"].as_str().unwrap().to_string();

    // select: colors added afterwards land in the new group
    let selected = palette(config_dir.path(), &["select-group", "--id", &ocean_id]);
    assert_eq!(selected.status.code(), Some(0));
    palette(config_dir.path(), &["add-color", "--color", "#006994"]);

    let state = list_json(config_dir.path());
    let groups = state["groups"].as_array().unwrap();
    let ocean = groups.iter().find(|g| g["name"] == "Ocean").unwrap();
    assert_eq!(ocean["active"], true);
    assert_eq!(ocean["colors"][0], "#006994");
    let default = groups.iter().find(|g| g["id"] == "default").unwrap();
    assert_eq!(
        default["colors"].as_array().unwrap().len(),
        0,
        "The default group is unaffected"
    );

    // rename keeps the id and the colors
    let renamed = palette(
        config_dir.path(),
        &["rename-group", "--id", &ocean_id, "--name", "Deep Ocean"],
    );
    assert_eq!(renamed.status.code(), Some(0));

    let state = list_json(config_dir.path());
    let ocean = state["groups"]
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["id"] == ocean_id.as_str())
        .expect("renamed group keeps its id")
        .clone();
    assert_eq!(ocean["name"], "Deep Ocean");
    assert_eq!(ocean["colors"][0], "#006994");
}

#[test]
fn test_palette_delete_active_group_falls_back() {
    let config_dir = temp_config_dir();

    palette(config_dir.path(), &["create-group", "--name", "Ocean"]);
    let state = list_json(config_dir.path());
    let ocean_id = state["groups"][1]["id"].as_str().unwrap().to_string();

    palette(config_dir.path(), &["select-group", "--id", &ocean_id]);
    let deleted = palette(config_dir.path(), &["delete-group", "--id", &ocean_id]);
    assert_eq!(deleted.status.code(), Some(0));

    let state = list_json(config_dir.path());
    let groups = state["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["id"], "default");
    assert_eq!(groups[0]["active"], true, "Deletion reactivates the first group");
}

#[test]
fn test_palette_delete_last_group_fails() {
    let config_dir = temp_config_dir();

    let output = palette(config_dir.path(), &["delete-group", "--id", "default"]);
    assert_eq!(
        output.status.code(),
        Some(1),
        "The last group must survive"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("last"), "stderr: {stderr}");
}

#[test]
fn test_palette_select_unknown_group_fails() {
    let config_dir = temp_config_dir();

    let output = palette(config_dir.path(), &["select-group", "--id", "nope"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope"), "stderr: {stderr}");
}

#[test]
fn test_palette_create_group_rejects_empty_name() {
    let config_dir = temp_config_dir();

    let output = palette(config_dir.path(), &["create-group", "--name", ""]);
    assert_eq!(output.status.code(), Some(1));
}
