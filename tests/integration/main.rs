//! Integration tests for the vcv CLI
//!
//! These tests run the real binary against scratch directories: the portal
//! commands against generated config files, the grading commands against
//! fake card photographs.

mod wizard_test;

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a vcv command isolated from the user's config
fn vcv(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("vcv"));
    cmd.current_dir(dir)
        .env_remove("VCV_CONFIG")
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("HOME", dir);
    cmd
}

/// Write the three slot images into a directory
fn write_captures(dir: &Path) {
    for name in ["front_top.jpg", "back-top.png", "front_angle.jpeg"] {
        fs::write(dir.join(name), b"\xFF\xD8\xFFfake").unwrap();
    }
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    vcv(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("vcv v"));
}

#[test]
fn test_no_command_prints_hints() {
    let temp = TempDir::new().unwrap();
    vcv(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("vcv wizard"));
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    vcv(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("platforms"))
        .stdout(predicate::str::contains("grade"))
        .stdout(predicate::str::contains("wizard"));
}

// =============================================================================
// PORTAL
// =============================================================================

#[test]
fn test_init_then_init_again() {
    let temp = TempDir::new().unwrap();

    vcv(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created vcv.toml"));
    assert!(temp.path().join("vcv.toml").exists());

    vcv(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    vcv(temp.path()).args(["init", "--force"]).assert().success();
}

#[test]
fn test_platforms_default_listing() {
    let temp = TempDir::new().unwrap();
    vcv(temp.path())
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicate::str::contains("Virtual Commerce Ventures"))
        .stdout(predicate::str::contains("[9] Platform 9"))
        .stdout(predicate::str::contains("not configured"));
}

#[test]
fn test_open_placeholder_fails() {
    let temp = TempDir::new().unwrap();
    vcv(temp.path())
        .args(["open", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not configured"));
}

#[test]
fn test_open_placeholder_json_reports_failure() {
    let temp = TempDir::new().unwrap();
    vcv(temp.path())
        .args(["--json", "open", "3"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("Platform 3 (platform 3) is not configured"));
}

#[test]
fn test_open_unknown_platform_fails() {
    let temp = TempDir::new().unwrap();
    vcv(temp.path())
        .args(["open", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown platform: 12"));
}

#[test]
fn test_open_configured_platform() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("portal.toml");
    fs::write(
        &config,
        r#"
[[platforms]]
id = 2
title = "Card Shop"
url = "https://shop.vcv.io"
"#,
    )
    .unwrap();

    vcv(temp.path())
        .args(["open", "2", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://shop.vcv.io"));
}

#[test]
fn test_platforms_json() {
    let temp = TempDir::new().unwrap();
    let output = vcv(temp.path()).args(["platforms", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["platforms"].as_array().unwrap().len(), 9);
    assert_eq!(json["platforms"][4]["link"]["status"], "not_configured");
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    vcv(temp.path())
        .args(["platforms", "--config", "nowhere.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

// =============================================================================
// GRADING
// =============================================================================

#[test]
fn test_grade_directory() {
    let temp = TempDir::new().unwrap();
    write_captures(temp.path());

    vcv(temp.path())
        .args(["grade", "--dir", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Likely PSA 8 (model estimate ~8.5)"))
        .stdout(predicate::str::contains("Notes:"));
}

#[test]
fn test_grade_without_images_is_incomplete() {
    let temp = TempDir::new().unwrap();
    vcv(temp.path())
        .arg("grade")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incomplete capture"))
        .stdout(predicate::str::contains("Please capture all required images before grading."));
}

#[test]
fn test_grade_partial_files_lists_missing() {
    let temp = TempDir::new().unwrap();
    write_captures(temp.path());

    vcv(temp.path())
        .args(["grade", "--front-top", "front_top.jpg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing: Back (top-down), Front (angled)"));
}

#[test]
fn test_grade_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    vcv(temp.path())
        .args(["grade", "--front-top", "nope.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("image not found"));
}

#[test]
fn test_grade_json() {
    let temp = TempDir::new().unwrap();
    write_captures(temp.path());

    let output = vcv(temp.path()).args(["grade", "--dir", ".", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["predicted_grade"], "Likely PSA 8 (model estimate ~8.5)");
    assert_eq!(json["notes"].as_array().unwrap().len(), 3);
    assert!(json.get("missing").is_none());
}
