//! Integration tests for the `ministories` binary (CLI)

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{serve, summaries_json};

/// Command with an empty config file and proxies disabled.
fn ministories(config_dir: &TempDir) -> Command {
    let config = config_dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    let mut cmd = Command::cargo_bin("ministories").unwrap();
    cmd.arg("--config")
        .arg(config)
        .env("MINISTORIES_LOG", "off")
        .env("NO_PROXY", "*")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    ministories(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stories"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("open"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn open_requires_an_id() {
    let dir = TempDir::new().unwrap();
    ministories(&dir)
        .arg("open")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ID>"));
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    ministories(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ministories"));
}

// ============================================================================
// Stories Command Tests
// ============================================================================

#[test]
fn stories_against_unreachable_endpoint_shows_empty_state() {
    let dir = TempDir::new().unwrap();
    ministories(&dir)
        .args(["stories", "--endpoint", "http://127.0.0.1:9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stories available"));
}

#[test]
fn stories_without_endpoint_or_page_shows_empty_state() {
    let dir = TempDir::new().unwrap();
    ministories(&dir)
        .arg("stories")
        .assert()
        .success()
        .stdout(predicate::str::contains("No stories available"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn stories_prints_one_line_per_story() {
    let endpoint = serve(200, &summaries_json(&[4, 2])).await;
    let dir = TempDir::new().unwrap();

    let output = tokio::task::spawn_blocking(move || {
        ministories(&dir)
            .args(["stories", "--endpoint", &endpoint])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Story 4"));
    assert!(lines[1].contains("Story 2"));
}

#[test]
fn bad_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "endpoint = [").unwrap();

    Command::cargo_bin("ministories")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("stories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
