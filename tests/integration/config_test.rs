//! Integration tests for configuration files

use std::fs;

use tempfile::TempDir;

use ministories::{Config, OpenStoryOptions};

use crate::helpers::{detail_json, sdk};

#[test]
fn partial_config_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "endpoint = \"http://stories.local\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.endpoint, "http://stories.local");
    assert_eq!(config.request_timeout_secs, Config::default().request_timeout_secs);
    assert!(config.user_agent.starts_with("ministories/"));
}

#[test]
fn saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = Config {
        endpoint: "http://stories.local".to_string(),
        page_url: Some("http://demo.local/?debug=1".to_string()),
        debug: Some(false),
        ..Config::default()
    };

    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn malformed_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "endpoint = [").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config file"));
}

#[tokio::test]
async fn debug_from_config_file_enables_overlay() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "debug = true\n").unwrap();
    let config = Config::load_from(&path).unwrap();

    let (sdk, document, transport) = sdk(&config);
    transport.respond("/api/stories/1", 200, detail_json(1, 1));
    sdk.open_story(OpenStoryOptions::new(1)).await;

    assert!(document.debug_overlay().is_some());
}

#[tokio::test]
async fn explicit_debug_false_beats_url_flag() {
    let config = Config {
        page_url: Some("http://demo.local/?debug=1".to_string()),
        debug: Some(false),
        ..Config::default()
    };

    let (sdk, document, transport) = sdk(&config);
    transport.respond("/api/stories/1", 200, detail_json(1, 1));
    sdk.open_story(OpenStoryOptions::new(1)).await;

    assert!(document.debug_overlay().is_none());
}
