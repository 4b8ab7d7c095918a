//! SDK and host configuration.
//!
//! Loaded from `<config_dir>/ministories/config.toml` when present. Every
//! field has a default, so an empty or partial file is valid.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Query parameter that activates the performance debug overlay.
pub const DEBUG_QUERY_FLAG: &str = "debug";

/// Configuration for an SDK embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API endpoint used by `initialize` (empty means same origin as the host page)
    pub endpoint: String,
    /// URL of the host page, used for same-origin requests and the debug flag
    pub page_url: Option<String>,
    /// User agent reported with analytics events and sent on requests
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Explicit debug overlay switch; overrides the page URL query flag
    pub debug: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            page_url: None,
            user_agent: default_user_agent(),
            request_timeout_secs: 10,
            debug: None,
        }
    }
}

impl Config {
    /// Path of the user config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("ministories").join("config.toml"))
    }

    /// Load the user config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Write the configuration to the user config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write the configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve whether the debug overlay is active.
    ///
    /// An explicit `debug` value wins; otherwise the page URL query must carry
    /// `debug=1`. Resolved once when the SDK is constructed.
    pub fn debug_mode(&self) -> bool {
        match self.debug {
            Some(debug) => debug,
            None => self
                .page_url
                .as_deref()
                .map(debug_flag_in_url)
                .unwrap_or(false),
        }
    }

    /// Origin of the host page (`scheme://host[:port]`), if a page URL is set.
    pub fn page_origin(&self) -> Option<String> {
        let url = Url::parse(self.page_url.as_deref()?).ok()?;
        let origin = url.origin();
        origin.is_tuple().then(|| origin.ascii_serialization())
    }
}

/// Default user agent string, `ministories/<version>`.
pub fn default_user_agent() -> String {
    format!("ministories/{}", env!("CARGO_PKG_VERSION"))
}

/// Check a URL's query string for `debug=1`.
pub fn debug_flag_in_url(url: &str) -> bool {
    Url::parse(url)
        .map(|url| {
            url.query_pairs()
                .any(|(key, value)| key == DEBUG_QUERY_FLAG && value == "1")
        })
        .unwrap_or(false)
}
