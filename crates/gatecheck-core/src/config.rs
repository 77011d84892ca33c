//! Configuration management for Gatecheck
//!
//! This module provides the suite-level configuration: where the login
//! page lives, how the browser is launched, and where failure artifacts
//! are written.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::Result;

/// Name of the optional configuration file in the working directory
const CONFIG_FILE: &str = "gatecheck.toml";

/// Suite-level Gatecheck configuration
///
/// Loaded from `gatecheck.toml` in the working directory when present,
/// then overridden by environment variables:
///
/// - `GATECHECK_BASE_URL`: target an already-deployed application
///   instead of the embedded fixture
/// - `GATECHECK_HEADED`: set to `1` to watch the browser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Base URL of the application under test. Empty means "spawn the
    /// embedded login fixture on an ephemeral port".
    #[serde(default)]
    pub base_url: String,

    /// Run the browser in headless mode
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Maximum time to wait for a navigation or element, in seconds
    #[serde(default = "default_nav_timeout_secs")]
    pub nav_timeout_secs: u64,

    /// Directory for failure screenshots
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: PathBuf,
}

// Default value providers
fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    800
}

fn default_nav_timeout_secs() -> u64 {
    30
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from("target/gatecheck")
}

impl SuiteConfig {
    /// Load configuration from `gatecheck.toml` or use defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content).map_err(|e| {
                crate::GatecheckError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e))
            })?)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the effective configuration: file (or defaults) plus
    /// environment overrides
    pub fn resolve() -> Result<Self> {
        Ok(Self::load_or_default(Path::new("."))?.apply_env_from(|name| std::env::var(name).ok()))
    }

    /// Apply environment-style overrides from a lookup function
    pub fn apply_env_from<F>(mut self, get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = get("GATECHECK_BASE_URL") {
            self.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(headed) = get("GATECHECK_HEADED") {
            self.headless = headed != "1";
        }
        self
    }

    /// Whether the suite should spawn the embedded fixture
    pub fn uses_embedded_fixture(&self) -> bool {
        self.base_url.is_empty()
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            nav_timeout_secs: default_nav_timeout_secs(),
            artifact_dir: default_artifact_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SuiteConfig::default();
        assert!(config.base_url.is_empty());
        assert!(config.uses_embedded_fixture());
        assert!(config.headless);
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 800);
        assert_eq!(config.nav_timeout_secs, 30);
        assert_eq!(config.artifact_dir, PathBuf::from("target/gatecheck"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = SuiteConfig::load_or_default(dir.path()).expect("load");
        assert!(config.uses_embedded_fixture());
    }

    #[test]
    fn test_partial_file_keeps_field_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("gatecheck.toml"),
            "base_url = \"https://staging.example.com\"\n",
        )
        .expect("write config");

        let config = SuiteConfig::load_or_default(dir.path()).expect("load");
        assert_eq!(config.base_url, "https://staging.example.com");
        assert!(!config.uses_embedded_fixture());
        assert!(config.headless);
        assert_eq!(config.nav_timeout_secs, 30);
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("gatecheck.toml"), "base_url = [not toml")
            .expect("write config");

        let err = SuiteConfig::load_or_default(dir.path()).unwrap_err();
        assert!(matches!(err, crate::GatecheckError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let config = SuiteConfig::default().apply_env_from(|name| match name {
            "GATECHECK_BASE_URL" => Some("http://10.0.0.5:8080/".to_string()),
            "GATECHECK_HEADED" => Some("1".to_string()),
            _ => None,
        });

        // Trailing slash is normalized away so URL joins stay clean
        assert_eq!(config.base_url, "http://10.0.0.5:8080");
        assert!(!config.headless);
    }

    #[test]
    fn test_env_absent_changes_nothing() {
        let config = SuiteConfig::default().apply_env_from(|_| None);
        assert!(config.uses_embedded_fixture());
        assert!(config.headless);
    }
}
