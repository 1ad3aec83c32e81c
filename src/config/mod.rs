// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[server]` - Booking server endpoint and session cookies
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SKYBOOK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use skybook::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::paths;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Base URL used when the config does not name a server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light or dark).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Booking server settings.
///
/// The session cookie string is established out-of-band (the auth endpoints
/// are owned by the server); the client only forwards it with the order
/// request and reads the CSRF token out of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the booking server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Raw `Cookie` header value for the current session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookies: Option<String>,
}

/// Application configuration persisted as `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Returns the configured base URL, falling back to the default.
    pub fn base_url(&self) -> &str {
        self.server.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// Loads configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key suitable for a notification.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads configuration from a custom base directory (highest priority),
/// falling back to the standard path resolution.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = paths::config_file_with_override(base_dir, CONFIG_FILE) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-parse-error".to_string()),
        ),
    }
}

/// Loads configuration from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves configuration to a custom base directory (highest priority).
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = paths::config_file_with_override(base_dir, CONFIG_FILE) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to an explicit file path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip_preserves_settings() {
        let dir = tempdir().expect("tempdir");
        let config_path = dir.path().join("settings.toml");

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.general.theme_mode = ThemeMode::Light;
        config.server.base_url = Some("https://booking.example.com".to_string());
        config.server.cookies = Some("csrftoken=abc123; sessionid=xyz".to_string());

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let dir = tempdir().expect("tempdir");
        let config_path = dir.path().join("settings.toml");
        fs::write(&config_path, "not [valid toml").expect("write");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let dir = tempdir().expect("tempdir");
        let config_path = dir.path().join("nested").join("deeper").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn missing_sections_default() {
        let dir = tempdir().expect("tempdir");
        let config_path = dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.server, ServerConfig::default());
    }

    #[test]
    fn base_url_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);

        let mut config = Config::default();
        config.server.base_url = Some("https://sky.example".to_string());
        assert_eq!(config.base_url(), "https://sky.example");
    }

    #[test]
    fn load_with_override_uses_base_dir() {
        let dir = tempdir().expect("tempdir");
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());

        save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");
        let (loaded, warning) = load_with_override(Some(dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
    }
}
