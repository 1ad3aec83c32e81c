// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions
//!    (tests, and the `--config-dir`/`--data-dir` CLI flags)
//! 2. **Environment variables** (`SKYBOOK_DATA_DIR`, `SKYBOOK_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "Skybook";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "SKYBOOK_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SKYBOOK_CONFIG_DIR";

/// Resolves the configuration directory.
pub fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Resolves the data directory (persisted state, caches).
pub fn data_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Resolves a file inside the configuration directory.
pub fn config_file_with_override(base_dir: Option<PathBuf>, file: &str) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(file);
        path
    })
}

/// Resolves a file inside the data directory.
pub fn data_file_with_override(base_dir: Option<PathBuf>, file: &str) -> Option<PathBuf> {
    data_dir_with_override(base_dir).map(|mut path| {
        path.push(file);
        path
    })
}
