// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles transient application state that should persist across
//! sessions but is not user-configurable (unlike preferences in
//! `settings.toml`): the last location (so a shared or restored location
//! lands on the same screen and tab) and the last directory used by the
//! image picker.
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from()`/`save_to()` with explicit base directory override
//! 2. Set `SKYBOOK_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last location shown, as a `path?query` string.
    /// Restored at startup when no `--url` is given.
    #[serde(default)]
    pub last_location: Option<String>,

    /// Last directory used by the image picker.
    /// Used as the initial directory of the file dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails,
    /// returns default state with a warning message key suitable for a
    /// notification.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state, with an optional base directory override.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Returns an optional warning message key if save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state, with an optional base directory override.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    /// Returns the full path to the state file with optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::data_file_with_override(base_dir, STATE_FILE)
    }

    /// Sets the last open directory from a file path.
    ///
    /// Extracts the parent directory from the given path. If the path has no
    /// parent (e.g., root path), the directory is not updated.
    pub fn set_last_open_directory_from_file(&mut self, file_path: &std::path::Path) {
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                self.last_open_directory = Some(parent.to_path_buf());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_is_empty() {
        let state = AppState::default();
        assert!(state.last_location.is_none());
        assert!(state.last_open_directory.is_none());
    }

    #[test]
    fn round_trip_preserves_state() {
        let dir = tempdir().expect("tempdir");
        let state = AppState {
            last_location: Some("/accounts/auth/?tab=register".to_string()),
            last_open_directory: Some(PathBuf::from("/home/user/pictures")),
        };

        assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());
        let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn load_missing_file_returns_default() {
        let dir = tempdir().expect("tempdir");
        let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded, AppState::default());
    }

    #[test]
    fn load_corrupt_file_warns_and_defaults() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(STATE_FILE), b"not cbor at all").expect("write");

        let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(loaded, AppState::default());
        assert_eq!(
            warning.as_deref(),
            Some("notification-state-parse-error")
        );
    }

    #[test]
    fn set_last_open_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(std::path::Path::new(
            "/home/user/pictures/car.png",
        ));
        assert_eq!(
            state.last_open_directory,
            Some(PathBuf::from("/home/user/pictures"))
        );
    }

    #[test]
    fn set_last_open_directory_ignores_bare_file_name() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(std::path::Path::new("car.png"));
        assert!(state.last_open_directory.is_none());
    }
}
