// SPDX-License-Identifier: MPL-2.0
//! Session-to-session UI memory stored as CBOR.
//!
//! Unlike `settings.toml`, nothing here is a user preference: it only records
//! where the user last browsed for and saved images, so the native dialogs
//! open in a sensible place.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory of the last downloaded compressed image.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,

    /// Directory of the last image picked through the browse dialog.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads the state from the default location.
    ///
    /// Never fails: a missing file yields the default state, an unreadable
    /// one yields the default state plus an i18n warning key.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the state from `base_dir` (or the default data dir).
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), "cannot open state file: {err}");
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                );
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), "cannot parse state file: {err}");
                (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                )
            }
        }
    }

    /// Saves the state to the default location.
    ///
    /// Returns an i18n warning key when the write failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the state to `base_dir` (or the default data dir), creating
    /// parent directories as needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path(base_dir) else {
            return Some("notification-state-write-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(dir = %parent.display(), "cannot create data dir: {err}");
                return Some("notification-state-write-error".to_string());
            }
        }

        let written = fs::File::create(&path)
            .map_err(|err| err.to_string())
            .and_then(|file| {
                ciborium::into_writer(self, BufWriter::new(file)).map_err(|err| err.to_string())
            });

        match written {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), "cannot write state file: {err}");
                Some("notification-state-write-error".to_string())
            }
        }
    }

    fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the parent directory of a saved file.
    pub fn remember_save_location(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }

    /// Remembers the parent directory of an opened file.
    pub fn remember_open_location(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn remember_save_location_extracts_parent() {
        let mut state = AppState::default();
        state.remember_save_location(Path::new("/home/user/images/photo.jpg"));
        assert_eq!(
            state.last_save_directory,
            Some(PathBuf::from("/home/user/images"))
        );
    }

    #[test]
    fn remember_open_location_ignores_root() {
        let mut state = AppState::default();
        state.remember_open_location(Path::new("/"));
        assert!(state.last_open_directory.is_none());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().join("nested");

        let original = AppState {
            last_save_directory: Some(PathBuf::from("/test/save")),
            last_open_directory: Some(PathBuf::from("/test/open")),
        };

        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }
}
