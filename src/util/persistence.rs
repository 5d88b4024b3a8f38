//! Local key-value persistence: two independently keyed JSON entries, one
//! for the theme preference and one for the saved history.
//!
//! Loads are best-effort: a missing or corrupt entry reads as absent and is
//! logged, never surfaced as an error. Concurrent processes sharing the same
//! store are last-writer-wins.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::{History, Theme};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "EcomPricePlanner";
const APP_NAME: &str = "EcomPricePlanner";

const THEME_FILE: &str = "theme.json";
const HISTORY_FILE: &str = "history.json";

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

/// File-backed store for the two persisted keys.
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Store rooted at the platform config directory.
    pub fn open() -> Result<Self, PersistSaveError> {
        let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .ok_or(PersistSaveError::StorageUnavailable)?;
        Ok(Self {
            root: dirs.config_dir().to_path_buf(),
        })
    }

    /// Store rooted at an explicit directory. Used by tests and embedders
    /// that manage their own data location.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn load_theme(&self) -> Option<Theme> {
        self.load_entry(THEME_FILE)
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), PersistSaveError> {
        self.save_entry(THEME_FILE, &theme)
    }

    pub fn load_history(&self) -> Option<History> {
        self.load_entry(HISTORY_FILE)
    }

    pub fn save_history(&self, history: &History) -> Result<(), PersistSaveError> {
        self.save_entry(HISTORY_FILE, history)
    }

    fn load_entry<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.root.join(file);
        if !path.exists() {
            return None;
        }
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) => {
                warn!("failed to read {}: {err}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&data) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("failed to parse {}: {err}", path.display());
                None
            }
        }
    }

    fn save_entry<T: Serialize>(&self, file: &str, value: &T) -> Result<(), PersistSaveError> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(file);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)?;
        debug!("saved {}", path.display());
        Ok(())
    }
}
