//! Session storage configuration types

use crate::constants::{DEFAULT_CONFIG_DIR, SESSION_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the session is persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory; the session ends with the process
    Memory,
    /// JSON file on disk
    #[default]
    File,
}

/// Session storage configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend
    pub backend: StorageBackend,

    /// Session file path; defaults to the user data directory
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Session file location, explicit or default
    pub fn session_file(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_session_file)
    }
}

/// `<data dir>/medrep/session.json`, or `./session.json` without a data dir
pub fn default_session_file() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(SESSION_FILE_NAME),
        |dir| dir.join(DEFAULT_CONFIG_DIR).join(SESSION_FILE_NAME),
    )
}
