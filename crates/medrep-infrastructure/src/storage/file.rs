//! File-backed session storage
//!
//! Keeps every key in one JSON object on disk:
//!
//! ```json
//! {
//!   "user": "{\"id\":\"1\",\"email\":\"a@b.com\",\"name\":\"Ann\",\"role\":\"patient\"}",
//!   "token": "eyJhbGciOi..."
//! }
//! ```
//!
//! Writes go to a sibling temporary file that is then renamed over the
//! original, so a crash never leaves a half-written session behind.

use crate::constants::SESSION_FILE_MODE;
use crate::error_ext::ErrorContext;
use medrep_domain::error::{Error, Result};
use medrep_domain::ports::SessionStorage;
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

/// Session storage persisted as a JSON file
pub struct FileSessionStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStorage {
    /// Storage at `path`; the file and its directory are created on first write
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Location of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| Error::storage("Session file lock poisoned"))
    }

    fn read_entries(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.path).storage_context(format!(
            "Failed to read session file {}",
            self.path.display()
        ))?;

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).storage_context(format!(
            "Session file {} is corrupt",
            self.path.display()
        ))
    }

    /// Entries to modify on write; a corrupt file is replaced rather than kept
    fn read_entries_for_update(&self) -> Result<Entries> {
        match self.read_entries() {
            Ok(entries) => Ok(entries),
            Err(Error::Storage {
                source: Some(source),
                message,
            }) if source.is::<serde_json::Error>() => {
                warn!(path = %self.path.display(), error = %message, "Overwriting corrupt session file");
                Ok(Entries::new())
            }
            Err(e) => Err(e),
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).storage_context(format!(
                "Failed to create session directory {}",
                parent.display()
            ))?;
        }

        let content =
            serde_json::to_string_pretty(entries).storage_context("Failed to encode session")?;

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = open_private(&tmp_path).storage_context(format!(
                "Failed to create {}",
                tmp_path.display()
            ))?;
            file.write_all(content.as_bytes())
                .and_then(|()| file.sync_all())
                .storage_context(format!("Failed to write {}", tmp_path.display()))?;
        }

        fs::rename(&tmp_path, &self.path).storage_context(format!(
            "Failed to replace session file {}",
            self.path.display()
        ))?;
        debug!(path = %self.path.display(), keys = entries.len(), "Session file written");
        Ok(())
    }
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(SESSION_FILE_MODE)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    let _ = SESSION_FILE_MODE;
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

impl SessionStorage for FileSessionStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.guard()?;
        Ok(self.read_entries()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.guard()?;
        let mut entries = self.read_entries_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let _guard = self.guard()?;
        let mut entries = self.read_entries_for_update()?;
        if entries.remove(key).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
