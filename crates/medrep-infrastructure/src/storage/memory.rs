//! In-memory session storage
//!
//! Values live only as long as the process. Used when the storage backend is
//! configured as `memory` and in tests.

use dashmap::DashMap;
use medrep_domain::error::Result;
use medrep_domain::ports::SessionStorage;
use std::sync::Arc;

/// Session storage backed by a concurrent map
#[derive(Clone, Default)]
pub struct MemorySessionStorage {
    entries: Arc<DashMap<String, String>>,
}

impl MemorySessionStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|value| value.value().clone()))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
