use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use tracing::debug;

use super::{CacheStore, Clock, StoreError, StoredEntry, SystemClock};

/// In-process store. Safe to share between threads.
///
/// Every write sweeps out expired entries, so keys that are never read again
/// do not accumulate.
pub struct MemoryStore {
    entries: Mutex<HashMap<String, StoredEntry>>,
    clock: Box<dyn Clock>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock: Box::new(clock),
        }
    }

    /// Number of stored entries. Expired ones count until the next write, read of
    /// that key, or prune.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.entries.lock().map_err(|_| StoreError::Poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for MemoryStore {
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        let now = self.clock.now();
        let entry = StoredEntry::new(key, value, ttl, now)?;
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.retain(|_, existing| !existing.is_expired(now));
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;

        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                debug!(key, "memory store entry expired");
                entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.remove(key).is_some_and(|entry| !entry.is_expired(now)))
    }

    fn prune(&self) -> Result<usize, StoreError> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        Ok(before - entries.len())
    }

    fn close(self) -> Result<(), StoreError> {
        let entries = self.entries.into_inner().map_err(|_| StoreError::Poisoned)?;
        debug!(entries = entries.len(), "memory store closed");
        Ok(())
    }
}
