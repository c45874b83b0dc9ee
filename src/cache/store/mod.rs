//! Key/value stores with per-entry time-to-live.

pub mod directory;
pub mod memory;

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use directory::{DirectoryStore, StoreConfig};
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("TTL out of range: {0:?}")]
    InvalidTtl(Duration),
    #[error("Entry for key {expected} holds key {found}")]
    KeyMismatch { expected: String, found: String },
    #[error("Store at {0} was created with a different configuration")]
    ConfigMismatch(PathBuf),
    #[error("Store lock poisoned")]
    Poisoned,
}

/// A string store whose entries may expire.
///
/// A zero `ttl` stores the entry without expiry. Expired entries read as
/// absent.
pub trait CacheStore {
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;

    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Returns whether a live entry was removed.
    fn remove(&self, key: &str) -> Result<bool, StoreError>;

    /// Drops every expired entry and returns how many were dropped.
    fn prune(&self) -> Result<usize, StoreError>;

    /// Releases the store. The handle cannot be used afterwards.
    fn close(self) -> Result<(), StoreError>
    where
        Self: Sized;
}

/// Source of the current time for expiry decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A stored value and its expiry instant. `None` never expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub key: String,
    pub value: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl StoredEntry {
    pub(crate) fn new(key: &str, value: &str, ttl: Duration, now: DateTime<Utc>) -> Result<Self, StoreError> {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            let ttl_delta = chrono::Duration::from_std(ttl).map_err(|_| StoreError::InvalidTtl(ttl))?;
            Some(now.checked_add_signed(ttl_delta).ok_or(StoreError::InvalidTtl(ttl))?)
        };

        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
            expires_at,
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}
