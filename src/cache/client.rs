use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::cache::expiration::{expiration_time, Expiration};
use crate::cache::store::{CacheStore, StoreError};
use crate::flat::{self, FlatError};
use crate::inspect::Composite;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Flat serialization error: {0}")]
    Flat(#[from] FlatError),
}

/// What to do with a type that declares no expiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTtlPolicy {
    /// Store without expiry.
    #[default]
    Persist,
    /// Do not write at all.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    pub zero_ttl: ZeroTtlPolicy,
}

/// Outcome of [`CacheClient::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Stored { ttl: Duration },
    Skipped,
}

/// Owned cache handle: flat-serializes composites into a store, using each
/// type's declared expiration.
///
/// Opened explicitly at startup and closed explicitly at shutdown.
#[derive(Debug)]
pub struct CacheClient<S> {
    store: S,
    config: ClientConfig,
}

impl<S: CacheStore> CacheClient<S> {
    pub fn open(store: S) -> Self {
        Self::open_with_config(store, ClientConfig::default())
    }

    pub fn open_with_config(store: S, config: ClientConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save<T: Composite + Expiration>(&self, key: &str, value: &T) -> Result<SaveOutcome, CacheError> {
        let ttl = expiration_time::<T>();
        if ttl.is_zero() && self.config.zero_ttl == ZeroTtlPolicy::Skip {
            debug!(key, "no expiration declared; skipping cache write");
            return Ok(SaveOutcome::Skipped);
        }

        let text = flat::serialize(value)?;
        self.store.set(key, &text, ttl)?;
        debug!(key, ttl_ms = ttl.as_millis() as u64, "cache entry saved");
        Ok(SaveOutcome::Stored { ttl })
    }

    /// Reads and parses the entry for `key`; `None` when absent or expired.
    pub fn load<T: Composite + Default>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(text) => {
                debug!(key, "cache hit");
                Ok(Some(flat::deserialize(&text)?))
            }
            None => {
                debug!(key, "cache miss");
                Ok(None)
            }
        }
    }

    pub fn invalidate(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.store.remove(key)?)
    }

    /// Drops expired entries from the store.
    pub fn prune(&self) -> Result<usize, CacheError> {
        let pruned = self.store.prune()?;
        debug!(pruned, "cache pruned");
        Ok(pruned)
    }

    pub fn close(self) -> Result<(), CacheError> {
        self.store.close()?;
        Ok(())
    }
}
