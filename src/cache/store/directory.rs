use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::{CacheStore, Clock, StoreError, StoredEntry, SystemClock};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoreConfig {
    pub version: String,
    pub key_hash: String,
}

impl StoreConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            key_hash: "sha256".into(),
        }
    }
}

/// Store keeping one JSON file per key under `root/entries`.
///
/// File names are the hex SHA-256 of the key. Every write goes to its own temp
/// file that is synced and renamed into place, so a reader never sees a
/// partial entry, even with concurrent writers of one key.
///
/// Expired entries are removed when read, on [`open`](Self::open_with_clock),
/// and by [`CacheStore::prune`].
#[derive(Debug)]
pub struct DirectoryStore<C = SystemClock> {
    root: PathBuf,
    clock: C,
}

impl DirectoryStore<SystemClock> {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::open_with_clock(root, SystemClock)
    }
}

impl<C: Clock> DirectoryStore<C> {
    /// Opens the store at `root`, creating it when absent. An existing store
    /// must carry the same [`StoreConfig`].
    pub fn open_with_clock(root: impl Into<PathBuf>, clock: C) -> Result<Self, StoreError> {
        let root = root.into();
        let config = StoreConfig::v0();
        let config_path = root.join("store.json");

        if config_path.exists() {
            let f = fs::File::open(&config_path)?;
            let existing: StoreConfig = serde_json::from_reader(f)?;
            if existing != config {
                warn!(root = %root.display(), "store configuration mismatch");
                return Err(StoreError::ConfigMismatch(root));
            }
            fs::create_dir_all(root.join("entries"))?;
        } else {
            fs::create_dir_all(root.join("entries"))?;
            write_atomic(&config_path, &serde_json::to_vec_pretty(&config)?)?;
        }

        let store = Self { root, clock };
        let pruned = store.prune()?;
        debug!(root = %store.root.display(), pruned, "directory store opened");
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        self.root
            .join("entries")
            .join(format!("{}.json", hex::encode(digest)))
    }

    fn read_entry(&self, path: &Path) -> Result<Option<StoredEntry>, StoreError> {
        match fs::File::open(path) {
            Ok(f) => Ok(Some(serde_json::from_reader(f)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl<C: Clock> CacheStore for DirectoryStore<C> {
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        let entry = StoredEntry::new(key, value, ttl, self.clock.now())?;
        write_atomic(&self.entry_path(key), &serde_json::to_vec(&entry)?)
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.entry_path(key);
        let Some(entry) = self.read_entry(&path)? else {
            return Ok(None);
        };

        if entry.key != key {
            warn!(expected = key, found = %entry.key, "directory store key mismatch");
            return Err(StoreError::KeyMismatch {
                expected: key.to_string(),
                found: entry.key,
            });
        }

        if entry.is_expired(self.clock.now()) {
            debug!(key, "directory store entry expired");
            remove_if_present(&path)?;
            return Ok(None);
        }

        Ok(Some(entry.value))
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let path = self.entry_path(key);
        let Some(entry) = self.read_entry(&path)? else {
            return Ok(false);
        };
        remove_if_present(&path)?;
        Ok(!entry.is_expired(self.clock.now()))
    }

    fn prune(&self) -> Result<usize, StoreError> {
        let now = self.clock.now();
        let mut pruned = 0;

        for dir_entry in fs::read_dir(self.root.join("entries"))? {
            let path = dir_entry?.path();
            // In-flight temp files belong to their writers.
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            let entry = match self.read_entry(&path) {
                Ok(Some(entry)) => entry,
                Ok(None) => continue,
                Err(StoreError::Serialization(e)) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
                Err(e) => return Err(e),
            };
            if entry.is_expired(now) {
                remove_if_present(&path)?;
                pruned += 1;
            }
        }

        Ok(pruned)
    }

    fn close(self) -> Result<(), StoreError> {
        debug!(root = %self.root.display(), "directory store closed");
        Ok(())
    }
}

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique per write: pid plus a process-wide counter.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!("{file_name}.{}.{n}.tmp", std::process::id()))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let temp_path = temp_path_for(path);
    let written = write_and_rename(&temp_path, path, bytes);
    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn write_and_rename(temp_path: &Path, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let mut f = fs::File::create(temp_path)?;
    f.write_all(bytes)?;
    f.sync_all()?;
    drop(f);
    fs::rename(temp_path, path)?;
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}
