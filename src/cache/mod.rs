//! Cache glue: per-type expiration, TTL stores, and an owned client handle.

pub mod client;
pub mod expiration;
pub mod store;

pub use client::{CacheClient, CacheError, ClientConfig, SaveOutcome, ZeroTtlPolicy};
pub use expiration::{expiration_time, Expiration};
pub use store::{CacheStore, Clock, DirectoryStore, MemoryStore, StoreConfig, StoreError, StoredEntry, SystemClock};
