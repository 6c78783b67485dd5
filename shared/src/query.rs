//! # Query Cache
//!
//! Keyed store for fetched JSON data. Entries remember when they were
//! fetched and are considered fresh for `stale_time_ms` afterwards. Time is
//! passed in by the caller, so the cache itself has no clock.
//!
//! ```rust
//! use shared::query::{QueryCache, QueryKey};
//!
//! let mut cache = QueryCache::new(30_000.0);
//! let key = QueryKey::new(["devnet", "balance", "0x1"]);
//! cache.insert(key.clone(), serde_json::json!("42"), 1_000.0);
//! assert!(cache.get_fresh(&key, 2_000.0).is_some());
//! assert!(cache.get_fresh(&key, 40_000.0).is_none());
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

pub const DEFAULT_STALE_TIME_MS: f64 = 30_000.0;

/// Hierarchical cache key, e.g. `["devnet", "balance", "0xabc"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    fetched_at_ms: f64,
}

#[derive(Debug, Clone)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    stale_time_ms: f64,
}

impl QueryCache {
    pub fn new(stale_time_ms: f64) -> Self {
        Self {
            entries: HashMap::new(),
            stale_time_ms,
        }
    }

    pub fn stale_time_ms(&self) -> f64 {
        self.stale_time_ms
    }

    pub fn insert(&mut self, key: QueryKey, value: Value, now_ms: f64) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at_ms: now_ms,
            },
        );
    }

    /// Serialize and store a typed value.
    pub fn insert_as<T: Serialize>(&mut self, key: QueryKey, value: &T, now_ms: f64) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.insert(key, value, now_ms);
        Ok(())
    }

    /// Cached value regardless of age.
    pub fn get(&self, key: &QueryKey) -> Option<&Value> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Cached value if it was fetched less than the stale time ago.
    pub fn get_fresh(&self, key: &QueryKey, now_ms: f64) -> Option<&Value> {
        self.entries
            .get(key)
            .filter(|entry| now_ms - entry.fetched_at_ms < self.stale_time_ms)
            .map(|entry| &entry.value)
    }

    /// Fresh value deserialized into `T`. Entries of the wrong shape read as a miss.
    pub fn get_fresh_as<T: DeserializeOwned>(&self, key: &QueryKey, now_ms: f64) -> Option<T> {
        self.get_fresh(key, now_ms)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn invalidate(&mut self, key: &QueryKey) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_TIME_MS)
    }
}
