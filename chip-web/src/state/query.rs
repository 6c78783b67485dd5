//! Shared query cache for data fetched from the fullnode

use std::future::Future;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::query::{QueryCache, QueryKey};

use crate::error::Result;

/// Milliseconds since the epoch, from the browser clock.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: StoredValue<QueryCache>,
    clock: fn() -> f64,
}

impl QueryClient {
    /// Client timed by the browser clock.
    pub fn new(stale_time_ms: f64) -> Self {
        Self::with_clock(stale_time_ms, now_ms)
    }

    /// Client timed by `clock`, in milliseconds.
    pub fn with_clock(stale_time_ms: f64, clock: fn() -> f64) -> Self {
        Self {
            cache: StoredValue::new(QueryCache::new(stale_time_ms)),
            clock,
        }
    }

    /// Fresh cached value for `key` at time `now`.
    pub fn cached<T: DeserializeOwned>(&self, key: &QueryKey, now: f64) -> Option<T> {
        self.cache.with_value(|cache| cache.get_fresh_as(key, now))
    }

    pub fn store<T: Serialize>(&self, key: QueryKey, value: &T, now: f64) {
        self.cache.update_value(|cache| {
            if let Err(e) = cache.insert_as(key.clone(), value, now) {
                log::warn!("Not caching {}: {}", key, e);
            }
        });
    }

    /// Cached value if fresh, otherwise run `fetcher` and cache what it returns.
    ///
    /// Errors from `fetcher` are returned and nothing is cached.
    pub async fn fetch_query<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(hit) = self.cached(&key, (self.clock)()) {
            log::debug!("Query cache hit: {}", key);
            return Ok(hit);
        }

        let value = fetcher().await?;
        self.store(key, &value, (self.clock)());
        Ok(value)
    }

    /// Drop the entry for `key`. Returns whether one existed.
    pub fn invalidate(&self, key: &QueryKey) -> bool {
        self.cache
            .try_update_value(|cache| cache.invalidate(key))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.cache.with_value(QueryCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cache key for the SUI balance of `address` on `network`.
pub fn balance_key(network: &str, address: &str) -> QueryKey {
    QueryKey::new([network, "balance", address])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WebError;
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_store_and_read_back() {
        Owner::new().with(|| {
            let client = QueryClient::new(1_000.0);
            let key = balance_key("devnet", "0x1");
            client.store(key.clone(), &"42".to_string(), 0.0);

            assert_eq!(client.cached::<String>(&key, 500.0), Some("42".to_string()));
            assert_eq!(client.cached::<String>(&key, 1_500.0), None);
            assert_eq!(client.len(), 1);
        });
    }

    #[test]
    fn test_invalidate_one_network() {
        Owner::new().with(|| {
            let client = QueryClient::new(1_000.0);
            client.store(balance_key("devnet", "0x1"), &1u64, 0.0);
            client.store(balance_key("mainnet", "0x1"), &2u64, 0.0);

            assert!(client.invalidate(&balance_key("devnet", "0x1")));
            assert!(!client.invalidate(&balance_key("devnet", "0x1")));
            assert_eq!(client.cached::<u64>(&balance_key("mainnet", "0x1"), 1.0), Some(2));
            assert!(!client.is_empty());
        });
    }

    fn fixed_clock() -> f64 {
        10_000.0
    }

    #[test]
    fn test_fetch_query_serves_fresh_hit_without_fetching() {
        Owner::new().with(|| {
            let client = QueryClient::with_clock(1_000.0, fixed_clock);
            let key = balance_key("devnet", "0x1");
            client.store(key.clone(), &7u64, 9_500.0);

            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let value = block_on(client.fetch_query(key, || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(99u64)
            }));

            assert_eq!(value, Ok(7));
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        });
    }

    #[test]
    fn test_fetch_query_stores_result_on_miss() {
        Owner::new().with(|| {
            let client = QueryClient::with_clock(1_000.0, fixed_clock);
            let key = balance_key("devnet", "0x1");
            client.store(key.clone(), &7u64, 0.0);

            let value = block_on(client.fetch_query(key.clone(), || async { Ok(42u64) }));

            assert_eq!(value, Ok(42));
            assert_eq!(client.cached::<u64>(&key, fixed_clock()), Some(42));
        });
    }

    #[test]
    fn test_fetch_query_does_not_cache_errors() {
        Owner::new().with(|| {
            let client = QueryClient::with_clock(1_000.0, fixed_clock);
            let key = balance_key("devnet", "0x1");

            let failed: Result<u64> = block_on(client.fetch_query(key.clone(), || async {
                Err(WebError::Rpc("Invalid params (code -32602)".to_string()))
            }));

            assert_eq!(failed, Err(WebError::Rpc("Invalid params (code -32602)".to_string())));
            assert!(client.is_empty());

            let retried = block_on(client.fetch_query(key, || async { Ok(5u64) }));
            assert_eq!(retried, Ok(5));
        });
    }
}
