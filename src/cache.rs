//! Read-through cache for raw API response bodies
//!
//! The fetcher consults the cache before going to the network and writes
//! the raw body back on a miss. The backend is an injected capability so
//! tests can stub hit/miss behavior; the default [`MemoryCache`] is an
//! in-memory store with TTL.

use crate::config::CacheConfig;
use async_trait::async_trait;
use moka::future::Cache as MokaCache;
use std::time::Duration;

/// Fixed key under which the owned-games response body is cached
pub const STEAM_CACHE_KEY: &str = "steam_cache";

/// Key/value store for serialized response bodies.
///
/// Entry lifetime is owned by the backend; the client only reads and
/// conditionally writes. Two concurrent misses may both fetch and both
/// write, last writer wins — the data is idempotently re-derivable.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Look up a cached body
    async fn get(&self, key: &str) -> Option<String>;

    /// Store a body under the given key until the backend expires it
    async fn put(&self, key: &str, body: String);
}

/// In-memory response cache with TTL
pub struct MemoryCache {
    entries: MokaCache<String, String>,
}

impl MemoryCache {
    /// Create a cache whose entries live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, CacheConfig::default().max_capacity)
    }

    /// Create a cache with an explicit entry capacity
    pub fn with_capacity(ttl: Duration, max_capacity: u64) -> Self {
        Self {
            entries: MokaCache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Create a cache from the configuration block
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_capacity(config.ttl(), config.max_capacity)
    }

    /// Number of live entries
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

#[async_trait]
impl ResponseCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).await
    }

    async fn put(&self, key: &str, body: String) {
        self.entries.insert(key.to_string(), body).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_basic_operations() {
        let cache = MemoryCache::new(Duration::from_secs(60));

        assert!(cache.get(STEAM_CACHE_KEY).await.is_none());

        cache.put(STEAM_CACHE_KEY, "{\"response\":{}}".to_string()).await;
        assert_eq!(
            cache.get(STEAM_CACHE_KEY).await.as_deref(),
            Some("{\"response\":{}}")
        );
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_cache_entries_expire() {
        let cache = MemoryCache::new(Duration::from_millis(50));

        cache.put(STEAM_CACHE_KEY, "body".to_string()).await;
        assert!(cache.get(STEAM_CACHE_KEY).await.is_some());

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(cache.get(STEAM_CACHE_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_from_config() {
        let config = CacheConfig {
            enabled: true,
            ttl_seconds: 60,
            max_capacity: 4,
        };
        let cache = MemoryCache::from_config(&config);
        cache.put("a", "1".to_string()).await;
        assert_eq!(cache.entry_count().await, 1);
    }
}
