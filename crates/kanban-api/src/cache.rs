//! # Read Cache
//!
//! A thin typed wrapper over a moka future cache, used by the services to
//! memoize list/detail reads. Every write path invalidates the whole
//! cache for its resource — the read patterns here are small enough that
//! coarse invalidation beats tracking which keys a write touched.

use moka::future::Cache;
use std::time::Duration;

use crate::config::CacheConfig;

/// TTL-bounded read cache keyed by strings.
#[derive(Clone)]
pub struct ReadCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    inner: Cache<String, V>,
}

impl<V> ReadCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Build a cache from the configured capacity and TTL.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(config.capacity)
                .time_to_live(Duration::from_secs(config.ttl_seconds))
                .build(),
        }
    }

    /// Cached value for `key`, if present and fresh.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.inner.get(key).await
    }

    /// Store a value under `key`.
    pub async fn insert(&self, key: String, value: V) {
        self.inner.insert(key, value).await;
    }

    /// Drop every entry.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CacheConfig {
        CacheConfig {
            capacity: 16,
            ttl_seconds: 60,
        }
    }

    #[tokio::test]
    async fn test_insert_get_invalidate() {
        let cache: ReadCache<String> = ReadCache::new(&config());
        cache.insert("k".to_string(), "v".to_string()).await;
        assert_eq!(cache.get("k").await, Some("v".to_string()));

        cache.invalidate_all();
        assert_eq!(cache.get("k").await, None);
    }

    #[tokio::test]
    async fn test_miss_is_none() {
        let cache: ReadCache<u32> = ReadCache::new(&config());
        assert_eq!(cache.get("absent").await, None);
    }
}
