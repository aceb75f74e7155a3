//! Process-local cache with per-entry expiry.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Every this many writes, `set_url` sweeps all expired entries.
const SWEEP_INTERVAL: u64 = 1024;

#[derive(Debug, Clone)]
struct CachedUrl {
    original_url: String,
    expires_at: Instant,
}

/// In-memory TTL cache backed by a [`DashMap`].
///
/// Expired entries are never returned. They are dropped on the next lookup
/// of the same key, and by a full sweep every [`SWEEP_INTERVAL`] writes.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, CachedUrl>,
    writes: AtomicU64,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every expired entry.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| entry.expires_at > now);
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, short_url: &str) -> CacheResult<Option<String>> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(short_url)
            && entry.expires_at > now
        {
            return Ok(Some(entry.original_url.clone()));
        }

        self.entries
            .remove_if(short_url, |_, entry| entry.expires_at <= now);
        Ok(None)
    }

    async fn set_url(
        &self,
        short_url: &str,
        original_url: &str,
        ttl: Duration,
    ) -> CacheResult<()> {
        self.entries.insert(
            short_url.to_string(),
            CachedUrl {
                original_url: original_url.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );

        if self.writes.fetch_add(1, Ordering::Relaxed) % SWEEP_INTERVAL == SWEEP_INTERVAL - 1 {
            self.purge_expired();
        }
        Ok(())
    }

    async fn invalidate(&self, short_url: &str) -> CacheResult<()> {
        self.entries.remove(short_url);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MemoryCache::new();
        cache
            .set_url("abcd1234", "https://example.com", Duration::from_secs(60))
            .await
            .unwrap();

        let value = cache.get_url("abcd1234").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_miss() {
        let cache = MemoryCache::new();
        assert!(cache.get_url("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_absent_and_evicted() {
        let cache = MemoryCache::new();
        cache
            .set_url("abcd1234", "https://example.com", Duration::ZERO)
            .await
            .unwrap();

        assert!(cache.get_url("abcd1234").await.unwrap().is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_set_overwrites_and_refreshes() {
        let cache = MemoryCache::new();
        cache
            .set_url("abcd1234", "https://old.com", Duration::ZERO)
            .await
            .unwrap();
        cache
            .set_url("abcd1234", "https://new.com", Duration::from_secs(60))
            .await
            .unwrap();

        let value = cache.get_url("abcd1234").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://new.com"));
    }

    #[tokio::test]
    async fn test_purge_expired_keeps_live_entries() {
        let cache = MemoryCache::new();
        cache
            .set_url("expired1", "https://a.com", Duration::ZERO)
            .await
            .unwrap();
        cache
            .set_url("expired2", "https://b.com", Duration::ZERO)
            .await
            .unwrap();
        cache
            .set_url("live0001", "https://c.com", Duration::from_secs(60))
            .await
            .unwrap();

        cache.purge_expired();

        assert_eq!(cache.len(), 1);
        let value = cache.get_url("live0001").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://c.com"));
    }

    #[tokio::test]
    async fn test_writes_sweep_unvisited_expired_entries() {
        let cache = MemoryCache::new();
        for i in 0..SWEEP_INTERVAL {
            cache
                .set_url(&format!("tok{i:05}"), "https://example.com", Duration::ZERO)
                .await
                .unwrap();
        }

        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = MemoryCache::new();
        cache
            .set_url("abcd1234", "https://example.com", Duration::from_secs(60))
            .await
            .unwrap();

        cache.invalidate("abcd1234").await.unwrap();
        cache.invalidate("abcd1234").await.unwrap();

        assert!(cache.get_url("abcd1234").await.unwrap().is_none());
    }
}
