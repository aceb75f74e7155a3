//! Cache service trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),

    #[error("Cache operation error: {0}")]
    Operation(String),

    #[error("Cache operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Best-effort cache of the `token -> original URL` projection.
///
/// Implementations report failures honestly; it is the caller's job to
/// treat an error as a miss (see [`crate::application::services::LinkService`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::MemoryCache`] - process-local cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Looks up the original URL for a token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    /// - `Err(_)` when the backend could not be queried
    async fn get_url(&self, short_url: &str) -> CacheResult<Option<String>>;

    /// Stores a mapping that expires after `ttl`.
    async fn set_url(&self, short_url: &str, original_url: &str, ttl: Duration)
    -> CacheResult<()>;

    /// Removes a mapping. Removing an absent key is not an error.
    async fn invalidate(&self, short_url: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
