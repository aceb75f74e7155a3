//! Short link lifecycle and the read-through cache policy.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheError, CacheService};
use crate::utils::token_generator::generate_token;
use crate::utils::url_validator::validate_original_url;

/// Tunables for [`LinkService`].
#[derive(Debug, Clone)]
pub struct LinkServiceSettings {
    /// TTL applied to every cache write.
    pub cache_ttl: Duration,
    /// Deadline for a single store call; expiry surfaces as [`AppError::Storage`].
    pub store_timeout: Duration,
    /// Deadline for a single cache call; expiry is treated like a cache error.
    pub cache_timeout: Duration,
    /// Tokens tried before a creation fails with [`AppError::Conflict`].
    pub max_token_attempts: u32,
}

impl Default for LinkServiceSettings {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(24 * 60 * 60),
            store_timeout: Duration::from_secs(5),
            cache_timeout: Duration::from_millis(250),
            max_token_attempts: 5,
        }
    }
}

/// Orchestrates the durable store and the cache for every short link operation.
///
/// The store is the single source of truth. The cache only ever holds the
/// `token -> original URL` projection, is written after the store, and its
/// failures never fail a request. Existence checks that gate a mutation always
/// go to the store.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
    settings: LinkServiceSettings,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
        settings: LinkServiceSettings,
    ) -> Self {
        Self {
            repository,
            cache,
            settings,
        }
    }

    /// Validates the URL, stores a new link under a fresh token and warms the cache.
    ///
    /// A token collision triggers a new token, up to
    /// [`LinkServiceSettings::max_token_attempts`] attempts in total.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is empty or malformed
    /// - [`AppError::Conflict`] if every generated token collided
    /// - [`AppError::Storage`] on store failure or timeout
    pub async fn create_short_link(&self, original_url: &str) -> Result<ShortLink, AppError> {
        validate_original_url(original_url)?;

        let attempts = self.settings.max_token_attempts.max(1);
        let mut attempt = 1;

        let link = loop {
            let new_link = NewShortLink {
                short_url: generate_token(),
                original_url: original_url.to_string(),
            };

            match self
                .with_store_deadline("create", self.repository.create(new_link))
                .await
            {
                Ok(link) => break link,
                Err(AppError::Conflict(reason)) if attempt < attempts => {
                    warn!(attempt, reason, "Short URL collision, regenerating token");
                    attempt += 1;
                }
                Err(AppError::Conflict(reason)) => {
                    warn!(attempts, reason, "Short URL collisions exhausted");
                    return Err(AppError::conflict("Failed to create short link"));
                }
                Err(e) => return Err(e),
            }
        };

        info!(short_url = %link.short_url, "Short link created");
        self.cache_set(&link.short_url, &link.original_url).await;

        Ok(link)
    }

    /// Resolves a token to its destination URL and counts the access.
    ///
    /// 1. Cache hit: count the access in the store, return the cached URL.
    /// 2. Cache miss or cache error: read the store, repopulate the cache,
    ///    count the access, return the URL.
    ///
    /// Every resolution costs one store write, so caching never undercounts.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the token does not exist
    /// - [`AppError::Storage`] if the store read or the increment fails
    pub async fn resolve(&self, short_url: &str) -> Result<String, AppError> {
        if let Some(cached) = self.cache_get(short_url).await {
            match self.increment(short_url).await {
                Ok(()) => return Ok(cached),
                Err(e @ AppError::NotFound(_)) => {
                    // The row is gone but the cache still maps it.
                    self.cache_invalidate(short_url).await;
                    return Err(e);
                }
                Err(e) => return Err(e),
            }
        }

        let original_url = self
            .with_store_deadline(
                "get_original_url",
                self.repository.get_original_url(short_url),
            )
            .await?;

        self.cache_set(short_url, &original_url).await;
        self.increment(short_url).await?;

        Ok(original_url)
    }

    /// Points an existing token at a new destination and overwrites the cache entry.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the token does not exist
    /// - [`AppError::Validation`] if the new URL is malformed
    /// - [`AppError::Storage`] on store failure or timeout
    pub async fn update_original_url(
        &self,
        short_url: &str,
        original_url: &str,
    ) -> Result<(), AppError> {
        self.ensure_exists(short_url).await?;
        validate_original_url(original_url)?;

        self.with_store_deadline(
            "update_original_url",
            self.repository.update_original_url(short_url, original_url),
        )
        .await?;

        info!(short_url, "Short link updated");
        self.cache_set(short_url, original_url).await;

        Ok(())
    }

    /// Deletes an existing link and evicts its cache entry.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the token does not exist
    /// - [`AppError::Storage`] on store failure or timeout
    pub async fn delete_short_link(&self, short_url: &str) -> Result<(), AppError> {
        self.ensure_exists(short_url).await?;

        self.with_store_deadline("delete", self.repository.delete(short_url))
            .await?;

        info!(short_url, "Short link deleted");
        self.cache_invalidate(short_url).await;

        Ok(())
    }

    /// Returns the full record. Never consults the cache.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the token does not exist
    /// - [`AppError::Storage`] on store failure or timeout
    pub async fn get_stats(&self, short_url: &str) -> Result<ShortLink, AppError> {
        self.with_store_deadline("get_stats", self.repository.get_stats(short_url))
            .await
    }

    /// Returns every stored link. Never consults the cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on store failure or timeout.
    pub async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        self.with_store_deadline("list_all", self.repository.list_all())
            .await
    }

    /// Reports store and cache reachability as `(store_ok, cache_ok)`.
    pub async fn health_check(&self) -> (bool, bool) {
        let store_ok = timeout(self.settings.store_timeout, self.repository.health_check())
            .await
            .unwrap_or(false);
        let cache_ok = timeout(self.settings.cache_timeout, self.cache.health_check())
            .await
            .unwrap_or(false);
        (store_ok, cache_ok)
    }

    async fn ensure_exists(&self, short_url: &str) -> Result<(), AppError> {
        self.with_store_deadline(
            "get_original_url",
            self.repository.get_original_url(short_url),
        )
        .await
        .map(|_| ())
    }

    async fn increment(&self, short_url: &str) -> Result<(), AppError> {
        self.with_store_deadline(
            "increment_access_count",
            self.repository.increment_access_count(short_url),
        )
        .await
    }

    async fn with_store_deadline<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        match timeout(self.settings.store_timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(
                    operation,
                    timeout_ms = self.settings.store_timeout.as_millis() as u64,
                    "Store call timed out"
                );
                Err(AppError::storage(format!("Store operation '{operation}' timed out")))
            }
        }
    }

    async fn with_cache_deadline<T>(
        &self,
        call: impl Future<Output = Result<T, CacheError>>,
    ) -> Result<T, CacheError> {
        timeout(self.settings.cache_timeout, call)
            .await
            .unwrap_or(Err(CacheError::Timeout(self.settings.cache_timeout)))
    }

    /// Collapses the cache's hit/miss/error outcome to hit or no-hit.
    async fn cache_get(&self, short_url: &str) -> Option<String> {
        match self.with_cache_deadline(self.cache.get_url(short_url)).await {
            Ok(Some(url)) if !url.is_empty() => {
                debug!(short_url, "Cache HIT");
                metrics::counter!("shortlink_cache_lookups_total", "result" => "hit").increment(1);
                Some(url)
            }
            Ok(_) => {
                debug!(short_url, "Cache MISS");
                metrics::counter!("shortlink_cache_lookups_total", "result" => "miss")
                    .increment(1);
                None
            }
            Err(e) => {
                warn!(short_url, error = %e, "Cache lookup failed, falling back to store");
                metrics::counter!("shortlink_cache_lookups_total", "result" => "error")
                    .increment(1);
                None
            }
        }
    }

    async fn cache_set(&self, short_url: &str, original_url: &str) {
        let write = self
            .cache
            .set_url(short_url, original_url, self.settings.cache_ttl);

        if let Err(e) = self.with_cache_deadline(write).await {
            warn!(short_url, error = %e, "Failed to write cache entry");
            metrics::counter!("shortlink_cache_write_failures_total", "op" => "set").increment(1);
        }
    }

    async fn cache_invalidate(&self, short_url: &str) {
        if let Err(e) = self
            .with_cache_deadline(self.cache.invalidate(short_url))
            .await
        {
            warn!(short_url, error = %e, "Failed to invalidate cache entry");
            metrics::counter!("shortlink_cache_write_failures_total", "op" => "invalidate")
                .increment(1);
        }
    }
}
