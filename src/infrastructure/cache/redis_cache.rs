//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

/// Redis cache for short link lookups.
///
/// Uses `ConnectionManager` for automatic reconnection and cheap clones.
/// Keys are namespaced as `shortlink:<token>`.
pub struct RedisCache {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "shortlink:".to_string(),
        })
    }

    fn build_key(&self, short_url: &str) -> String {
        format!("{}{}", self.key_prefix, short_url)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, short_url: &str) -> CacheResult<Option<String>> {
        let key = self.build_key(short_url);
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(|e| CacheError::Operation(format!("GET {}: {}", key, e)))?;

        debug!(key, hit = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn set_url(
        &self,
        short_url: &str,
        original_url: &str,
        ttl: Duration,
    ) -> CacheResult<()> {
        let key = self.build_key(short_url);
        let mut conn = self.client.clone();
        // SET EX rejects a zero expiry.
        let ttl_seconds = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(&key, original_url, ttl_seconds)
            .await
            .map_err(|e| CacheError::Operation(format!("SET {}: {}", key, e)))?;

        debug!(key, ttl_seconds, "Redis SET");
        Ok(())
    }

    async fn invalidate(&self, short_url: &str) -> CacheResult<()> {
        let key = self.build_key(short_url);
        let mut conn = self.client.clone();

        let deleted = conn
            .del::<_, i32>(&key)
            .await
            .map_err(|e| CacheError::Operation(format!("DEL {}: {}", key, e)))?;

        debug!(key, deleted, "Redis DEL");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
