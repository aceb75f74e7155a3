//! Repository trait for the durable short link store.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// System of record for short links, keyed by token.
///
/// Implementations must be safe to call concurrently. The access count
/// increment in particular must be a single atomic read-modify-write inside
/// the store, never a read followed by a write in the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - embedded, process-local
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link and returns it with `id` and timestamps populated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the token already exists.
    /// Returns [`AppError::Storage`] on database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Returns the destination URL for a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this token.
    async fn get_original_url(&self, short_url: &str) -> Result<String, AppError>;

    /// Atomically increments the access count and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this token.
    async fn increment_access_count(&self, short_url: &str) -> Result<(), AppError>;

    /// Replaces the destination URL and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this token.
    async fn update_original_url(&self, short_url: &str, original_url: &str)
    -> Result<(), AppError>;

    /// Removes the record. Deleting an absent token is not an error.
    async fn delete(&self, short_url: &str) -> Result<(), AppError>;

    /// Returns the full record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this token.
    async fn get_stats(&self, short_url: &str) -> Result<ShortLink, AppError>;

    /// Returns every record; empty when the store is empty.
    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError>;

    /// Checks that the store is reachable.
    async fn health_check(&self) -> bool;
}
