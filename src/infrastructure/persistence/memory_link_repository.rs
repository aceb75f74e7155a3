//! Embedded, process-local link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// In-memory short link store backed by a [`DashMap`].
///
/// Token uniqueness is enforced through the map's entry API and every
/// mutation holds the shard lock for its key, so increments are atomic.
/// Data lives only as long as the process.
pub struct MemoryLinkRepository {
    links: DashMap<String, ShortLink>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found() -> AppError {
    AppError::not_found("Short URL not found")
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        match self.links.entry(new_link.short_url) {
            Entry::Occupied(entry) => Err(AppError::conflict(format!(
                "Short URL '{}' already exists",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                let now = Utc::now();
                let link = ShortLink::new(
                    self.next_id.fetch_add(1, Ordering::Relaxed),
                    entry.key().clone(),
                    new_link.original_url,
                    0,
                    now,
                    now,
                );
                entry.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn get_original_url(&self, short_url: &str) -> Result<String, AppError> {
        self.links
            .get(short_url)
            .map(|link| link.original_url.clone())
            .ok_or_else(not_found)
    }

    async fn increment_access_count(&self, short_url: &str) -> Result<(), AppError> {
        let mut link = self.links.get_mut(short_url).ok_or_else(not_found)?;
        link.access_count += 1;
        link.updated_at = Utc::now();
        Ok(())
    }

    async fn update_original_url(
        &self,
        short_url: &str,
        original_url: &str,
    ) -> Result<(), AppError> {
        let mut link = self.links.get_mut(short_url).ok_or_else(not_found)?;
        link.original_url = original_url.to_string();
        link.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, short_url: &str) -> Result<(), AppError> {
        self.links.remove(short_url);
        Ok(())
    }

    async fn get_stats(&self, short_url: &str) -> Result<ShortLink, AppError> {
        self.links
            .get(short_url)
            .map(|link| link.clone())
            .ok_or_else(not_found)
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let mut links: Vec<ShortLink> = self.links.iter().map(|e| e.value().clone()).collect();
        links.sort_by_key(|link| link.id);
        Ok(links)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
