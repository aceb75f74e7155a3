//! ShortLink entity: a short token mapped to its destination URL.

use chrono::{DateTime, Utc};

/// A persisted short link with usage metadata.
///
/// `short_url` holds the token and never changes after creation; only
/// `original_url`, `access_count` and `updated_at` are mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub short_url: String,
    pub original_url: String,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        short_url: String,
        original_url: String,
        access_count: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_url,
            original_url,
            access_count,
            created_at,
            updated_at,
        }
    }
}

/// Input data for inserting a new short link.
///
/// The store assigns `id`, timestamps and the zero access count.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub short_url: String,
    pub original_url: String,
}
