//! DTOs for short link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request body for `POST /shortlink` and `PUT /{token}`.
///
/// ```json
/// { "original_url": "https://example.com" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct ShortLinkPayload {
    /// Destination URL; full format checks happen in the link service.
    #[serde(default, alias = "originalURL")]
    #[validate(length(min = 1, message = "original URL is required"))]
    pub original_url: String,
}

/// JSON representation of a short link record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShortLink> for ShortLinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_url: link.short_url,
            access_count: link.access_count,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}
