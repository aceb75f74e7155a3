//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod redirect;
pub mod stats;

pub use health::health_handler;
pub use links::{create_handler, delete_handler, update_handler};
pub use redirect::redirect_handler;
pub use stats::{list_handler, stats_handler};

use crate::error::AppError;

/// Rejects an empty or blank token path segment.
pub(crate) fn require_token(token: &str) -> Result<&str, AppError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::bad_request("Short URL is required"));
    }
    Ok(token)
}
