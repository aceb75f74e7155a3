//! Handlers for read-only statistics endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use super::require_token;
use crate::api::dto::envelope::ApiResponse;
use crate::api::dto::short_link::ShortLinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full record for a token, including its access count.
///
/// # Endpoint
///
/// `GET /api/v1/{token}/stats`
///
/// Always read from the store; the cache holds only destinations.
///
/// # Errors
///
/// Returns 404 Not Found if the token doesn't exist.
pub async fn stats_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<ApiResponse<ShortLinkResponse>, AppError> {
    let token = require_token(&token)?;

    let link = state.link_service.get_stats(token).await?;

    Ok(ApiResponse::with_data(
        StatusCode::OK,
        "Statistics fetched successfully",
        link.into(),
    ))
}

/// Lists every short link.
///
/// # Endpoint
///
/// `GET /api/v1/shortlinks`
///
/// An empty store yields an empty array, not an error.
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<ShortLinkResponse>>, AppError> {
    let links = state.link_service.list_all().await?;

    Ok(ApiResponse::with_data(
        StatusCode::OK,
        "Short links fetched successfully",
        links.into_iter().map(ShortLinkResponse::from).collect(),
    ))
}
