//! Handlers for link management endpoints (create, update, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use super::require_token;
use crate::api::dto::envelope::ApiResponse;
use crate::api::dto::short_link::{ShortLinkPayload, ShortLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Unwraps the JSON body, mapping any extractor rejection to a 400.
///
/// Field validation is left to the caller: an update must report an unknown
/// token before it looks at the new URL.
fn parse_payload(
    payload: Result<Json<ShortLinkPayload>, JsonRejection>,
) -> Result<ShortLinkPayload, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected request body");
        AppError::bad_request("Invalid request payload")
    })?;
    Ok(payload)
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/v1/shortlink`
///
/// # Request Body
///
/// ```json
/// { "original_url": "http://example.com" }
/// ```
///
/// # Response
///
/// 201 with the created record in `data`.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or URL.
/// Returns 500 Internal Server Error if the store fails.
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortLinkPayload>, JsonRejection>,
) -> Result<ApiResponse<ShortLinkResponse>, AppError> {
    let payload = parse_payload(payload)?;
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(&payload.original_url)
        .await?;

    Ok(ApiResponse::with_data(
        StatusCode::CREATED,
        "Short link created successfully",
        link.into(),
    ))
}

/// Points an existing token at a new destination.
///
/// # Endpoint
///
/// `PUT /api/v1/{token}`
///
/// # Cache
///
/// The cache entry is overwritten with the new destination, so the next
/// redirect never serves the old one.
///
/// # Errors
///
/// Returns 404 Not Found if the token does not exist, whatever the body holds.
/// Returns 400 Bad Request for a malformed body or URL.
pub async fn update_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<ShortLinkPayload>, JsonRejection>,
) -> Result<ApiResponse<()>, AppError> {
    let token = require_token(&token)?;
    let payload = parse_payload(payload)?;

    state
        .link_service
        .update_original_url(token, &payload.original_url)
        .await?;

    Ok(ApiResponse::message(
        StatusCode::OK,
        "Short URL updated successfully",
    ))
}

/// Deletes a short link and evicts it from the cache.
///
/// # Endpoint
///
/// `DELETE /api/v1/{token}`
///
/// # Errors
///
/// Returns 404 Not Found if the token does not exist.
pub async fn delete_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<ApiResponse<()>, AppError> {
    let token = require_token(&token)?;

    state.link_service.delete_short_link(token).await?;

    Ok(ApiResponse::message(
        StatusCode::OK,
        "Short URL deleted successfully",
    ))
}
