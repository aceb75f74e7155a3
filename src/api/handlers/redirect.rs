//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use super::require_token;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a token to its original URL.
///
/// # Endpoint
///
/// `GET /api/v1/{token}`
///
/// Resolution goes through [`crate::application::services::LinkService::resolve`]:
/// cache first, store on a miss, and the access count is always incremented
/// in the store before the redirect is returned.
///
/// # Errors
///
/// Returns 404 Not Found if the token doesn't exist.
/// Returns 500 Internal Server Error if the access count cannot be recorded.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let token = require_token(&token)?;

    let original_url = state.link_service.resolve(token).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]).into_response())
}
