//! Handler for health check endpoint.

use axum::{extract::State, http::StatusCode};

use crate::api::dto::envelope::ApiResponse;
use crate::state::AppState;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /api/v1/debug/healthCheck`
///
/// Always answers 200 while the process serves requests. Store and cache
/// reachability are reported in the message and logged when degraded.
pub async fn health_handler(State(state): State<AppState>) -> ApiResponse<()> {
    let (store_ok, cache_ok) = state.link_service.health_check().await;

    if !store_ok || !cache_ok {
        tracing::warn!(store_ok, cache_ok, "Health check degraded");
    }

    let status = |ok: bool| if ok { "ok" } else { "error" };
    ApiResponse::message(
        StatusCode::OK,
        format!(
            "store: {}, cache: {}",
            status(store_ok),
            status(cache_ok)
        ),
    )
}
