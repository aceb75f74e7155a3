//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/v1/*` - REST API, see [`crate::api::routes`]
//!
//! Anything outside the prefix falls through to axum's default 404.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::middleware::tracing;
use crate::api::routes::API_PREFIX;
use crate::state::AppState;

/// Builds the API router with state and tracing applied.
///
/// Used directly by integration tests; the server wraps it with
/// [`app_router`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest(API_PREFIX, api::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
