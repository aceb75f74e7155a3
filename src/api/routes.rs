//! API route configuration.
//!
//! Routes are relative; [`crate::routes::build_router`] mounts them under
//! [`API_PREFIX`].

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    create_handler, delete_handler, health_handler, list_handler, redirect_handler,
    stats_handler, update_handler,
};
use crate::state::AppState;

/// Path prefix every API route is served under.
pub const API_PREFIX: &str = "/api/v1";

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /shortlink`          - Create a short link
/// - `GET    /shortlinks`         - List every short link
/// - `GET    /debug/healthCheck`  - Liveness probe
/// - `GET    /{token}`            - Redirect to the original URL (302)
/// - `PUT    /{token}`            - Change the destination of a token
/// - `DELETE /{token}`            - Delete a token
/// - `GET    /{token}/stats`      - Record with access count
///
/// Static segments take priority over `{token}`, so a token equal to
/// `shortlinks` is unreachable by redirect. Generated tokens are 8 characters
/// and never collide with it.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shortlink", post(create_handler))
        .route("/shortlinks", get(list_handler))
        .route("/debug/healthCheck", get(health_handler))
        .route(
            "/{token}",
            get(redirect_handler)
                .put(update_handler)
                .delete(delete_handler),
        )
        .route("/{token}/stats", get(stats_handler))
}
