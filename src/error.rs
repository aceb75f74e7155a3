//! Application error type and its HTTP mapping.
//!
//! Every failure is rendered with the standard response envelope
//! (see [`crate::api::dto::envelope::ApiResponse`]) and never carries internal
//! error details to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::dto::envelope::ApiResponse;

/// Errors surfaced by the link service and the durable store.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing client input.
    #[error("{0}")]
    Validation(String),

    /// The short token does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A short token collided with an existing record.
    #[error("{0}")]
    Conflict(String),

    /// The durable store was unreachable, timed out, or rejected the query.
    #[error("{0}")]
    Storage(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// HTTP status code for this error.
    ///
    /// Token collisions are reported as a server failure: the client cannot
    /// fix them by changing the request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) | Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        ApiResponse::<()>::message(status, self.to_string()).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(format!(
                "Unique constraint violation ({})",
                db.constraint().unwrap_or("unknown")
            ));
        }

        tracing::error!(error = %e, "Database error");
        AppError::storage("Database error")
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request payload".to_string());

        AppError::bad_request(message)
    }
}
