//! Standard JSON response envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Envelope wrapping every JSON response.
///
/// ```json
/// { "statusCode": 201, "message": "Short link created successfully", "data": { ... } }
/// ```
///
/// `data` is omitted when there is nothing to return.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip)]
    status: StatusCode,
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Envelope carrying a payload.
    pub fn with_data(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            status_code: status.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// Envelope with a message only.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            status_code: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_omitted_when_empty() {
        let body = ApiResponse::<()>::message(StatusCode::OK, "ok");
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value, json!({ "statusCode": 200, "message": "ok" }));
    }

    #[test]
    fn test_data_included() {
        let body = ApiResponse::with_data(StatusCode::CREATED, "created", vec![1, 2]);
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["statusCode"], 201);
        assert_eq!(value["data"], json!([1, 2]));
    }
}
