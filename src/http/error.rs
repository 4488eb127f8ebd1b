//! HTTP mapping for search errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::SearchError;

impl SearchError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        if self.is_bad_request() {
            StatusCode::BAD_REQUEST
        } else if self.is_unavailable() {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if self.is_unavailable() {
            tracing::error!(
                status = status.as_u16(),
                error = %message,
                "Document source unavailable"
            );
        } else if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Search request failed");
        }

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
