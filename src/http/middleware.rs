//! Middleware for the search API

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, warn};

/// Request logging middleware
///
/// Logs method, path, status and duration. Query strings carry the
/// user's search text and are summarized by length only. Client errors
/// are logged at WARN, server errors at ERROR.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query_len = request.uri().query().map_or(0, str::len);
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        error!(%method, %path, query_len, status, duration_ms, "Request failed");
    } else if response.status().is_client_error() {
        warn!(%method, %path, query_len, status, duration_ms, "Request rejected");
    } else {
        info!(%method, %path, query_len, status, duration_ms, "Request completed");
    }

    response
}
