//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Provides the search and health endpoints via the Axum web
//! framework.

pub mod error;
pub mod handlers;
pub mod middleware;

pub use handlers::*;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;

/// Build the API router over shared services
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_handler))
        // Search endpoint
        .route("/api/search", get(search_handler))
        // Add middleware
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        // Add shared state
        .with_state(services)
}
