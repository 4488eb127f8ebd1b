//! HTTP request handlers for the search API
//!
//! Implements handlers for the health and search endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};

use crate::core::error::SearchError;
use crate::core::services::Services;
use crate::core::types::*;

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Search handler
///
/// Scores the candidate documents against `q` and returns one page
/// of results ordered by `sortBy`/`sortOrder`.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `params` - Query string parameters (`q`, filters, paging)
///
/// # Errors
///
/// - `InvalidQuery`: Query is empty or too long
/// - `InvalidParameter`: Unparseable parameters, malformed dates or
///   inverted ranges
/// - `SourceUnavailable`: Documents could not be loaded
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    params: Result<Query<SearchRequest>, QueryRejection>,
) -> Result<Json<SearchResponse>, SearchError> {
    let Query(params) = params
        .map_err(|rejection| SearchError::invalid_parameter("query", rejection.body_text()))?;
    let response = services.search.search(&params).await?;
    Ok(Json(response))
}
