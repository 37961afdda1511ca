//! Health check endpoint handler.
//!
//! The catalog has no external dependencies, so the health check reports
//! process liveness only.

use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::doc::HEALTH_TAG;
use crate::state::AppState;

/// Health check response structure.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Application version
    pub version: String,
    /// Timestamp of the health check (ISO 8601 format)
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: String,
}

/// Health status enumeration.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All systems operational
    Healthy,
}

/// Creates health check routes.
///
/// # Routes
/// - `GET /health` - Basic health check
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Basic health check endpoint.
///
/// With all state in process memory there are no dependencies to probe; if
/// we can respond, we're healthy.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = HEALTH_TAG
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        version: crate::pkg_version().to_string(),
        timestamp: jiff::Timestamp::now().to_string(),
    })
}
