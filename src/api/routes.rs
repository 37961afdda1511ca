//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `/films` - Film catalog operations (GET/POST/PUT)
/// - `/users` - User catalog operations (GET/POST/PUT)
/// - `/health` - Health check
/// - `/api-docs/openapi.json` - Generated OpenAPI document
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): request IDs are assigned before the logging middleware reads
/// them.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/films", handlers::films::film_routes())
        .nest("/users", handlers::users::user_routes())
        .merge(handlers::health::health_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(CorsLayer::permissive())
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Serves the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
