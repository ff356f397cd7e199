//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware, routing::get};
use tower_http::timeout::TimeoutLayer;

use crate::api::doc::openapi_json;
use crate::api::handlers;
use crate::api::middleware::{global_error_handler, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware - generates/propagates request IDs
/// 2. Logging middleware - opens the request span
/// 3. Error handler - rewrites bare error responses as JSON
/// 4. Timeout - bounds handling by `server.request_timeout`, except `POST /`
///
/// `POST /` is left out of the timeout: cancelling it mid-list would skip the
/// remaining announcements, and every send already has its own deadline.
///
/// # Routes
/// - `/` - Greeting and push webhook intake
/// - `/health`, `/health/live` - Health checks
/// - `/api-docs/openapi.json` - OpenAPI document
pub fn create_router(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.settings.server.request_timeout);

    let bounded = Router::new()
        .merge(handlers::health::health_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ));

    Router::new()
        .merge(handlers::webhook::webhook_routes())
        .merge(bounded)
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
