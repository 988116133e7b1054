//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /create`        - Register a slug
//! - `GET  /health`        - Health check (store ping)
//! - `GET  /{slug}`        - Redirect and count a hit
//! - `GET  /{slug}/stats`  - Record view, no hit counted
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{create_handler, health_handler, redirect_handler, stats_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes with state and tracing, without path normalization.
///
/// Integration tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create", post(create_handler))
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
        .route("/{slug}/stats", get(stats_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// Trailing slashes are trimmed before routing, so `/docs/` redirects like `/docs`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
