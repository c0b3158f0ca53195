//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Redirect to the login page (public)
//! - `GET  /login`     - Login form (public)
//! - `POST /login`     - Credential submission (public, tight rate limit)
//! - `GET  /dashboard` - Dashboard (session cookie required)
//! - `POST /logout`    - Session teardown (session cookie required)
//! - `GET  /health`    - JSON component health (public)
//! - `/static/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, strictest on the login routes
//! - **Authentication** - Cookie session for the dashboard pages
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::handlers::health_handler;
use crate::web::middleware::{rate_limit, tracing, web_auth};
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let web_protected = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .layer(rate_limit::layer());

    let web_public = web::routes::public_routes().layer(rate_limit::secure_layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(web_protected)
        .merge(web_public)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
