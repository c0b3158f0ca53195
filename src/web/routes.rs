//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    dashboard_handler, index_handler, login_page_handler, login_submit_handler, logout_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Where unauthenticated (or logged-out) visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// The fixed destination reached after a successful login.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Routes requiring an authenticated session.
///
/// Protected via [`crate::web::middleware::web_auth`]; requests without a
/// valid session cookie are redirected to [`LOGIN_PATH`].
///
/// # Endpoints
///
/// - `GET /dashboard` - Dashboard home, greets the logged-in user
/// - `POST /logout` - Destroys the session and returns to the login page
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(DASHBOARD_PATH, get(dashboard_handler))
        .route("/logout", post(logout_handler))
}

/// Public routes without authentication.
///
/// # Endpoints
///
/// - `GET  /`       - Redirect to the login page
/// - `GET  /login`  - Login form
/// - `POST /login`  - Credential submission
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route(
            LOGIN_PATH,
            get(login_page_handler).post(login_submit_handler),
        )
}
