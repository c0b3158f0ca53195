//! Logout handler.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};

use crate::state::AppState;
use crate::web::middleware::web_auth;
use crate::web::routes::LOGIN_PATH;

/// Destroys the current session and returns to the login page.
///
/// # Endpoint
///
/// `POST /logout`
///
/// Deletes the session row, expires the browser cookie, and redirects.
/// A failed delete is logged but still clears the cookie so the browser
/// ends up logged out either way.
pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = web_auth::session_token_from_headers(&headers) {
        if let Err(e) = state.session_service.close_session(&token).await {
            tracing::warn!("failed to close session: {e}");
        }
    }

    (
        [(SET_COOKIE, web_auth::clear_session_cookie())],
        Redirect::to(LOGIN_PATH),
    )
        .into_response()
}
