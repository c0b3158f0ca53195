//! Cookie-based session authentication middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;
use crate::web::routes::LOGIN_PATH;

/// Name of the browser cookie carrying the raw session token.
pub const SESSION_COOKIE: &str = "session_token";

/// Builds the `Set-Cookie` value issued after a successful login.
///
/// `HttpOnly` keeps the token away from page scripts; `SameSite=Lax` covers
/// the form-post flow without exposing the cookie to cross-site subrequests.
pub fn session_cookie(token: &str, max_age_seconds: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_seconds}")
}

/// Builds the `Set-Cookie` value that expires the session cookie (logout).
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Extracts the raw session token from a request's `Cookie` header.
///
/// Handles multiple cookies by splitting on semicolons and picking the
/// [`SESSION_COOKIE`] key-value pair; other cookies are ignored.
pub fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })
}

/// Authenticates page requests using the session cookie.
///
/// # Authentication Flow
///
/// 1. Extract [`SESSION_COOKIE`] from the request
/// 2. Validate the token via [`crate::application::services::SessionService`]
/// 3. On success, attach the [`crate::application::services::SessionUser`]
///    as a request extension and continue to the handler
/// 4. On failure, missing cookie, or expired session, redirect to `/login`
///
/// # Errors
///
/// Returns `Redirect` to [`LOGIN_PATH`] instead of `401 Unauthorized`: in a
/// browser context the login page is the useful response.
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let token = session_token_from_headers(req.headers());

    match token {
        Some(token) => match st.session_service.authenticate(&token).await {
            Ok(user) => {
                req.extensions_mut().insert(user);
                Ok(next.run(req).await)
            }
            Err(_) => Err(Redirect::to(LOGIN_PATH)),
        },
        None => Err(Redirect::to(LOGIN_PATH)),
    }
}
