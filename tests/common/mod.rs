#![allow(dead_code)]

use axum::{
    Router, middleware,
    routing::{get, post},
};
use sqlx::PgPool;
use std::sync::Arc;

use optiwaste::application::services::{AuthService, SessionService, hash_password};
use optiwaste::infrastructure::persistence::{PgSessionRepository, PgUserRepository};
use optiwaste::state::AppState;
use optiwaste::web::handlers::{
    dashboard_handler, health_handler, login_page_handler, login_submit_handler, logout_handler,
};
use optiwaste::web::middleware::web_auth;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";
pub const TEST_SESSION_TTL: i64 = 3600;

pub async fn create_test_user(
    pool: &PgPool,
    username: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
) {
    sqlx::query(
        "INSERT INTO users (username, first_name, last_name, password_hash) VALUES ($1, $2, $3, $4)",
    )
    .bind(username)
    .bind(first_name)
    .bind(last_name)
    .bind(hash_password(password))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_sessions(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sessions")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn expire_all_sessions(pool: &PgPool) {
    sqlx::query("UPDATE sessions SET expires_at = NOW() - INTERVAL '1 hour'")
        .execute(pool)
        .await
        .unwrap();
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let session_repo = Arc::new(PgSessionRepository::new(pool));

    AppState {
        auth_service: Arc::new(AuthService::new(user_repo)),
        session_service: Arc::new(SessionService::new(
            session_repo,
            TEST_SIGNING_SECRET.to_string(),
            TEST_SESSION_TTL,
        )),
    }
}

/// Pulls the raw session token out of a `Set-Cookie` header value.
pub fn extract_session_token(set_cookie: &str) -> String {
    set_cookie
        .strip_prefix("session_token=")
        .and_then(|rest| rest.split(';').next())
        .expect("Set-Cookie should carry session_token")
        .to_string()
}

/// Full page router without the rate-limit and static-file layers, which
/// need a real socket context.
pub fn test_app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/logout", post(logout_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ));

    Router::new()
        .route("/login", get(login_page_handler).post(login_submit_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .with_state(state)
}
