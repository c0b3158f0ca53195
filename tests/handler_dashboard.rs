mod common;

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use sqlx::PgPool;

async fn login_token(server: &TestServer) -> String {
    let response = server
        .post("/login")
        .form(&[("username", "jdoe"), ("password", "hunter2")])
        .await;

    common::extract_session_token(
        response
            .headers()
            .get(SET_COOKIE)
            .expect("login should set the session cookie")
            .to_str()
            .unwrap(),
    )
}

fn cookie_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("session_token={token}")).unwrap()
}

#[sqlx::test]
async fn test_dashboard_requires_session(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/dashboard").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/login");
}

#[sqlx::test]
async fn test_dashboard_rejects_garbage_token(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server
        .get("/dashboard")
        .add_header(COOKIE, cookie_header("not-a-real-token"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/login");
}

#[sqlx::test]
async fn test_dashboard_greets_logged_in_user(pool: PgPool) {
    common::create_test_user(&pool, "jdoe", "Jane", "Doe", "hunter2").await;
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let token = login_token(&server).await;

    let response = server
        .get("/dashboard")
        .add_header(COOKIE, cookie_header(&token))
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Jane"));
    assert!(body.contains("Doe"));
}

#[sqlx::test]
async fn test_dashboard_rejects_expired_session(pool: PgPool) {
    common::create_test_user(&pool, "jdoe", "Jane", "Doe", "hunter2").await;
    let server =
        TestServer::new(common::test_app(common::create_test_state(pool.clone()))).unwrap();

    let token = login_token(&server).await;
    common::expire_all_sessions(&pool).await;

    let response = server
        .get("/dashboard")
        .add_header(COOKIE, cookie_header(&token))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/login");
}
