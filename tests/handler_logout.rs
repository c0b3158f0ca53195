mod common;

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use sqlx::PgPool;

fn cookie_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("session_token={token}")).unwrap()
}

#[sqlx::test]
async fn test_logout_destroys_session(pool: PgPool) {
    common::create_test_user(&pool, "jdoe", "Jane", "Doe", "hunter2").await;
    let server =
        TestServer::new(common::test_app(common::create_test_state(pool.clone()))).unwrap();

    let login = server
        .post("/login")
        .form(&[("username", "jdoe"), ("password", "hunter2")])
        .await;
    let token = common::extract_session_token(
        login.headers().get(SET_COOKIE).unwrap().to_str().unwrap(),
    );

    assert_eq!(common::count_sessions(&pool).await, 1);

    let response = server
        .post("/logout")
        .add_header(COOKIE, cookie_header(&token))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/login");

    // Cookie expired in the browser, row gone on the server
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("Max-Age=0"));
    assert_eq!(common::count_sessions(&pool).await, 0);

    // The old token no longer opens the dashboard
    let dashboard = server
        .get("/dashboard")
        .add_header(COOKIE, cookie_header(&token))
        .await;
    dashboard.assert_status(StatusCode::SEE_OTHER);
}

#[sqlx::test]
async fn test_logout_without_session_still_redirects(pool: PgPool) {
    common::create_test_user(&pool, "jdoe", "Jane", "Doe", "hunter2").await;
    let server =
        TestServer::new(common::test_app(common::create_test_state(pool.clone()))).unwrap();

    let login = server
        .post("/login")
        .form(&[("username", "jdoe"), ("password", "hunter2")])
        .await;
    let token = common::extract_session_token(
        login.headers().get(SET_COOKIE).unwrap().to_str().unwrap(),
    );

    // Logout twice: the second call finds no session row
    server
        .post("/logout")
        .add_header(COOKIE, cookie_header(&token))
        .await;

    let response = server
        .post("/logout")
        .add_header(COOKIE, cookie_header(&token))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/login");
}
