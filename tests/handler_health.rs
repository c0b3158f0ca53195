mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["session_store"]["status"], "ok");
}

#[sqlx::test]
async fn test_health_endpoint_structure(pool: PgPool) {
    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
    assert!(json["checks"].get("session_store").is_some());
}

#[sqlx::test]
async fn test_health_reports_degraded_database(pool: PgPool) {
    sqlx::query("DROP TABLE users CASCADE")
        .execute(&pool)
        .await
        .unwrap();

    let server = TestServer::new(common::test_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
