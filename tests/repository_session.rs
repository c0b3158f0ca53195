mod common;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use optiwaste::domain::entities::NewSession;
use optiwaste::domain::repositories::SessionRepository;
use optiwaste::infrastructure::persistence::PgSessionRepository;

fn new_session(token_hash: &str, ttl_seconds: i64) -> NewSession {
    NewSession {
        token_hash: token_hash.to_string(),
        username: "jdoe".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        expires_at: Utc::now() + Duration::seconds(ttl_seconds),
    }
}

#[sqlx::test]
async fn test_create_session(pool: PgPool) {
    common::create_test_user(&pool, "jdoe", "Jane", "Doe", "hunter2").await;
    let repo = PgSessionRepository::new(Arc::new(pool));

    let session = repo.create_session(&new_session("hash123", 3600)).await.unwrap();

    assert_eq!(session.token_hash, "hash123");
    assert_eq!(session.username, "jdoe");
    assert_eq!(session.first_name, "Jane");
    assert_eq!(session.last_name, "Doe");
    assert!(!session.is_expired());
}

#[sqlx::test]
async fn test_find_active_valid(pool: PgPool) {
    common::create_test_user(&pool, "jdoe", "Jane", "Doe", "hunter2").await;
    let repo = PgSessionRepository::new(Arc::new(pool));

    repo.create_session(&new_session("validhash", 3600)).await.unwrap();

    let found = repo.find_active("validhash").await.unwrap();

    assert!(found.is_some());
    assert_eq!(found.unwrap().username, "jdoe");
}

#[sqlx::test]
async fn test_find_active_unknown_hash(pool: PgPool) {
    let repo = PgSessionRepository::new(Arc::new(pool));

    let found = repo.find_active("nonexistent").await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_find_active_skips_expired(pool: PgPool) {
    common::create_test_user(&pool, "jdoe", "Jane", "Doe", "hunter2").await;
    let repo = PgSessionRepository::new(Arc::new(pool));

    repo.create_session(&new_session("expiredhash", -60)).await.unwrap();

    let found = repo.find_active("expiredhash").await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_delete_by_token_hash(pool: PgPool) {
    common::create_test_user(&pool, "jdoe", "Jane", "Doe", "hunter2").await;
    let repo = PgSessionRepository::new(Arc::new(pool));

    repo.create_session(&new_session("hash123", 3600)).await.unwrap();
    repo.delete_by_token_hash("hash123").await.unwrap();

    assert!(repo.find_active("hash123").await.unwrap().is_none());

    // Deleting an unknown hash is a no-op
    repo.delete_by_token_hash("hash123").await.unwrap();
}

#[sqlx::test]
async fn test_delete_expired(pool: PgPool) {
    common::create_test_user(&pool, "jdoe", "Jane", "Doe", "hunter2").await;
    let repo = PgSessionRepository::new(Arc::new(pool));

    repo.create_session(&new_session("fresh", 3600)).await.unwrap();
    repo.create_session(&new_session("stale-1", -60)).await.unwrap();
    repo.create_session(&new_session("stale-2", -3600)).await.unwrap();

    let removed = repo.delete_expired().await.unwrap();

    assert_eq!(removed, 2);
    assert!(repo.find_active("fresh").await.unwrap().is_some());
}

#[sqlx::test]
async fn test_count_active(pool: PgPool) {
    common::create_test_user(&pool, "jdoe", "Jane", "Doe", "hunter2").await;
    let repo = PgSessionRepository::new(Arc::new(pool));

    repo.create_session(&new_session("fresh", 3600)).await.unwrap();
    repo.create_session(&new_session("stale", -60)).await.unwrap();

    assert_eq!(repo.count_active().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_deleting_user_cascades_sessions(pool: PgPool) {
    common::create_test_user(&pool, "jdoe", "Jane", "Doe", "hunter2").await;
    let repo = PgSessionRepository::new(Arc::new(pool.clone()));

    repo.create_session(&new_session("hash123", 3600)).await.unwrap();

    sqlx::query("DELETE FROM users WHERE username = 'jdoe'")
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(common::count_sessions(&pool).await, 0);
}
