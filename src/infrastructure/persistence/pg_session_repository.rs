//! PostgreSQL implementation of the session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewSession, Session};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

/// PostgreSQL repository for login sessions.
///
/// Stores keyed token hashes; raw cookie tokens are never persisted.
pub struct PgSessionRepository {
    pool: Arc<PgPool>,
}

impl PgSessionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Row shape returned by session queries.
#[derive(sqlx::FromRow)]
struct SessionRow {
    id: i64,
    token_hash: String,
    username: String,
    first_name: String,
    last_name: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            id: row.id,
            token_hash: row.token_hash,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: row.created_at,
            expires_at: row.expires_at,
        }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create_session(&self, session: &NewSession) -> Result<Session, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO sessions (token_hash, username, first_name, last_name, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, token_hash, username, first_name, last_name, created_at, expires_at
            "#,
        )
        .bind(&session.token_hash)
        .bind(&session.username)
        .bind(&session.first_name)
        .bind(&session.last_name)
        .bind(session.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_active(&self, token_hash: &str) -> Result<Option<Session>, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, token_hash, username, first_name, last_name, created_at, expires_at
            FROM sessions
            WHERE token_hash = $1
              AND expires_at > NOW()
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Session::from))
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete_expired(&self) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE expires_at <= NOW()
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn count_active(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE expires_at > NOW()")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
