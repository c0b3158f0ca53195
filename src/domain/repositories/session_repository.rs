//! Repository trait for login sessions.

use crate::domain::entities::{NewSession, Session};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `sessions` table.
///
/// Sessions are keyed by the HMAC-SHA256 of the browser's cookie token; the
/// raw token never reaches the database.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSessionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persists a new session row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_session(&self, session: &NewSession) -> Result<Session, AppError>;

    /// Looks up a session by token hash, skipping expired rows.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(session))` if the hash matches a session with
    ///   `expires_at` in the future
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_active(&self, token_hash: &str) -> Result<Option<Session>, AppError>;

    /// Deletes the session with the given token hash (logout).
    ///
    /// Deleting a hash with no matching row is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), AppError>;

    /// Removes all expired sessions, returning how many were deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_expired(&self) -> Result<u64, AppError>;

    /// Counts sessions that have not yet expired.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_active(&self) -> Result<i64, AppError>;
}
