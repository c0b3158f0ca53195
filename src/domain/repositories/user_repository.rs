//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `users` table.
///
/// The web service only reads accounts (login lookup); the write operations
/// exist for the `admin` CLI, which is the administration tooling that owns
/// the user lifecycle.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetches a user record by exact username match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Creates a new user account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including unique
    /// violations on `username`.
    async fn create_user(&self, new_user: &NewUser) -> Result<User, AppError>;

    /// Lists all user accounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// Deletes a user account by username.
    ///
    /// Returns `true` if a row was removed. Sessions belonging to the user
    /// are removed by the `ON DELETE CASCADE` on `sessions.username`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_user(&self, username: &str) -> Result<bool, AppError>;

    /// Counts registered users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_users(&self) -> Result<i64, AppError>;
}
