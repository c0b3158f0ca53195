//! Credential verification service.

use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

/// Number of random salt bytes prepended to the password before hashing.
const SALT_LEN: usize = 16;

/// Service for verifying login credentials.
///
/// Passwords are stored as `"<salt_hex>$<sha256_hex>"` where the digest is
/// SHA-256 over the salt bytes followed by the password bytes. An attacker
/// with read-only access to the database cannot recover passwords or reuse
/// hashes across accounts.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Verifies a username/password pair against stored credentials.
    ///
    /// Returns the matching [`User`] so the caller can open a session with
    /// the account's display name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with message `"Invalid username"`
    /// if no account matches, or `"Invalid password"` if the hash comparison
    /// fails. Returns [`AppError::Internal`] on database errors.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized("Invalid username", json!({"reason": "No such account"}))
            })?;

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::unauthorized(
                "Invalid password",
                json!({"reason": "Password mismatch"}),
            ));
        }

        Ok(user)
    }

    /// Counts registered accounts (health and admin reporting).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn user_count(&self) -> Result<i64, AppError> {
        self.repository.count_users().await
    }
}

/// Hashes a password with a fresh random salt.
///
/// Returns `"<salt_hex>$<sha256_hex>"` for database storage.
pub fn hash_password(password: &str) -> String {
    use rand::Rng;

    let salt: [u8; SALT_LEN] = rand::rng().random();
    format!("{}${}", hex::encode(salt), salted_digest(&salt, password))
}

/// Verifies a password against a stored `"<salt_hex>$<sha256_hex>"` value.
///
/// Malformed stored values never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };

    salted_digest(&salt, password) == digest_hex
}

/// Hex-encoded SHA-256 over `salt || password`.
fn salted_digest(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
