//! Login session management service.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::{NewSession, Session, User};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// The authenticated identity attached to a request by the session
/// middleware and rendered on the dashboard.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<Session> for SessionUser {
    fn from(session: Session) -> Self {
        SessionUser {
            username: session.username,
            first_name: session.first_name,
            last_name: session.last_name,
        }
    }
}

/// Service for issuing and validating login sessions.
///
/// Raw session tokens live only in the browser cookie. Before storage and
/// lookup they are hashed with HMAC-SHA256 (keyed by `signing_secret`), so an
/// attacker with read-only access to the database cannot impersonate a
/// logged-in user without the server-side secret.
pub struct SessionService<R: SessionRepository> {
    repository: Arc<R>,
    signing_secret: String,
    ttl_seconds: i64,
}

impl<R: SessionRepository> SessionService<R> {
    /// Creates a new session service.
    ///
    /// # Arguments
    ///
    /// - `repository` - session repository for DB operations
    /// - `signing_secret` - HMAC key; rotating it invalidates every session
    /// - `ttl_seconds` - lifetime of newly opened sessions
    pub fn new(repository: Arc<R>, signing_secret: String, ttl_seconds: i64) -> Self {
        Self {
            repository,
            signing_secret,
            ttl_seconds,
        }
    }

    /// Session lifetime in seconds, as configured.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Opens a session for an authenticated user.
    ///
    /// Caches the user's display name on the session row and returns the raw
    /// token for the browser cookie. The raw token is not retrievable later.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn open_session(&self, user: &User) -> Result<String, AppError> {
        let token = generate_token();

        let session = NewSession {
            token_hash: self.hash_token(&token),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            expires_at: Utc::now() + Duration::seconds(self.ttl_seconds),
        };

        self.repository.create_session(&session).await?;

        Ok(token)
    }

    /// Authenticates a raw cookie token against stored sessions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token matches no session or
    /// the session has expired. Returns [`AppError::Internal`] on database
    /// errors.
    pub async fn authenticate(&self, token: &str) -> Result<SessionUser, AppError> {
        let session = self
            .repository
            .find_active(&self.hash_token(token))
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or expired session"}),
                )
            })?;

        Ok(session.into())
    }

    /// Closes the session for a raw cookie token (logout).
    ///
    /// Closing an unknown token is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn close_session(&self, token: &str) -> Result<(), AppError> {
        self.repository
            .delete_by_token_hash(&self.hash_token(token))
            .await
    }

    /// Removes expired sessions, returning how many were deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn purge_expired(&self) -> Result<u64, AppError> {
        self.repository.delete_expired().await
    }

    /// Counts sessions that are still valid (health and admin reporting).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn active_sessions(&self) -> Result<i64, AppError> {
        self.repository.count_active().await
    }
}

/// Generates a cryptographically random session token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
/// - Entropy: ~286 bits
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
