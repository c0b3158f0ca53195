//! Authenticated session entity.

use chrono::{DateTime, Utc};

/// A server-side login session.
///
/// The presence of a non-expired row is the "authenticated" flag: a browser
/// holding the raw token whose keyed hash matches `token_hash` is logged in
/// as `username` until `expires_at` passes or the row is deleted by logout.
/// The display name is cached at login time so the dashboard renders without
/// touching the `users` table.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub token_hash: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Returns true if the session has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Input data for opening a new session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub token_hash: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub expires_at: DateTime<Utc>,
}
