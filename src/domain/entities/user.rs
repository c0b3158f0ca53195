//! User account entity.

use chrono::{DateTime, Utc};

/// A registered OptiWaste user.
///
/// Accounts are created and maintained by the `admin` CLI; the web service
/// only ever reads them. The `password_hash` field holds a salted one-way
/// hash (`"<salt_hex>$<sha256_hex>"`), never a raw password.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Full display name shown on the dashboard after login.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input data for creating a new user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}
