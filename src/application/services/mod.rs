//! Service layer orchestrating domain operations.

pub mod auth_service;
pub mod session_service;

pub use auth_service::{AuthService, hash_password, verify_password};
pub use session_service::{SessionService, SessionUser};
