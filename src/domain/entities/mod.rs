//! Core business entities.

pub mod session;
pub mod user;

pub use session::{NewSession, Session};
pub use user::{NewUser, User};
