//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations live
//! in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for unit testing the services.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - read/administer user accounts
//! - [`SessionRepository`] - login session storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod session_repository;
pub mod user_repository;

pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
