//! PostgreSQL implementations of the domain repository traits.

pub mod pg_session_repository;
pub mod pg_user_repository;

pub use pg_session_repository::PgSessionRepository;
pub use pg_user_repository::PgUserRepository;
