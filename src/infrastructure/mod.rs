//! Infrastructure layer: PostgreSQL-backed repository implementations.

pub mod persistence;
