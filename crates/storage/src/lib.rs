//! Storage layer for questmem
//!
//! PostgreSQL-backed question store with tsvector + GIN for full-text
//! relevance scoring. The [`QuestionStore`] trait is the seam the service
//! layer depends on; tests substitute in-memory implementations.

mod error;
mod migrations;
mod pg_storage;
mod traits;

pub use error::StorageError;
pub use pg_storage::PgStorage;
pub use traits::QuestionStore;
