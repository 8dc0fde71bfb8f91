//! Typed error enum for the service layer.
//!
//! Unifies storage and embedding failures into a single error type, enabling
//! callers to match on specific failure modes instead of downcasting opaque
//! `anyhow::Error` boxes.

use questmem_embeddings::EmbeddingError;
use questmem_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and embedding failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, text search, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Embedding generation failed.
    #[error("embedding: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Caller provided invalid input (empty text, oversized text).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying by the caller;
    /// the service itself never retries).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }
}
