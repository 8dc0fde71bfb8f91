//! Shared constants for questmem.
//!
//! Centralizes magic numbers so thresholds are not duplicated across crates.

/// Default similarity cutoff for the semantic matcher. Questions whose
/// cosine similarity to the input strictly exceeds this value are matches.
pub const SEMANTIC_SIMILARITY_THRESHOLD: f32 = 0.7;

/// Default relevance cutoff for the lexical matcher. Search hits whose
/// full-text rank strictly exceeds this value are matches.
pub const LEXICAL_SCORE_THRESHOLD: f64 = 2.5;

/// Embedding vector dimension for the feature-hashing embedder.
pub const EMBEDDING_DIMENSION: usize = 384;

/// Maximum length of submitted question text, in characters (DoS protection).
pub const MAX_QUESTION_TEXT_CHARS: usize = 10_000;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;
