//! Embedding generation for semantic similarity matching.
//!
//! Defines the [`EmbeddingProvider`] seam the matchers depend on, plus the
//! default [`HashEmbedder`] implementation. A model-backed provider (ONNX,
//! remote API) can be swapped in behind the same trait without touching the
//! matchers.

pub mod error;
mod hash_embedder;
mod similarity;

pub use error::EmbeddingError;
pub use hash_embedder::HashEmbedder;
pub use similarity::cosine_similarity;

/// Maps text to a fixed-dimensional vector and compares vectors pairwise.
///
/// Implementations must be deterministic per text: embedding the same string
/// twice yields the same vector, so a stored text identical to the input
/// reaches maximal similarity.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a text into a fixed-dimensional vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Pairwise similarity between two embeddings, bounded to [-1, 1].
    fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }

    /// Dimension of vectors produced by [`Self::embed`].
    fn dimension(&self) -> usize;
}
