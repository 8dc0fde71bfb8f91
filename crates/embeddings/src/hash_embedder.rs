//! Deterministic FNV-1a feature-hashing embedder.
//!
//! Each lowercase whitespace token hashes to a bucket in a fixed-dimension
//! vector; the sign bit decorrelates colliding tokens. No model files, no
//! network, identical text always embeds to the identical vector.

use questmem_core::EMBEDDING_DIMENSION;

use crate::{EmbeddingError, EmbeddingProvider};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Feature-hashing embedder over lowercase whitespace tokens.
#[derive(Debug, Clone, Copy)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_dimension(EMBEDDING_DIMENSION)
    }

    /// Embedder with a custom dimension (tests use small dimensions).
    #[must_use]
    pub fn with_dimension(dimension: usize) -> Self {
        tracing::debug!(dimension, "hash embedder initialized");
        Self { dimension }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

impl EmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if self.dimension == 0 {
            return Err(EmbeddingError::ModelInit("dimension must be non-zero".to_owned()));
        }
        let mut vector = vec![0.0_f32; self.dimension];
        for token in text.split_whitespace() {
            let hash = fnv1a(token.to_lowercase().as_bytes());
            #[allow(
                clippy::cast_possible_truncation,
                reason = "bucket index is reduced modulo dimension"
            )]
            let bucket = (hash % self.dimension as u64) as usize;
            // Top hash bit picks the sign so colliding tokens don't all
            // accumulate in the same direction.
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosine_similarity;

    #[test]
    fn test_embed_is_deterministic() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("what is a black hole").unwrap();
        let b = embedder.embed("what is a black hole").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_identical_texts_have_maximal_similarity() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("How do black holes form?").unwrap();
        let b = embedder.embed("How do black holes form?").unwrap();
        let sim = embedder.similarity(&a, &b);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_case_insensitive_tokens() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("Black Hole").unwrap();
        let b = embedder.embed("black hole").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_text_embeds_to_zero_vector() {
        let embedder = HashEmbedder::new();
        let v = embedder.embed("").unwrap();
        assert_eq!(v.len(), EMBEDDING_DIMENSION);
        assert!(v.iter().all(|f| *f == 0.0));
    }

    #[test]
    fn test_disjoint_texts_have_low_similarity() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("quantum entanglement experiments").unwrap();
        let b = embedder.embed("sourdough bread recipe").unwrap();
        let sim = cosine_similarity(&a, &b);
        assert!(sim < 0.5, "unrelated texts scored {sim}");
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let embedder = HashEmbedder::with_dimension(0);
        assert!(embedder.embed("x").is_err());
    }

    #[test]
    fn test_dimension_reported() {
        assert_eq!(HashEmbedder::new().dimension(), EMBEDDING_DIMENSION);
        assert_eq!(HashEmbedder::with_dimension(8).dimension(), 8);
    }
}
