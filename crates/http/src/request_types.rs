//! Request body types (Deserialize)

use serde::Deserialize;

/// Body for question creation.
#[derive(Debug, Deserialize)]
pub struct QuestionInput {
    pub text: String,
}

/// Body for the similarity and word-overlap check endpoints.
#[derive(Debug, Deserialize)]
pub struct SimilarityRequest {
    pub text: String,
}
