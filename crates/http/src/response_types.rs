//! Response types (Serialize)

use questmem_core::MatchResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub similar_questions: Vec<MatchResult>,
    pub similarity_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordCheckResponse {
    pub match_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionCountResponse {
    pub total_questions: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub name: &'static str,
    pub version: &'static str,
}
