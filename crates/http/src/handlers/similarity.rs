//! Similarity-check handlers: semantic, lexical, and word overlap.
//!
//! The two similarity endpoints are deliberately independent — divergent
//! algorithms and thresholds, no merged ranking.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api_error::ApiError;
use crate::request_types::SimilarityRequest;
use crate::response_types::{SimilarityResponse, WordCheckResponse};
use crate::AppState;

/// Semantic vector similarity over the full corpus.
pub async fn check_similarity(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SimilarityRequest>,
) -> Result<Json<SimilarityResponse>, ApiError> {
    let outcome = state.question_service.match_semantic(&request.text).await?;
    Ok(Json(SimilarityResponse {
        similar_questions: outcome.matches,
        similarity_count: outcome.count,
    }))
}

/// Lexical relevance via the store's full-text index.
pub async fn check_similarity_lexical(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SimilarityRequest>,
) -> Result<Json<SimilarityResponse>, ApiError> {
    let outcome = state.question_service.match_lexical(&request.text).await?;
    Ok(Json(SimilarityResponse {
        similar_questions: outcome.matches,
        similarity_count: outcome.count,
    }))
}

/// Coarse word-overlap count.
pub async fn check_words(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SimilarityRequest>,
) -> Result<Json<WordCheckResponse>, ApiError> {
    let match_count = state.question_service.count_word_overlap(&request.text).await?;
    Ok(Json(WordCheckResponse { match_count }))
}
