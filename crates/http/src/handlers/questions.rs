//! CRUD handlers: create, delete, count.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use questmem_core::Question;

use crate::api_error::ApiError;
use crate::request_types::QuestionInput;
use crate::response_types::{MessageResponse, QuestionCountResponse};
use crate::AppState;

pub async fn create_question(
    State(state): State<Arc<AppState>>,
    Json(input): Json<QuestionInput>,
) -> Result<Json<Question>, ApiError> {
    let question = state.question_service.create_question(&input.text).await?;
    Ok(Json(question))
}

pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.question_service.delete_question(&id).await?;
    Ok(Json(MessageResponse { message: "Question deleted successfully".to_owned() }))
}

pub async fn get_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuestionCountResponse>, ApiError> {
    let total_questions = state.question_service.count_questions().await?;
    Ok(Json(QuestionCountResponse { total_questions }))
}
