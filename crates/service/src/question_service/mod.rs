//! Question service: CRUD pass-throughs, the startup collapse job, and the
//! three similarity matchers.

mod collapse;
mod matchers;

use std::sync::Arc;

use chrono::Utc;
use questmem_core::{
    MatchResult, Question, LEXICAL_SCORE_THRESHOLD, MAX_QUESTION_TEXT_CHARS,
    SEMANTIC_SIMILARITY_THRESHOLD,
};
use questmem_embeddings::EmbeddingProvider;
use questmem_storage::{QuestionStore, StorageError};

use crate::ServiceError;

/// Matches plus their count, as returned by the semantic and lexical
/// matchers. The count always equals `matches.len()`; it is carried
/// separately because the wire format reports both.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub matches: Vec<MatchResult>,
    pub count: usize,
}

impl MatchOutcome {
    fn from_matches(matches: Vec<MatchResult>) -> Self {
        let count = matches.len();
        Self { matches, count }
    }
}

/// Business logic over explicitly-injected store and embedder handles.
///
/// The matchers are stateless per call and independent of each other; the
/// only required ordering in the system is that [`collapse_duplicates`]
/// completes before request serving begins.
///
/// [`collapse_duplicates`]: QuestionService::collapse_duplicates
pub struct QuestionService {
    store: Arc<dyn QuestionStore>,
    embedder: Arc<dyn EmbeddingProvider>,
    semantic_threshold: f32,
    lexical_threshold: f64,
}

impl QuestionService {
    #[must_use]
    pub fn new(store: Arc<dyn QuestionStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            store,
            embedder,
            semantic_threshold: SEMANTIC_SIMILARITY_THRESHOLD,
            lexical_threshold: LEXICAL_SCORE_THRESHOLD,
        }
    }

    /// Override the default match thresholds (env/CLI configuration).
    #[must_use]
    pub fn with_thresholds(mut self, semantic: f32, lexical: f64) -> Self {
        self.semantic_threshold = semantic;
        self.lexical_threshold = lexical;
        self
    }

    /// Insert a new question, stamping `created_at` at insertion time.
    pub async fn create_question(&self, text: &str) -> Result<Question, ServiceError> {
        validate_text(text)?;
        Ok(self.store.insert(text, Utc::now()).await?)
    }

    /// Delete a question by id. A missing id is a [`ServiceError`] carrying
    /// `NotFound`, distinct from a successful no-op.
    pub async fn delete_question(&self, id: &str) -> Result<(), ServiceError> {
        let deleted = self.store.delete_one(id).await?;
        if deleted == 0 {
            return Err(StorageError::NotFound { entity: "question", id: id.to_owned() }.into());
        }
        Ok(())
    }

    /// Total number of stored questions.
    pub async fn count_questions(&self) -> Result<u64, ServiceError> {
        Ok(self.store.count().await?)
    }
}

/// Boundary validation. The matchers themselves assume validated input and
/// do not re-validate.
fn validate_text(text: &str) -> Result<(), ServiceError> {
    if text.trim().is_empty() {
        return Err(ServiceError::InvalidInput("question text must not be empty".to_owned()));
    }
    if text.chars().count() > MAX_QUESTION_TEXT_CHARS {
        return Err(ServiceError::InvalidInput(format!(
            "question text exceeds {MAX_QUESTION_TEXT_CHARS} characters"
        )));
    }
    Ok(())
}
