//! Domain types: stored questions and per-query match results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored question record.
///
/// `id` is an opaque identifier assigned by the store on insertion and never
/// reused. `text` is not unique at the storage level; exact-text duplicates
/// are reconciled by the startup collapse job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A question matched against a query, with the matcher's score attached.
///
/// Transient: constructed per request, never persisted. Score semantics
/// depend on the matcher that produced it (percentage for the semantic
/// matcher, raw full-text rank for the lexical matcher).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub score: f64,
}

impl MatchResult {
    /// Builds a match result from a stored question and a score.
    #[must_use]
    pub fn from_question(question: &Question, score: f64) -> Self {
        Self {
            id: question.id.clone(),
            text: question.text.clone(),
            created_at: question.created_at,
            score,
        }
    }
}

/// A set of question ids sharing byte-identical `text`, in insertion order.
///
/// Produced by the store's exact-text grouping query; only groups with more
/// than one member are reported.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    pub text: String,
    /// Ids in insertion order. The first id is the canonical record.
    pub ids: Vec<String>,
}

impl DuplicateGroup {
    /// Ids of the non-canonical records, i.e. everything after the first.
    #[must_use]
    pub fn redundant_ids(&self) -> &[String] {
        self.ids.get(1..).unwrap_or(&[])
    }
}

/// A question returned by the store's full-text search, ranked by relevance.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredQuestion {
    pub question: Question,
    /// Relevance score from the search index. A hit the index could not
    /// score is reported as 0.0.
    pub score: f64,
}

/// Rounds a score to two decimal places for presentation.
#[must_use]
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
