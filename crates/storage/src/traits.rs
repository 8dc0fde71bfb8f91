use async_trait::async_trait;
use chrono::{DateTime, Utc};
use questmem_core::{DuplicateGroup, Question, ScoredQuestion};

use crate::error::StorageError;

/// Capability surface the service layer requires from a question store.
///
/// Enumeration order matters: `scan_all` and the ids inside each
/// [`DuplicateGroup`] follow insertion order, so the collapse job can keep
/// the first-inserted record of every duplicate group.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Insert a question. The store assigns the id.
    async fn insert(
        &self,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Question, StorageError>;

    /// Delete one question by id. Returns the number of rows removed (0 or 1).
    async fn delete_one(&self, id: &str) -> Result<u64, StorageError>;

    /// Delete every question whose id is in `ids`. Returns rows removed.
    async fn delete_many(&self, ids: &[String]) -> Result<u64, StorageError>;

    /// Total number of stored questions.
    async fn count(&self) -> Result<u64, StorageError>;

    /// Full corpus enumeration, in insertion order.
    async fn scan_all(&self) -> Result<Vec<Question>, StorageError>;

    /// Groups of questions sharing byte-identical text, only where the group
    /// has more than one member. Ids within a group are in insertion order.
    async fn duplicate_groups(&self) -> Result<Vec<DuplicateGroup>, StorageError>;

    /// Full-text search ranked by relevance, sorted descending by score.
    /// A hit the index could not score carries score 0.0.
    async fn text_search(&self, query: &str) -> Result<Vec<ScoredQuestion>, StorageError>;
}
