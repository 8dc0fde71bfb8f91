//! PostgreSQL question store using sqlx.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use questmem_core::{
    DuplicateGroup, Question, ScoredQuestion, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};

use crate::error::StorageError;
use crate::migrations::run_pg_migrations;
use crate::traits::QuestionStore;

/// PostgreSQL-backed [`QuestionStore`].
#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, run migrations, and hand back a ready store.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

fn row_to_question(row: &sqlx::postgres::PgRow) -> Result<Question, StorageError> {
    let id: Uuid = row.try_get("id")?;
    let text: String = row.try_get("text")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(Question { id: id.to_string(), text, created_at })
}

/// Build an OR-joined prefix tsquery from raw user text.
///
/// Strips tsquery operators so user input can never produce a malformed
/// query; an input with no usable tokens yields `None`.
fn build_tsquery(query: &str) -> Option<String> {
    let result = query
        .split_whitespace()
        .filter_map(|w| {
            let sanitized: String =
                w.chars().filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_').collect();
            if sanitized.is_empty() {
                None
            } else {
                Some(format!("{sanitized}:*"))
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

#[async_trait]
impl QuestionStore for PgStorage {
    async fn insert(
        &self,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Question, StorageError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO questions (id, text, created_at) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(text)
            .bind(created_at)
            .execute(&self.pool)
            .await?;
        Ok(Question { id: id.to_string(), text: text.to_owned(), created_at })
    }

    async fn delete_one(&self, id: &str) -> Result<u64, StorageError> {
        // A malformed id behaves like an id that was never issued.
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(0);
        };
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_many(&self, ids: &[String]) -> Result<u64, StorageError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let uuids: Vec<Uuid> =
            ids.iter().filter_map(|id| Uuid::parse_str(id).ok()).collect();
        let result = sqlx::query("DELETE FROM questions WHERE id = ANY($1)")
            .bind(&uuids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM questions").fetch_one(&self.pool).await?;
        let n: i64 = row.try_get("n")?;
        Ok(u64::try_from(n).unwrap_or(0))
    }

    async fn scan_all(&self) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query("SELECT id, text, created_at FROM questions ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_question).collect::<Result<_, StorageError>>()
    }

    async fn duplicate_groups(&self) -> Result<Vec<DuplicateGroup>, StorageError> {
        let rows = sqlx::query(
            "SELECT text, array_agg(id ORDER BY seq) AS ids
               FROM questions
              GROUP BY text
             HAVING COUNT(*) > 1",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|row| {
                let text: String = row.try_get("text")?;
                let ids: Vec<Uuid> = row.try_get("ids")?;
                Ok(DuplicateGroup {
                    text,
                    ids: ids.iter().map(Uuid::to_string).collect(),
                })
            })
            .collect::<Result<_, StorageError>>()
    }

    async fn text_search(&self, query: &str) -> Result<Vec<ScoredQuestion>, StorageError> {
        let Some(tsquery) = build_tsquery(query) else {
            return Ok(Vec::new());
        };
        let rows = sqlx::query(
            "SELECT id, text, created_at,
                    ts_rank_cd(search_vec, to_tsquery('english', $1))::float8 AS score
               FROM questions
              WHERE search_vec @@ to_tsquery('english', $1)
              ORDER BY score DESC",
        )
        .bind(&tsquery)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::TextSearch(e.to_string()))?;
        rows.iter()
            .map(|row| {
                let question = row_to_question(row)?;
                let score: Option<f64> = row.try_get("score")?;
                Ok(ScoredQuestion { question, score: score.unwrap_or(0.0) })
            })
            .collect::<Result<_, StorageError>>()
    }
}

#[cfg(test)]
mod tests {
    use super::build_tsquery;

    #[test]
    fn test_build_tsquery_or_joins_prefix_terms() {
        assert_eq!(
            build_tsquery("black hole").as_deref(),
            Some("black:* | hole:*")
        );
    }

    #[test]
    fn test_build_tsquery_strips_operators() {
        assert_eq!(build_tsquery("black & hole!").as_deref(), Some("black:* | hole:*"));
    }

    #[test]
    fn test_build_tsquery_empty_input() {
        assert_eq!(build_tsquery(""), None);
        assert_eq!(build_tsquery("&& || !!"), None);
    }
}
