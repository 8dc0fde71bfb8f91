//! PostgreSQL schema migrations for the question store.

use sqlx::PgPool;

use crate::error::StorageError;

/// Run all PostgreSQL migrations. Idempotent.
pub(crate) async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id UUID PRIMARY KEY,
            seq BIGSERIAL NOT NULL,
            text TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(migration_err)?;

    // seq is the insertion-order tiebreaker; created_at alone cannot order
    // rows inserted within the same timestamp tick.
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_seq ON questions (seq)")
        .execute(pool)
        .await
        .map_err(migration_err)?;

    // Exact-text grouping for the duplicate collapse job.
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_text ON questions (text)")
        .execute(pool)
        .await
        .map_err(migration_err)?;

    // Full-text search: tsvector column + GIN index
    sqlx::query(
        r#"
        DO $$ BEGIN
            IF NOT EXISTS (
                SELECT 1 FROM information_schema.columns
                WHERE table_name = 'questions' AND column_name = 'search_vec'
            ) THEN
                ALTER TABLE questions ADD COLUMN search_vec tsvector
                    GENERATED ALWAYS AS (to_tsvector('english', COALESCE(text, ''))) STORED;
            END IF;
        END $$
        "#,
    )
    .execute(pool)
    .await
    .map_err(migration_err)?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_questions_search_vec ON questions USING GIN (search_vec)",
    )
    .execute(pool)
    .await
    .map_err(migration_err)?;

    Ok(())
}

fn migration_err(err: sqlx::Error) -> StorageError {
    StorageError::Migration(err.to_string())
}
