pub(crate) mod collapse;
pub(crate) mod count;
pub(crate) mod serve;

use std::sync::Arc;

use anyhow::Result;
use questmem_core::{
    env_parse_with_default, LEXICAL_SCORE_THRESHOLD, SEMANTIC_SIMILARITY_THRESHOLD,
};
use questmem_embeddings::HashEmbedder;
use questmem_service::QuestionService;
use questmem_storage::PgStorage;

use crate::get_database_url;

/// Build the service over the Postgres store and the default embedder,
/// with thresholds overridable from the environment.
pub(crate) async fn build_service() -> Result<QuestionService> {
    let storage = PgStorage::new(&get_database_url()?).await?;
    let semantic =
        env_parse_with_default("QUESTMEM_SEMANTIC_THRESHOLD", SEMANTIC_SIMILARITY_THRESHOLD);
    let lexical = env_parse_with_default("QUESTMEM_LEXICAL_THRESHOLD", LEXICAL_SCORE_THRESHOLD);
    let service = QuestionService::new(Arc::new(storage), Arc::new(HashEmbedder::new()))
        .with_thresholds(semantic, lexical);
    Ok(service)
}
