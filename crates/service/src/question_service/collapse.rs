//! Startup job that collapses exact-text duplicates down to one canonical
//! record per distinct text.

use super::QuestionService;
use crate::ServiceError;

impl QuestionService {
    /// Remove exact-text duplicates, keeping the first-inserted record of
    /// every group.
    ///
    /// Idempotent: after one run no duplicate group remains, so a second run
    /// deletes nothing. Errors propagate — this runs before request serving
    /// begins and a failure is fatal to startup, not something to log away.
    ///
    /// Returns the number of records deleted.
    pub async fn collapse_duplicates(&self) -> Result<u64, ServiceError> {
        let groups = self.store.duplicate_groups().await?;
        if groups.is_empty() {
            tracing::debug!("no duplicate questions found");
            return Ok(0);
        }

        // First id per group is canonical; everything after it goes into a
        // single bulk deletion across all groups.
        let mut redundant: Vec<String> = Vec::new();
        for group in &groups {
            redundant.extend(group.redundant_ids().iter().cloned());
        }

        let deleted = self.store.delete_many(&redundant).await?;
        tracing::info!(
            groups = groups.len(),
            deleted,
            "collapsed duplicate questions"
        );
        Ok(deleted)
    }
}
