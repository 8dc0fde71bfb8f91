//! The three similarity matchers: semantic, lexical, and word overlap.
//!
//! Each is stateless per call and independent of the others. The semantic
//! matcher re-embeds the full corpus on every call — an accepted cost for a
//! small corpus, and part of the observable contract (no cross-call cache to
//! go stale against concurrent writes).

use std::collections::HashSet;

use questmem_core::{round_score, MatchResult};

use super::{MatchOutcome, QuestionService};
use crate::ServiceError;

impl QuestionService {
    /// Semantic vector similarity against every stored question.
    ///
    /// A question matches iff its similarity to the input strictly exceeds
    /// the threshold (`>`, not `>=`). Scores are reported as percentages
    /// rounded to two decimals. Result order follows store enumeration
    /// order; no re-ranking.
    pub async fn match_semantic(&self, text: &str) -> Result<MatchOutcome, ServiceError> {
        let input_vec = self.embedder.embed(text)?;
        let questions = self.store.scan_all().await?;

        let mut matches = Vec::new();
        for question in &questions {
            let stored_vec = self.embedder.embed(&question.text)?;
            let similarity = self.embedder.similarity(&input_vec, &stored_vec);
            if similarity > self.semantic_threshold {
                let score = round_score(f64::from(similarity) * 100.0);
                matches.push(MatchResult::from_question(question, score));
            }
        }
        Ok(MatchOutcome::from_matches(matches))
    }

    /// Lexical relevance via the store's full-text search.
    ///
    /// Scoring and descending order are delegated to the store; this only
    /// applies the strict threshold cut. A retrieval failure propagates
    /// without retry.
    pub async fn match_lexical(&self, text: &str) -> Result<MatchOutcome, ServiceError> {
        let hits = self.store.text_search(text).await?;
        let matches = hits
            .into_iter()
            .filter(|hit| hit.score > self.lexical_threshold)
            .map(|hit| MatchResult::from_question(&hit.question, hit.score))
            .collect();
        Ok(MatchOutcome::from_matches(matches))
    }

    /// Count stored questions sharing at least one lowercase whitespace
    /// token with the input.
    ///
    /// Each stored question contributes at most 1 regardless of how many
    /// tokens overlap. No stemming, no punctuation stripping.
    pub async fn count_word_overlap(&self, text: &str) -> Result<usize, ServiceError> {
        let input_words = word_set(text);
        if input_words.is_empty() {
            // Intersection with the empty set is always empty; skip the scan.
            return Ok(0);
        }

        let questions = self.store.scan_all().await?;
        let count = questions
            .iter()
            .filter(|q| {
                word_set(&q.text).intersection(&input_words).next().is_some()
            })
            .count();
        Ok(count)
    }
}

fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
