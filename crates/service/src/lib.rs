//! Service layer for questmem
//!
//! Centralizes the duplicate-collapse job and the three similarity matchers
//! between HTTP handlers and the storage/embedding collaborators.

mod error;
mod question_service;

pub use error::ServiceError;
pub use question_service::{MatchOutcome, QuestionService};
