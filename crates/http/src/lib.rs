//! HTTP API server for questmem.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]

pub mod api_error;
mod handlers;
mod request_types;
mod response_types;

use std::sync::Arc;
use std::time::Duration;

use axum::http::Method;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use questmem_service::QuestionService;

pub use response_types::VersionResponse;

/// Preflight responses are cacheable for 24 hours.
const CORS_MAX_AGE_SECS: u64 = 86_400;

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Service carrying the store and embedder handles.
    pub question_service: Arc<QuestionService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(CORS_MAX_AGE_SECS));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/questions/", post(handlers::questions::create_question))
        .route("/questions/", get(handlers::questions::get_questions))
        .route("/questions/{id}", delete(handlers::questions::delete_question))
        .route("/questions/check-similarity/", post(handlers::similarity::check_similarity))
        .route("/questions/check-similarity-2/", post(handlers::similarity::check_similarity_lexical))
        .route("/questions/check-words/", post(handlers::similarity::check_words))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn root() -> Json<VersionResponse> {
    Json(VersionResponse { name: "questmem", version: env!("CARGO_PKG_VERSION") })
}

#[cfg(test)]
mod tests;
