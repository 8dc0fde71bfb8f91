//! Router-level tests over a stub store, exercising handlers end to end
//! with `tower::ServiceExt::oneshot`.

#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use questmem_core::{DuplicateGroup, Question, ScoredQuestion};
use questmem_embeddings::HashEmbedder;
use questmem_service::QuestionService;
use questmem_storage::{QuestionStore, StorageError};

use crate::{create_router, AppState};

#[derive(Default)]
struct MemoryStore {
    questions: Mutex<Vec<Question>>,
    next_id: AtomicU64,
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn insert(
        &self,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Question, StorageError> {
        let id = format!("q-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let question = Question { id, text: text.to_owned(), created_at };
        self.questions.lock().unwrap().push(question.clone());
        Ok(question)
    }

    async fn delete_one(&self, id: &str) -> Result<u64, StorageError> {
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok((before - questions.len()) as u64)
    }

    async fn delete_many(&self, ids: &[String]) -> Result<u64, StorageError> {
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| !ids.contains(&q.id));
        Ok((before - questions.len()) as u64)
    }

    async fn count(&self) -> Result<u64, StorageError> {
        Ok(self.questions.lock().unwrap().len() as u64)
    }

    async fn scan_all(&self) -> Result<Vec<Question>, StorageError> {
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn duplicate_groups(&self) -> Result<Vec<DuplicateGroup>, StorageError> {
        Ok(Vec::new())
    }

    async fn text_search(&self, query: &str) -> Result<Vec<ScoredQuestion>, StorageError> {
        // Naive term-frequency scoring, descending — enough to exercise the
        // lexical endpoint without a real index.
        let terms: Vec<String> =
            query.split_whitespace().map(str::to_lowercase).collect();
        let mut hits: Vec<ScoredQuestion> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter_map(|q| {
                let score = q
                    .text
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .filter(|w| terms.contains(w))
                    .count() as f64;
                (score > 0.0).then(|| ScoredQuestion { question: q.clone(), score })
            })
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(hits)
    }
}

fn test_router() -> axum::Router {
    let service =
        QuestionService::new(Arc::new(MemoryStore::default()), Arc::new(HashEmbedder::new()));
    create_router(Arc::new(AppState { question_service: Arc::new(service) }))
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_root_reports_version() {
    let response = test_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "questmem");
}

#[tokio::test]
async fn test_create_then_count() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/questions/",
            serde_json::json!({"text": "What is a black hole?"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["text"], "What is a black hole?");
    assert!(created["id"].is_string());
    assert!(created["created_at"].is_string());

    let response = router
        .oneshot(Request::builder().uri("/questions/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total_questions"], 1);
}

#[tokio::test]
async fn test_create_empty_text_is_bad_request() {
    let response = test_router()
        .oneshot(json_request("POST", "/questions/", serde_json::json!({"text": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_delete_missing_question_is_not_found() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/questions/no-such-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_existing_question() {
    let router = test_router();
    let response = router
        .clone()
        .oneshot(json_request("POST", "/questions/", serde_json::json!({"text": "delete me"})))
        .await
        .unwrap();
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/questions/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Question deleted successfully");
}

#[tokio::test]
async fn test_check_similarity_matches_identical_text() {
    let router = test_router();
    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/questions/",
            serde_json::json!({"text": "What is a black hole?"}),
        ))
        .await
        .unwrap();

    let response = router
        .oneshot(json_request(
            "POST",
            "/questions/check-similarity/",
            serde_json::json!({"text": "What is a black hole?"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["similarity_count"], 1);
    assert_eq!(json["similar_questions"][0]["score"], 100.0);
}

#[tokio::test]
async fn test_check_similarity_lexical_endpoint() {
    let router = test_router();
    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/questions/",
            serde_json::json!({"text": "black hole black hole black hole"}),
        ))
        .await
        .unwrap();

    let response = router
        .oneshot(json_request(
            "POST",
            "/questions/check-similarity-2/",
            serde_json::json!({"text": "black hole"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    // Six term hits score 6.0, above the 2.5 threshold.
    assert_eq!(json["similarity_count"], 1);
}

#[tokio::test]
async fn test_check_words() {
    let router = test_router();
    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/questions/",
            serde_json::json!({"text": "beta gamma"}),
        ))
        .await
        .unwrap();

    let response = router
        .oneshot(json_request(
            "POST",
            "/questions/check-words/",
            serde_json::json!({"text": "Alpha Beta"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["match_count"], 1);
}

#[tokio::test]
async fn test_check_words_empty_corpus() {
    let response = test_router()
        .oneshot(json_request(
            "POST",
            "/questions/check-words/",
            serde_json::json!({"text": "anything"}),
        ))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["match_count"], 0);
}
