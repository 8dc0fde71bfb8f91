use std::sync::Arc;

use anyhow::Result;
use questmem_http::{create_router, AppState};

use super::build_service;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let service = Arc::new(build_service().await?);

    // The collapse job must finish before the listener binds. A failure here
    // is fatal: there is no degraded startup mode.
    let deleted = service.collapse_duplicates().await?;
    tracing::info!(deleted, "duplicate questions removed");

    let state = Arc::new(AppState { question_service: service });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
