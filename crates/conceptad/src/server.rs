//! HTTP server for conceptad.

use crate::llm::LlmService;
use crate::routes;
use anyhow::{Context, Result};
use axum::Router;
use concepta_common::ConceptaConfig;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
///
/// Stateless per request: nothing here is mutated after startup.
pub struct AppState {
    pub config: ConceptaConfig,
    pub llm: LlmService,
}

impl AppState {
    pub fn new(config: ConceptaConfig) -> Self {
        let llm = LlmService::new(config.ollama.clone());
        Self { config, llm }
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::info_routes())
        .merge(routes::study_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        // Permissive CORS for the local dev frontend.
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server.
pub async fn run(state: AppState) -> Result<()> {
    let addr = state.config.server.bind_addr.clone();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
