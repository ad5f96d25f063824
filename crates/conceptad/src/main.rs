//! Concepta Daemon - local study assistant backend.
//!
//! Serves the study API over HTTP and forwards generation to a local
//! Ollama instance, with canned fallbacks when Ollama is down.

use anyhow::Result;
use concepta_common::ConceptaConfig;
use conceptad::server::{self, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Concepta backend v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match ConceptaConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config ({e:#}), using defaults");
            ConceptaConfig::default()
        }
    };

    let state = AppState::new(config);

    if state.llm.is_available().await {
        let models = state.llm.list_models().await;
        info!("Ollama is running, installed models: {}", models.join(", "));
    } else {
        warn!("Ollama not detected - run `ollama serve` to enable generation");
        warn!("Responses will use canned fallbacks until Ollama is reachable");
    }

    server::run(state).await
}
