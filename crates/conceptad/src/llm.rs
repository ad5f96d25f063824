//! Ollama generation client.
//!
//! Every failure path ends in the mock responder: callers always get
//! completion text back, never an error. Backend problems are logged
//! and masked, one immediate fallback per request, no retries.

use crate::mock;
use anyhow::{Context, Result};
use concepta_common::{
    fallback_models, GenerateOptions, OllamaConfig, OllamaGenerateRequest, OllamaGenerateResponse,
    OllamaTagsResponse,
};
use std::time::Duration;
use tracing::{info, warn};

pub struct LlmService {
    http_client: reqwest::Client,
    config: OllamaConfig,
}

impl LlmService {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            http_client: reqwest::Client::builder().build().unwrap_or_default(),
            config,
        }
    }

    fn tags_url(&self) -> String {
        format!("{}/api/tags", self.config.base_url)
    }

    /// Short-timeout availability probe.
    ///
    /// False on any network error or non-success status, never an error.
    pub async fn is_available(&self) -> bool {
        self.http_client
            .get(self.tags_url())
            .timeout(Duration::from_secs(self.config.probe_timeout_secs))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Installed models, or the static fallback list when Ollama cannot
    /// be reached or reports nothing installed.
    pub async fn list_models(&self) -> Vec<String> {
        match self.fetch_models().await {
            Ok(models) if !models.is_empty() => models,
            Ok(_) => fallback_models(),
            Err(e) => {
                warn!("Failed to list Ollama models: {e:#}");
                fallback_models()
            }
        }
    }

    async fn fetch_models(&self) -> Result<Vec<String>> {
        let response = self
            .http_client
            .get(self.tags_url())
            .timeout(Duration::from_secs(self.config.list_timeout_secs))
            .send()
            .await
            .context("Failed to query Ollama tags")?;

        if !response.status().is_success() {
            anyhow::bail!("Ollama returned {}", response.status());
        }

        let tags: OllamaTagsResponse = response
            .json()
            .await
            .context("Failed to parse Ollama tags response")?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// Generate a completion for the prompt.
    ///
    /// Hard contract: always returns text. An unreachable backend
    /// short-circuits to the mock without burning the long timeout; any
    /// generate failure falls back the same way.
    pub async fn complete(&self, prompt: &str, model: &str) -> String {
        let preview: String = prompt.chars().take(100).collect();
        info!("[>]  Sending to {}: {}...", model, preview.replace('\n', " "));

        if !self.is_available().await {
            warn!("Ollama not running, using mock response");
            return mock::respond(prompt, model).await;
        }

        match self.generate(prompt, model).await {
            Ok(text) => {
                info!("[<]  Received {} chars from {}", text.len(), model);
                text
            }
            Err(e) => {
                warn!("Ollama generate failed: {e:#} - using mock response");
                mock::respond(prompt, model).await
            }
        }
    }

    async fn generate(&self, prompt: &str, model: &str) -> Result<String> {
        let request = OllamaGenerateRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            stream: false,
            options: GenerateOptions::default(),
        };

        let response = self
            .http_client
            .post(format!("{}/api/generate", self.config.base_url))
            .timeout(Duration::from_secs(self.config.generate_timeout_secs))
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Ollama")?;

        if !response.status().is_success() {
            anyhow::bail!("Ollama returned error {}", response.status());
        }

        let body: OllamaGenerateResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;
        Ok(body.response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Config pointing at a port nothing listens on.
    fn unreachable_config() -> OllamaConfig {
        OllamaConfig {
            base_url: "http://127.0.0.1:59999".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_is_available_false_when_unreachable() {
        let llm = LlmService::new(unreachable_config());
        assert!(!llm.is_available().await);
    }

    #[tokio::test]
    async fn test_list_models_falls_back_when_unreachable() {
        let llm = LlmService::new(unreachable_config());
        assert_eq!(llm.list_models().await, fallback_models());
    }

    #[tokio::test]
    async fn test_complete_falls_back_to_mock_when_unreachable() {
        let llm = LlmService::new(unreachable_config());
        let text = llm.complete("Explain \"recursion\"", "phi3:mini").await;
        assert!(text.contains("SIMPLE EXPLANATION:"));
    }
}
