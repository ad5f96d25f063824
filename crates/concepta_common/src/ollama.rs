//! Wire types for the Ollama HTTP API.
//!
//! Covers the two endpoints the daemon uses: `GET /api/tags` for the
//! installed-model list and `POST /api/generate` for completions.

use serde::{Deserialize, Serialize};

/// Sampling options sent with every generate request.
///
/// Tuned for small local models; `num_predict` bounds the completion
/// length so a rambling model cannot hold a request open forever.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub num_predict: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.95,
            top_k: 40,
            num_predict: 1024,
        }
    }
}

/// Body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaGenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Body of a non-streaming generate response. Only the completion text
/// is used; other fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaGenerateResponse {
    #[serde(default)]
    pub response: String,
}

/// One installed model as reported by `GET /api/tags`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaModel {
    pub name: String,
}

/// Body of `GET /api/tags`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaTagsResponse {
    #[serde(default)]
    pub models: Vec<OllamaModel>,
}
