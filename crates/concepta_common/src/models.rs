//! Known Ollama models.
//!
//! The fallback list is returned whenever the Ollama tags endpoint
//! cannot be reached or reports nothing installed, so the frontend's
//! model picker always has something to show.

use std::collections::HashMap;

/// Model the prompts are tuned for.
pub const DEFAULT_MODEL: &str = "phi3:mini";

/// Static fallback list used when Ollama is unreachable.
pub const FALLBACK_MODELS: &[&str] = &["phi3:mini", "llama3.2:3b", "mistral:7b", "llama3.1:8b"];

pub fn fallback_models() -> Vec<String> {
    FALLBACK_MODELS.iter().map(|m| m.to_string()).collect()
}

/// Human-readable specs for the models we know about.
pub fn model_specs() -> HashMap<String, String> {
    let mut specs = HashMap::new();
    specs.insert(
        "phi3:mini".to_string(),
        "3.8B parameters, ~4GB RAM".to_string(),
    );
    specs.insert(
        "llama3.2:3b".to_string(),
        "3B parameters, ~3GB RAM".to_string(),
    );
    specs.insert(
        "mistral:7b".to_string(),
        "7B parameters, ~7GB RAM".to_string(),
    );
    specs.insert(
        "llama3.1:8b".to_string(),
        "8B parameters, ~8GB RAM".to_string(),
    );
    specs
}
