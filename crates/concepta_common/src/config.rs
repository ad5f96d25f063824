//! Daemon configuration.
//!
//! Loaded from TOML with per-field defaults, so a partial file (or no
//! file at all) always yields a working configuration.

use crate::models::DEFAULT_MODEL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_model_name() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_probe_timeout() -> u64 {
    3
}

fn default_list_timeout() -> u64 {
    5
}

fn default_generate_timeout() -> u64 {
    60
}

/// Top-level daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConceptaConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Ollama client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model_name")]
    pub default_model: String,
    /// Availability probe timeout (seconds).
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,
    /// Installed-model listing timeout (seconds).
    #[serde(default = "default_list_timeout")]
    pub list_timeout_secs: u64,
    /// Completion timeout (seconds). Small local models can be slow.
    #[serde(default = "default_generate_timeout")]
    pub generate_timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model_name(),
            probe_timeout_secs: default_probe_timeout(),
            list_timeout_secs: default_list_timeout(),
            generate_timeout_secs: default_generate_timeout(),
        }
    }
}

impl ConceptaConfig {
    /// Get user config path: ~/.config/concepta/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("HOME not set")?;
        Ok(Path::new(&home)
            .join(".config")
            .join("concepta")
            .join("config.toml"))
    }

    /// Get system config path: /etc/concepta/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/concepta/config.toml")
    }

    /// Load configuration from file
    ///
    /// Priority:
    /// 1. User config (~/.config/concepta/config.toml)
    /// 2. System config (/etc/concepta/config.toml)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        Ok(Self::default())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConceptaConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}
