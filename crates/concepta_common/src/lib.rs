//! Concepta Common - shared types for the Concepta study backend.
//!
//! Request/response schemas for the HTTP API, wire types for the Ollama
//! API, the known-model catalog, and daemon configuration.

pub mod api;
pub mod config;
pub mod models;
pub mod ollama;

pub use api::*;
pub use config::*;
pub use models::*;
pub use ollama::*;
