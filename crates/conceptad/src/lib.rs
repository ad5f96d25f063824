//! Concepta daemon library.
//!
//! Thin HTTP backend that turns study-assistance requests (explain a
//! concept, summarize notes, generate a quiz or flashcards) into Ollama
//! prompts and heuristically parses the free-text replies into
//! structured results. When Ollama is unreachable the mock responder
//! keeps every endpoint usable with canned output.

pub mod defaults;
pub mod interpret;
pub mod llm;
pub mod mock;
pub mod prompt;
pub mod routes;
pub mod server;
