//! Request and response schemas for the HTTP API.
//!
//! Request defaults mirror what the frontend sends when a field is
//! omitted; every result type is fully populated before it leaves a
//! handler (the defaulting policy guarantees no empty fields).

use crate::models::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_difficulty() -> String {
    "beginner".to_string()
}

fn default_length() -> String {
    "medium".to_string()
}

fn default_quiz_type() -> String {
    "mixed".to_string()
}

fn default_quiz_difficulty() -> String {
    "medium".to_string()
}

fn default_quiz_count() -> usize {
    3
}

fn default_flashcard_count() -> usize {
    5
}

fn default_question_type() -> String {
    "short".to_string()
}

// ============================================================================
// Study Requests
// ============================================================================

/// Request to explain a concept at a given difficulty level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub topic: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_model")]
    pub model: String,
}

/// Request to summarize study notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub notes: String,
    #[serde(default = "default_length")]
    pub length: String,
    #[serde(default = "default_model")]
    pub model: String,
}

/// Request to generate quiz questions from content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub content: String,
    #[serde(rename = "type", default = "default_quiz_type")]
    pub quiz_type: String,
    #[serde(default = "default_quiz_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_quiz_count")]
    pub count: usize,
    #[serde(default = "default_model")]
    pub model: String,
}

/// Request to generate flashcards from content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardsRequest {
    pub content: String,
    #[serde(default = "default_flashcard_count")]
    pub count: usize,
    #[serde(default = "default_model")]
    pub model: String,
}

// ============================================================================
// Study Results
// ============================================================================

/// Structured explanation of a concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResult {
    pub topic: String,
    pub difficulty: String,
    pub simple_explanation: String,
    pub steps: Vec<String>,
    pub analogy: String,
    pub key_points: Vec<String>,
}

/// A term/definition pair extracted from a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub term: String,
    pub definition: String,
}

/// Structured summary of study notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    pub length: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub definitions: Vec<Definition>,
    pub exam_tips: Vec<String>,
}

/// A single quiz question.
///
/// `options` is present only for multiple-choice questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    #[serde(rename = "type", default = "default_question_type")]
    pub question_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
    pub explanation: String,
}

/// A generated quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub difficulty: String,
    #[serde(rename = "type")]
    pub quiz_type: String,
    pub questions: Vec<QuizQuestion>,
}

/// A single question/answer flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// A generated flashcard deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardResult {
    pub flashcards: Vec<Flashcard>,
}

// ============================================================================
// Info Responses
// ============================================================================

/// Service banner returned from the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub model: String,
    pub endpoints: Vec<String>,
    pub instructions: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub ollama_connected: bool,
    pub model: String,
}

/// Installed (or fallback) model list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// Detailed model information for the frontend's model picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    pub current_model: String,
    pub available_models: Vec<String>,
    pub optimized_for: String,
    pub specs: HashMap<String, String>,
    pub ollama_running: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_request_defaults() {
        let req: ExplainRequest = serde_json::from_str(r#"{"topic": "recursion"}"#).unwrap();
        assert_eq!(req.topic, "recursion");
        assert_eq!(req.difficulty, "beginner");
        assert_eq!(req.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_quiz_request_defaults() {
        let req: QuizRequest = serde_json::from_str(r#"{"content": "notes"}"#).unwrap();
        assert_eq!(req.quiz_type, "mixed");
        assert_eq!(req.difficulty, "medium");
        assert_eq!(req.count, 3);
    }

    #[test]
    fn test_quiz_request_type_field_name() {
        let req: QuizRequest =
            serde_json::from_str(r#"{"content": "notes", "type": "mcq"}"#).unwrap();
        assert_eq!(req.quiz_type, "mcq");
    }

    #[test]
    fn test_flashcards_request_defaults() {
        let req: FlashcardsRequest = serde_json::from_str(r#"{"content": "notes"}"#).unwrap();
        assert_eq!(req.count, 5);
    }

    #[test]
    fn test_quiz_question_omits_options_when_absent() {
        let q = QuizQuestion {
            question: "Q?".to_string(),
            question_type: "short".to_string(),
            options: None,
            answer: "A".to_string(),
            explanation: "E".to_string(),
        };
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("options").is_none());
        assert_eq!(json["type"], "short");
    }

    #[test]
    fn test_quiz_question_serializes_options_for_mcq() {
        let q = QuizQuestion {
            question: "Q?".to_string(),
            question_type: "mcq".to_string(),
            options: Some(vec!["A".to_string(), "B".to_string()]),
            answer: "B".to_string(),
            explanation: "E".to_string(),
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["options"].as_array().unwrap().len(), 2);
    }
}
