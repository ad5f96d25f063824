//! API routes for conceptad.
//!
//! Study handlers all follow the same shape: truncate input, build the
//! prompt, complete (mock on failure), interpret, backfill defaults.
//! Generation never errors by contract, so handlers return plain JSON.

use crate::defaults;
use crate::interpret;
use crate::prompt;
use crate::server::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use concepta_common::{
    model_specs, ExplainRequest, ExplainResult, FlashcardResult, FlashcardsRequest,
    HealthResponse, ModelInfoResponse, ModelsResponse, QuizRequest, QuizResult, RootResponse,
    SummarizeRequest, SummaryResult, DEFAULT_MODEL,
};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

pub const SERVICE_NAME: &str = "Concepta API";

// ============================================================================
// Info Routes
// ============================================================================

pub fn info_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/models", get(get_models))
        .route("/model-info", get(model_info))
}

async fn root(State(state): State<AppStateArc>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Concepta API is running!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.config.ollama.default_model.clone(),
        endpoints: vec![
            "GET /health".to_string(),
            "GET /models".to_string(),
            "GET /model-info".to_string(),
            "POST /explain".to_string(),
            "POST /summarize".to_string(),
            "POST /quiz".to_string(),
            "POST /flashcards".to_string(),
        ],
        instructions: "Open frontend at http://localhost:3000".to_string(),
    })
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        ollama_connected: state.llm.is_available().await,
        model: state.config.ollama.default_model.clone(),
    })
}

async fn get_models(State(state): State<AppStateArc>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.llm.list_models().await,
    })
}

async fn model_info(State(state): State<AppStateArc>) -> Json<ModelInfoResponse> {
    Json(ModelInfoResponse {
        current_model: state.config.ollama.default_model.clone(),
        available_models: state.llm.list_models().await,
        optimized_for: DEFAULT_MODEL.to_string(),
        specs: model_specs(),
        ollama_running: state.llm.is_available().await,
    })
}

// ============================================================================
// Study Routes
// ============================================================================

pub fn study_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/explain", post(explain_concept))
        .route("/summarize", post(summarize_notes))
        .route("/quiz", post(generate_quiz))
        .route("/flashcards", post(generate_flashcards))
}

async fn explain_concept(
    State(state): State<AppStateArc>,
    Json(req): Json<ExplainRequest>,
) -> Json<ExplainResult> {
    let topic = prompt::truncate_chars(&req.topic, prompt::MAX_TOPIC_CHARS);
    info!("[Q]  Explain: {} ({})", topic, req.difficulty);

    let text = state
        .llm
        .complete(&prompt::explain_prompt(&topic, &req.difficulty), &req.model)
        .await;

    let mut fields = interpret::parse_explain(&text);
    defaults::backfill_explain(&mut fields, &topic, &req.difficulty);

    Json(ExplainResult {
        topic,
        difficulty: req.difficulty,
        simple_explanation: fields.simple_explanation,
        steps: fields.steps,
        analogy: fields.analogy,
        key_points: fields.key_points,
    })
}

async fn summarize_notes(
    State(state): State<AppStateArc>,
    Json(req): Json<SummarizeRequest>,
) -> Json<SummaryResult> {
    let notes = prompt::truncate_chars(&req.notes, prompt::MAX_NOTES_CHARS);
    info!("[Q]  Summarize: {} chars ({})", notes.len(), req.length);

    let text = state
        .llm
        .complete(&prompt::summarize_prompt(&notes), &req.model)
        .await;

    let mut fields = interpret::parse_summary(&text);
    defaults::backfill_summary(&mut fields, &req.length);

    Json(SummaryResult {
        length: req.length,
        summary: fields.summary,
        key_points: fields.key_points,
        definitions: fields.definitions,
        exam_tips: fields.exam_tips,
    })
}

async fn generate_quiz(
    State(state): State<AppStateArc>,
    Json(req): Json<QuizRequest>,
) -> Json<QuizResult> {
    let content = prompt::truncate_chars(&req.content, prompt::MAX_QUIZ_CONTENT_CHARS);
    let count = req.count.min(prompt::MAX_QUIZ_QUESTIONS);
    info!("[Q]  Quiz: {} questions ({})", count, req.difficulty);

    let text = state
        .llm
        .complete(&prompt::quiz_prompt(&content, count), &req.model)
        .await;

    let mut questions = interpret::parse_quiz(&text, count);
    if questions.is_empty() {
        questions = defaults::fallback_quiz(&content);
    }

    Json(QuizResult {
        difficulty: req.difficulty,
        quiz_type: req.quiz_type,
        questions,
    })
}

async fn generate_flashcards(
    State(state): State<AppStateArc>,
    Json(req): Json<FlashcardsRequest>,
) -> Json<FlashcardResult> {
    let content = prompt::truncate_chars(&req.content, prompt::MAX_FLASHCARD_CONTENT_CHARS);
    let count = req.count.min(prompt::MAX_FLASHCARDS);
    info!("[Q]  Flashcards: {} cards", count);

    let text = state
        .llm
        .complete(&prompt::flashcards_prompt(&content, count), &req.model)
        .await;

    let mut flashcards = interpret::parse_flashcards(&text, count);
    if flashcards.is_empty() {
        flashcards = defaults::fallback_flashcards(&content);
    }

    Json(FlashcardResult { flashcards })
}
