//! POST /api/chatbot — forwards a question plus the catalog context to the LLM.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::error;

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    routes::chatbot::{
        chat_request::{ChatRequest, ChatResponse},
        prompt,
    },
};

/// Handler: POST /api/chatbot
///
/// Stateless passthrough: the entire conversation state arrives in the
/// request, the whole catalog is serialized into the prompt, and the
/// model's answer is returned untouched.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3000/api/chatbot \
///   -H 'content-type: application/json' \
///   -d '{"question":"How many seats does the BJP hold?","history":""}'
/// ```
pub async fn chatbot(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let question = body
        .question
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .ok_or(AppError::MissingQuestion)?;
    let history = body.history.as_deref().unwrap_or("");

    let context = state.catalog.context_json()?;
    let full_prompt = prompt::build_prompt(&context, history, question);

    let answer = state
        .generator
        .generate(&full_prompt)
        .await
        .map_err(|e| {
            // Клиенту уходит только общий ответ; детали остаются в логах.
            error!(error = %e, "chatbot generation failed");
            AppError::Upstream(e)
        })?;

    Ok(Json(ChatResponse { answer }))
}
