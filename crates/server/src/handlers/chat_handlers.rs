//! # Chat Route Handlers

use super::require_text;
use crate::{
    errors::AppError,
    state::AppState,
    types::{AskRequest, AskResponse, ChatHistoryResponse},
};
use axum::{extract::State, Json};
use tracing::info;

/// Answers a citizen's question and records the exchange.
///
/// The answer is either a trusted generation or the curated knowledge-base
/// text; the response does not say which.
pub async fn ask_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = require_text("question", &payload.question)?;
    info!(chars = question.len(), "Received chat question.");

    let answer = app_state.assistant.chat_response(question).await;
    let record = app_state.store.record_chat(question, &answer).await?;

    Ok(Json(AskResponse {
        success: true,
        response: record.ai_response,
        timestamp: record.timestamp,
    }))
}

/// Returns the most recent exchanges, oldest first.
pub async fn chat_history_handler(
    State(app_state): State<AppState>,
) -> Result<Json<ChatHistoryResponse>, AppError> {
    let history = app_state
        .store
        .recent_chats(app_state.config.history_limit)
        .await?;
    Ok(Json(ChatHistoryResponse { history }))
}
