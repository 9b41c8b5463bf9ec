//! # Feedback Route Handlers

use super::require_text;
use crate::{
    errors::AppError,
    state::AppState,
    types::{AnalyzeParams, AnalyzeResponse, FeedbackRequest, FeedbackResponse},
};
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

pub async fn submit_feedback_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let text = require_text("feedback_text", &payload.feedback_text)?;

    let sentiment = app_state.assistant.analyze_sentiment(text).await;
    let record = app_state.store.record_feedback(text, sentiment).await?;
    info!(id = record.id, %sentiment, "Stored feedback.");

    Ok(Json(FeedbackResponse {
        success: true,
        sentiment,
        message: "Thank you for your feedback!".to_string(),
    }))
}

/// Classifies `text` without storing anything.
pub async fn analyze_feedback_handler(
    State(app_state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Json<AnalyzeResponse> {
    let sentiment = app_state.assistant.analyze_sentiment(&params.text).await;
    Json(AnalyzeResponse {
        text: params.text,
        sentiment,
    })
}
