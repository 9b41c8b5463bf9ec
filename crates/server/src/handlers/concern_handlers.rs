//! # Concern Route Handlers
//!
//! Citizens file concerns with a category and priority; the description's
//! sentiment is recorded alongside for the dashboard.

use super::require_text;
use crate::{
    errors::AppError,
    state::AppState,
    types::{ConcernListResponse, ConcernRequest, ConcernResponse, ConcernSubmitResponse},
};
use axum::{
    extract::{Path, State},
    Json,
};
use citizen_ai::providers::db::storage::NewConcern;
use tracing::info;

pub async fn submit_concern_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ConcernRequest>,
) -> Result<Json<ConcernSubmitResponse>, AppError> {
    let concern = NewConcern {
        title: require_text("title", &payload.title)?.to_string(),
        description: require_text("description", &payload.description)?.to_string(),
        category: require_text("category", &payload.category)?.to_string(),
        priority: require_text("priority", &payload.priority)?.to_string(),
    };

    let sentiment = app_state
        .assistant
        .analyze_sentiment(&concern.description)
        .await;
    let record = app_state.store.record_concern(concern, sentiment).await?;
    info!(id = record.id, category = %record.category, priority = %record.priority, "Stored concern.");

    Ok(Json(ConcernSubmitResponse {
        success: true,
        concern_id: record.id,
        message: "Your concern has been submitted successfully!".to_string(),
    }))
}

pub async fn list_concerns_handler(
    State(app_state): State<AppState>,
) -> Result<Json<ConcernListResponse>, AppError> {
    let concerns = app_state.store.list_concerns().await?;
    Ok(Json(ConcernListResponse { concerns }))
}

pub async fn get_concern_handler(
    State(app_state): State<AppState>,
    Path(concern_id): Path<u64>,
) -> Result<Json<ConcernResponse>, AppError> {
    let concern = app_state
        .store
        .get_concern(concern_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Concern not found".to_string()))?;
    Ok(Json(ConcernResponse { concern }))
}
