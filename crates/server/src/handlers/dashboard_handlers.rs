//! # Dashboard Route Handlers
//!
//! This module contains handlers for endpoints that require the `admin` role.

use crate::{
    auth::middleware::{AuthenticatedUser, ADMIN_ROLE},
    errors::AppError,
    state::AppState,
};
use axum::{extract::State, Json};
use chrono::Utc;
use citizen_ai::dashboard::{Analytics, DashboardSummary};
use tracing::info;

/// Totals, breakdowns and the latest activity of every record kind.
pub async fn dashboard_summary_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<DashboardSummary>, AppError> {
    user.require_role(ADMIN_ROLE)?;
    info!(user = %user.username, "Serving dashboard summary.");

    let store = &app_state.store;
    let feedback = store.list_feedback().await?;
    let concerns = store.list_concerns().await?;
    let chats = store.recent_chats(usize::MAX).await?;

    Ok(Json(DashboardSummary::from_records(
        &feedback, &concerns, &chats,
    )))
}

pub async fn dashboard_analytics_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Analytics>, AppError> {
    user.require_role(ADMIN_ROLE)?;

    let store = &app_state.store;
    let feedback = store.list_feedback().await?;
    let concerns = store.list_concerns().await?;
    let chats = store.recent_chats(usize::MAX).await?;

    Ok(Json(Analytics::from_records(
        &feedback,
        &concerns,
        &chats,
        Utc::now(),
    )))
}
