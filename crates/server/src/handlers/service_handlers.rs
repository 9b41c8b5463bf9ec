//! # Service Catalogue Handlers

use crate::{
    state::AppState,
    types::{HelpParams, HelpResponse},
};
use axum::{
    extract::{Query, State},
    Json,
};
use citizen_ai::knowledge::ServiceCategory;

pub async fn service_categories_handler(
    State(app_state): State<AppState>,
) -> Json<Vec<ServiceCategory>> {
    Json(app_state.assistant.knowledge().service_categories())
}

/// Quick help for a category, or the general tips when none is given.
pub async fn quick_help_handler(
    State(app_state): State<AppState>,
    Query(params): Query<HelpParams>,
) -> Json<HelpResponse> {
    let help = app_state
        .assistant
        .knowledge()
        .quick_help(params.category.as_deref())
        .to_string();
    Json(HelpResponse { help })
}
