//! # Authentication Route Handlers
//!
//! Username/password login against the configured dashboard accounts.

use crate::{
    auth::middleware::issue_token,
    errors::AppError,
    state::AppState,
    types::{LoginRequest, LoginResponse},
};
use axum::{extract::State, Json};
use tracing::{info, warn};

pub async fn login_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let config = &app_state.config;
    let user = config
        .users
        .get(&payload.username)
        .filter(|user| user.password == payload.password)
        .ok_or_else(|| {
            warn!(username = %payload.username, "Rejected login.");
            AppError::Unauthorized("Invalid username or password".to_string())
        })?;

    let token = issue_token(
        &payload.username,
        &user.role,
        &config.jwt_secret,
        config.token_ttl_secs,
    )?;
    info!(username = %payload.username, role = %user.role, "User logged in.");

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: config.token_ttl_secs,
        role: user.role.clone(),
    }))
}
