//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `citizen-ai-server`.
//! The handlers are split into logical sub-modules based on the part of the
//! citizen portal they serve.

// Sub-modules for different handler categories.
pub mod auth_handlers;
pub mod chat_handlers;
pub mod concern_handlers;
pub mod dashboard_handlers;
pub mod feedback_handlers;
pub mod general;
pub mod service_handlers;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use auth_handlers::*;
pub use chat_handlers::*;
pub use concern_handlers::*;
pub use dashboard_handlers::*;
pub use feedback_handlers::*;
pub use general::*;
pub use service_handlers::*;

use super::errors::AppError;

/// Rejects a blank required field with `400 Bad Request`.
pub(crate) fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("'{field}' must not be empty.")));
    }
    Ok(trimmed)
}
