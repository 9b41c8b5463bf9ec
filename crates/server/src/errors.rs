use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use citizen_ai::StoreError;
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// This enum encapsulates the errors a handler can return, so each one is
/// converted into the right HTTP status with a `{"error": ...}` body.
/// Generation failures never show up here; the assistant absorbs them.
#[derive(Debug)]
pub enum AppError {
    /// Errors from the interaction store.
    Store(StoreError),
    /// A required field was missing or blank.
    BadRequest(String),
    NotFound(String),
    /// Missing, invalid or expired credentials.
    Unauthorized(String),
    /// Valid credentials without the required role.
    Forbidden(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Store(err) => {
                error!("StoreError: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not access stored records.".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unauthorized(msg) => {
                warn!("Unauthorized request: {msg}");
                (StatusCode::UNAUTHORIZED, msg)
            }
            AppError::Forbidden(msg) => {
                warn!("Forbidden request: {msg}");
                (StatusCode::FORBIDDEN, msg)
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
