//! # Authentication Middleware
//!
//! This module provides JWT issuing and the `AuthenticatedUser` extractor that
//! handlers use to require a logged-in dashboard user.

use crate::{errors::AppError, state::AppState};
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const ADMIN_ROLE: &str = "admin";

/// Represents the claims we put in, and expect to find in, the JWT.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The username.
    pub sub: String,
    pub role: String,
    /// The expiration timestamp.
    pub exp: usize,
}

/// Signs an HS256 token for `username` that expires after `ttl_secs`.
pub fn issue_token(
    username: &str,
    role: &str,
    secret: &str,
    ttl_secs: u64,
) -> Result<String, AppError> {
    let exp = Utc::now().timestamp().max(0) as usize + ttl_secs as usize;
    let claims = Claims {
        sub: username.to_string(),
        role: role.to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to sign token: {e}")))
}

/// An Axum extractor that provides the currently authenticated user.
///
/// A request without a bearer token, or with one that is invalid or expired,
/// is rejected with `401 Unauthorized`. Logging out is client-side: the
/// client drops its token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: String,
}

impl AuthenticatedUser {
    /// Fails with `403 Forbidden` unless the user has `role`.
    pub fn require_role(&self, role: &str) -> Result<(), AppError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!(
                "User '{}' does not have the '{role}' role.",
                self.username
            )))
        }
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Unauthorized("Authentication required.".to_string()))?;

        // `Validation::default()` checks the signature, the algorithm and `exp`.
        let token_data = decode::<Claims>(
            bearer.token(),
            &DecodingKey::from_secret(state.config.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| {
            warn!("JWT validation failed: {}", e);
            AppError::Unauthorized("Invalid or expired token.".to_string())
        })?;

        debug!(user = %token_data.claims.sub, role = %token_data.claims.role, "Authenticated request.");
        Ok(AuthenticatedUser {
            username: token_data.claims.sub,
            role: token_data.claims.role,
        })
    }
}
