//! Bearer-token extraction for protected routes.
//!
//! Handlers opt in by taking a [`CurrentUser`] parameter; extraction rejects
//! with 401 before the handler body (and therefore any data manager) runs.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::auth::jwt;
use crate::error::AppError;
use crate::models::auth::UserSchema;
use crate::state::AppState;

/// The authenticated identity embedded in the request's bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserSchema);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::Unauthorized("Invalid token".to_string()))?;

        let claims = jwt::validate_token(token, &state.config.auth)
            .map_err(|_| AppError::Unauthorized("Invalid credentials".to_string()))?;

        Ok(CurrentUser(UserSchema { name: claims.name, email: claims.sub }))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}
