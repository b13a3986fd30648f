use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::error::Error;
use std::fmt;

/// The primary error type for the application.
///
/// Consolidates every failure the request path can produce, providing a
/// unified way to map them onto HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Internal server errors that are not expected to be handled by the client.
    Internal(anyhow::Error),
    /// Client errors due to invalid requests.
    BadRequest(String),
    /// A requested resource does not exist.
    NotFound(String),
    /// A request conflicts with the current state (e.g. duplicate email).
    Conflict(String),
    /// A dependency (pool, object store) is temporarily unavailable.
    ServiceUnavailable(String),
    /// Errors from the relational store.
    Database(String),
    /// Errors from the object store.
    ObjectStore(String),
    /// Missing, malformed or expired credentials.
    Unauthorized(String),
    /// A specific request field failed validation.
    ValidationError {
        field: String,
        message: String,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::ObjectStore(msg) => write!(f, "Object store error: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::ValidationError { field, message } => {
                write!(f, "Validation error on field '{}': {}", field, message)
            }
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Internal(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, error_message, details) = match self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                let error_id = uuid::Uuid::new_v4();
                tracing::error!("Error ID: {}", error_id);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    Some(json!({ "error_id": error_id.to_string() })),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg, None),
            AppError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE", msg, None)
            }
            AppError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                    Some(json!({ "details": msg })),
                )
            }
            AppError::ObjectStore(msg) => {
                tracing::error!("Object store error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "OBJECT_STORE_ERROR",
                    "An object store error occurred".to_string(),
                    Some(json!({ "details": msg })),
                )
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg, None),
            AppError::ValidationError { field, message } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Validation failed for field '{}'", field),
                Some(json!({ "field": field, "message": message })),
            ),
        };

        let mut body = json!({
            "error": {
                "code": error_code,
                "message": error_message,
            },
            "status": status.as_u16(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        if let Some(details) = details {
            body["error"]["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err) => {
                AppError::Database(format!("Database error: {}", db_err.message()))
            }
            sqlx::Error::PoolTimedOut => {
                AppError::ServiceUnavailable("Database connection pool timed out".to_string())
            }
            _ => AppError::Database(format!("Database error: {}", err)),
        }
    }
}

/// A type alias for `Result<T, AppError>`, used throughout the application.
pub type AppResult<T> = Result<T, AppError>;

/// An extension trait for `Option` that converts absence into a `NotFound` error
/// at the route boundary.
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(format!("{} not found", entity)))
    }
}

/// Helper functions for request validation.
pub mod validation {
    use super::*;

    /// Minimum length for search queries across every search endpoint.
    pub const MIN_SEARCH_LEN: usize = 3;

    /// Rejects search queries shorter than [`MIN_SEARCH_LEN`] characters.
    pub fn validate_search_query(q: &str) -> AppResult<()> {
        if q.chars().count() < MIN_SEARCH_LEN {
            return Err(AppError::ValidationError {
                field: "q".to_string(),
                message: format!("Query must be at least {} characters long", MIN_SEARCH_LEN),
            });
        }
        Ok(())
    }

    /// Validates pagination parameters for paginated listings.
    pub fn validate_pagination(page: i64, page_size: i64) -> AppResult<()> {
        if page < 1 {
            return Err(AppError::ValidationError {
                field: "page".to_string(),
                message: format!("Page must be >= 1, got {}", page),
            });
        }
        if !(1..=100).contains(&page_size) {
            return Err(AppError::ValidationError {
                field: "page_size".to_string(),
                message: format!("Page size must be in 1..=100, got {}", page_size),
            });
        }
        Ok(())
    }
}
