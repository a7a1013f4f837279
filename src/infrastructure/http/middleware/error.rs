use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
    Conflict(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Message used whenever a restrict-on-delete foreign key blocks a delete.
pub const REFERENCED_ELSEWHERE: &str = "Cannot delete: referenced elsewhere";

// Convert from sqlx errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                let message = db_err.message();
                // Services check parent rows before writes, so a foreign key
                // failure here is a restrict-on-delete hit.
                if message.contains("FOREIGN KEY") || message.contains("foreign key") {
                    ApiError::Conflict(REFERENCED_ELSEWHERE.to_string())
                } else if message.contains("UNIQUE") || message.contains("unique") {
                    if message.contains("email") {
                        ApiError::Conflict("A customer with this email already exists".to_string())
                    } else {
                        ApiError::Conflict("Duplicate value".to_string())
                    }
                } else if message.contains("CHECK") || message.contains("check constraint") {
                    ApiError::BadRequest(format!("Constraint violated: {}", message))
                } else {
                    ApiError::Internal(format!("Database error: {}", message))
                }
            }
            other => ApiError::Internal(format!("Database error: {}", other)),
        }
    }
}

// Convert from domain errors
impl From<crate::domain::errors::DomainError> for ApiError {
    fn from(err: crate::domain::errors::DomainError) -> Self {
        match err {
            crate::domain::errors::DomainError::NotFound(msg) => ApiError::NotFound(msg),
            crate::domain::errors::DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            crate::domain::errors::DomainError::Conflict(msg) => ApiError::Conflict(msg),
            crate::domain::errors::DomainError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn test_domain_errors_map_to_http_variants() {
        assert_eq!(
            ApiError::from(DomainError::ValidationError("bad".to_string())),
            ApiError::BadRequest("bad".to_string())
        );
        assert_eq!(
            ApiError::from(DomainError::NotFound("gone".to_string())),
            ApiError::NotFound("gone".to_string())
        );
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
            (ApiError::BadRequest("x".to_string()), StatusCode::BAD_REQUEST),
            (ApiError::Conflict("x".to_string()), StatusCode::CONFLICT),
            (ApiError::Internal("x".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_row_not_found_is_404() {
        assert!(matches!(
            ApiError::from(sqlx::Error::RowNotFound),
            ApiError::NotFound(_)
        ));
    }
}
