use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("AI matching forbidden")]
    AiForbidden,

    #[error("AI service unreachable")]
    AiUnreachable,

    #[error("AI service busy")]
    AiBusy,

    #[error("AI service error: {0}")]
    AiUpstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Access denied".to_string(),
            ),
            AppError::AiForbidden => (
                StatusCode::FORBIDDEN,
                "AI_FORBIDDEN",
                "You are not authorized to use AI matching".to_string(),
            ),
            AppError::AiUnreachable => {
                tracing::warn!("AI matching service unreachable");
                (
                    StatusCode::BAD_GATEWAY,
                    "AI_UNREACHABLE",
                    "The AI matching service is unreachable. Please retry shortly.".to_string(),
                )
            }
            AppError::AiBusy => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI_BUSY",
                "The AI matching service is busy. Please retry shortly.".to_string(),
            ),
            AppError::AiUpstream(msg) => {
                tracing::error!("AI upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "AI_ERROR",
                    format!("Server error: {msg}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
