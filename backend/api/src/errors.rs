//! Application-wide error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use qf_engine::EngineError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("session not found: {0}")]
    SessionNotFound(u64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            // A path naming a session or project that does not exist.
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Engine(EngineError::UnknownProject(_)) => StatusCode::NOT_FOUND,
            // Anything else the engine rejects is a bad request body.
            ApiError::Engine(_) => StatusCode::BAD_REQUEST,
            ApiError::Json(_) | ApiError::Io(_) | ApiError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
