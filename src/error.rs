// src/error.rs
use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::{
    gateway::GatewayError, interpreter::MalformedModelOutput, prompt::PromptError,
    session_manager::SessionError,
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no active conversation for this session")]
    NoActiveSession,
    #[error("failed to load manual from {}: {source}", .path.display())]
    ResourceLoadFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("model call failed: {0}")]
    GatewayFailure(#[from] GatewayError),
    #[error(transparent)]
    MalformedModelOutput(#[from] MalformedModelOutput),
    #[error("prompt rendering failed: {0}")]
    PromptEncoding(#[from] PromptError),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) => AppError::NoActiveSession,
            SessionError::Encoding(e) => AppError::PromptEncoding(PromptError::Encoding(e)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NoActiveSession => (
                StatusCode::CONFLICT,
                "no active conversation; start one with GET /".to_string(),
            ),
            _ => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
    }
}
