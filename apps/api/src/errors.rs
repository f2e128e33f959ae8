use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::PayloadError;
use crate::extraction::ExtractionError;
use crate::llm_client::LlmError;

/// Failures inside the layout engine once a payload has been accepted.
/// None of these are retried; the caller resubmits a fresh request.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF encoding failed: {0}")]
    Encode(#[from] lopdf::Error),

    #[error("PDF write failed: {0}")]
    Write(#[from] std::io::Error),

    #[error("document stream already finalized")]
    StreamClosed,

    #[error("render task failed: {0}")]
    Task(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] PayloadError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Render failure: {0}")]
    Render(#[from] RenderError),

    #[error("Extraction failure: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Text generation is not configured")]
    GeneratorUnavailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error, details) = match &self {
            AppError::InvalidPayload(e) => (
                StatusCode::BAD_REQUEST,
                "INVALID_PAYLOAD",
                "Invalid resume payload",
                e.to_string(),
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid request",
                msg.clone(),
            ),
            AppError::Render(e) => {
                tracing::error!("Render failure: {}", error_chain(e));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_FAILURE",
                    "Failed to generate PDF",
                    error_chain(e),
                )
            }
            AppError::Extraction(e) => {
                tracing::warn!("Extraction failure: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILURE",
                    "Could not read text from the uploaded file. Please paste your resume text instead.",
                    e.to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "Content generation failed",
                    e.to_string(),
                )
            }
            AppError::GeneratorUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "GENERATOR_UNAVAILABLE",
                "Content generation is not available",
                "No text generation backend is configured".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred",
                    e.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error,
            "details": details,
            "code": code,
        }));

        (status, body).into_response()
    }
}

/// Formats an error with its `source()` chain, outermost first.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}
