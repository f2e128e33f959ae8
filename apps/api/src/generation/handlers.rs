//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::DocumentType;
use crate::errors::AppError;
use crate::generation::{extract_role, GenerationRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(default)]
    pub profile: Value,
    #[serde(default)]
    pub job_description: String,
    pub document_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    pub content: String,
    pub role: String,
    pub document_type: DocumentType,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-content
///
/// Generates résumé or cover-letter text for a profile and job description. The
/// response `content` can be posted straight to /api/generate-pdf along with `role`
/// and `documentType`.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    Json(request): Json<GenerateContentRequest>,
) -> Result<Json<GenerateContentResponse>, AppError> {
    let generator = state.generator.clone().ok_or(AppError::GeneratorUnavailable)?;

    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let document_type = match request.document_type.as_deref() {
        None => DocumentType::default(),
        Some(raw) => DocumentType::parse(raw).ok_or_else(|| {
            AppError::Validation(format!(
                "documentType must be `resume` or `cover-letter`, got `{raw}`"
            ))
        })?,
    };

    let role = extract_role(&request.job_description);
    let content = generator
        .generate(&GenerationRequest {
            profile: request.profile,
            job_description: request.job_description,
            document_type,
        })
        .await?;

    Ok(Json(GenerateContentResponse {
        content,
        role,
        document_type,
    }))
}
