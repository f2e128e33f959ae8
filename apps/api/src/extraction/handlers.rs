//! Axum route handlers for text extraction.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{ExtractionMethod, UploadedFile};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    pub text: String,
    pub method: ExtractionMethod,
    pub characters: usize,
}

/// POST /api/extract-text
///
/// Multipart upload with a `file` field. Returns the extracted text and which path
/// (direct or OCR) produced it.
pub async fn handle_extract_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractTextResponse>, AppError> {
    let file = read_file_field(&mut multipart).await?;
    info!(
        file_name = file.file_name.as_deref().unwrap_or(""),
        size = file.bytes.len(),
        "Extracting text from upload"
    );

    let extraction = state.extraction.extract(&file).await?;
    let characters = extraction.text.trim().chars().count();

    Ok(Json(ExtractTextResponse {
        text: extraction.text,
        method: extraction.method,
        characters,
    }))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        return Ok(UploadedFile {
            file_name,
            content_type,
            bytes,
        });
    }
    Err(AppError::Validation(format!(
        "multipart field `{FILE_FIELD}` is required"
    )))
}
