//! Axum route handlers for PDF rendering.

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::document::ResumePayload;
use crate::errors::{AppError, RenderError};
use crate::layout::DocumentStyle;
use crate::render::{render_resume, sample::sample_payload, RenderedDocument};
use crate::state::AppState;

const TEST_PDF_FILENAME: &str = "test.pdf";

/// POST /api/generate-pdf
///
/// Body: a résumé payload (raw `content` or structured fields). Responds with the
/// finished PDF as an attachment.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload = ResumePayload::from_slice(&body)?;
    info!(
        mode = payload.mode(),
        document_type = payload.document_type().slug(),
        "Generating PDF"
    );

    let document = render_blocking(payload, state.style.clone()).await?;
    info!(
        filename = %document.filename,
        pages = document.pages,
        sections = document.sections,
        bytes = document.bytes.len(),
        "PDF generated"
    );
    Ok(pdf_response(document.bytes, &document.filename))
}

/// GET /api/test-pdf
///
/// Fixed example document for smoke-testing a deployment.
pub async fn handle_test_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let document = render_blocking(sample_payload(), state.style.clone()).await?;
    Ok(pdf_response(document.bytes, TEST_PDF_FILENAME))
}

/// Runs the CPU-bound render on the blocking pool.
async fn render_blocking(
    payload: ResumePayload,
    style: Arc<DocumentStyle>,
) -> Result<RenderedDocument, RenderError> {
    tokio::task::spawn_blocking(move || render_resume(&payload, &style, Utc::now()))
        .await
        .map_err(|e| RenderError::Task(e.to_string()))?
}

fn pdf_response(bytes: Vec<u8>, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    )
        .into_response()
}
