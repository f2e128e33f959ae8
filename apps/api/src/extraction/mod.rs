//! Text extraction from uploaded résumé files.
//!
//! Direct PDF text extraction first; when it fails or yields too little text the
//! pipeline falls back to an `OcrEngine`. Both backends sit behind traits held in
//! `AppState`, so they can be swapped without touching the handler.

pub mod handlers;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file type `{0}`; upload a PDF")]
    UnsupportedType(String),

    #[error("DOCX files are not supported yet; upload a PDF")]
    DocxUnsupported,

    #[error("uploaded file is empty")]
    EmptyFile,

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("OCR is not available on this server")]
    OcrUnavailable,

    #[error(
        "direct extraction yielded {found} characters (minimum {required}) and the OCR fallback failed: {reason}"
    )]
    FallbackFailed {
        found: usize,
        required: usize,
        reason: String,
    },

    #[error("extraction task failed: {0}")]
    Task(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Input / output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// What kind of document an upload is, judged by MIME type, then file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Other,
}

impl UploadedFile {
    pub fn kind(&self) -> FileKind {
        let mime = self
            .content_type
            .as_deref()
            .map(|m| m.split(';').next().unwrap_or(m).trim().to_ascii_lowercase());
        match mime.as_deref() {
            Some(PDF_MIME) => return FileKind::Pdf,
            Some(DOCX_MIME) => return FileKind::Docx,
            Some("application/octet-stream") | None => {}
            Some(_) => return FileKind::Other,
        }

        let name = self.file_name.as_deref().unwrap_or("").to_ascii_lowercase();
        if name.ends_with(".pdf") {
            FileKind::Pdf
        } else if name.ends_with(".docx") {
            FileKind::Docx
        } else {
            FileKind::Other
        }
    }

    fn describe_type(&self) -> String {
        self.content_type
            .clone()
            .or_else(|| self.file_name.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    Direct,
    Ocr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub text: String,
    pub method: ExtractionMethod,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait seams
// ────────────────────────────────────────────────────────────────────────────

/// Reads embedded text out of a document.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError>;
}

/// Recognizes text in a rendered document image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, file: &UploadedFile) -> Result<String, ExtractionError>;
}

/// `pdf-extract` backend. Parsing is CPU-bound and runs on the blocking pool; a panic
/// inside the parser surfaces as `ExtractionError::Task`.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError> {
        let bytes = file.bytes.clone();
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes)
                .map_err(|e| ExtractionError::Pdf(e.to_string()))
        })
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))?
    }
}

/// OCR backend used when no engine is configured.
pub struct UnavailableOcr;

#[async_trait]
impl OcrEngine for UnavailableOcr {
    async fn recognize(&self, _file: &UploadedFile) -> Result<String, ExtractionError> {
        Err(ExtractionError::OcrUnavailable)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fallback chain
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ExtractionPipeline {
    extractor: Arc<dyn TextExtractor>,
    ocr: Arc<dyn OcrEngine>,
    /// Direct extraction must yield more than this many characters (trimmed).
    min_chars: usize,
}

impl ExtractionPipeline {
    pub fn new(extractor: Arc<dyn TextExtractor>, ocr: Arc<dyn OcrEngine>, min_chars: usize) -> Self {
        Self {
            extractor,
            ocr,
            min_chars,
        }
    }

    /// Validates the upload, tries direct extraction, falls back to OCR.
    ///
    /// Fails closed: never returns empty text.
    pub async fn extract(&self, file: &UploadedFile) -> Result<Extraction, ExtractionError> {
        match file.kind() {
            FileKind::Pdf => {}
            FileKind::Docx => return Err(ExtractionError::DocxUnsupported),
            FileKind::Other => return Err(ExtractionError::UnsupportedType(file.describe_type())),
        }
        if file.bytes.is_empty() {
            return Err(ExtractionError::EmptyFile);
        }

        let found = match self.extractor.extract(file).await {
            Ok(text) => {
                let found = text.trim().chars().count();
                if found > self.min_chars {
                    info!(characters = found, "Direct text extraction succeeded");
                    return Ok(Extraction {
                        text,
                        method: ExtractionMethod::Direct,
                    });
                }
                warn!(
                    characters = found,
                    min_chars = self.min_chars,
                    "Not enough text extracted directly, falling back to OCR"
                );
                found
            }
            Err(e) => {
                warn!("Direct text extraction failed, falling back to OCR: {e}");
                0
            }
        };

        let reason = match self.ocr.recognize(file).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(characters = text.trim().chars().count(), "OCR extraction succeeded");
                return Ok(Extraction {
                    text,
                    method: ExtractionMethod::Ocr,
                });
            }
            Ok(_) => "OCR produced no text".to_string(),
            Err(e) => e.to_string(),
        };

        Err(ExtractionError::FallbackFailed {
            found,
            required: self.min_chars,
            reason,
        })
    }
}
