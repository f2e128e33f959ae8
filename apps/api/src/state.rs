use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ExtractionPipeline;
use crate::generation::TextGenerator;
use crate::layout::DocumentStyle;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Fixed page geometry and typography for every rendered document.
    pub style: Arc<DocumentStyle>,
    /// Direct PDF extraction with OCR fallback.
    pub extraction: ExtractionPipeline,
    /// `None` when no LLM key is configured.
    pub generator: Option<Arc<dyn TextGenerator>>,
}
