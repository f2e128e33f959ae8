mod config;
mod document;
mod errors;
mod extraction;
mod generation;
mod layout;
mod llm_client;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::{ExtractionPipeline, PdfTextExtractor, UnavailableOcr};
use crate::generation::{LlmTextGenerator, TextGenerator};
use crate::layout::DocumentStyle;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a malformed value aborts startup.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http=info",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Builder API v{}", env!("CARGO_PKG_VERSION"));

    let style = Arc::new(DocumentStyle::a4());
    info!(
        "Page geometry: {}x{}pt, margin {}pt",
        style.page_width, style.page_height, style.margin
    );

    let extraction = ExtractionPipeline::new(
        Arc::new(PdfTextExtractor),
        Arc::new(UnavailableOcr),
        config.extraction_min_chars,
    );

    let generator = build_generator(&config)?;

    let state = AppState {
        config: config.clone(),
        style,
        extraction,
        generator,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// The generation endpoint is optional: without an API key it answers 503.
fn build_generator(config: &Config) -> Result<Option<Arc<dyn TextGenerator>>> {
    let Some(api_key) = config.anthropic_api_key.clone() else {
        warn!("ANTHROPIC_API_KEY not set; /api/generate-content is disabled");
        return Ok(None);
    };
    let llm = LlmClient::new(api_key, config.llm_model.clone())?;
    info!("LLM client initialized (model: {})", llm.model());
    Ok(Some(Arc::new(LlmTextGenerator::new(llm))))
}
