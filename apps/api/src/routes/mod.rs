pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::generation::handlers as generation;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;

    Router::new()
        .route("/", get(health::banner_handler))
        .route("/api/health", get(health::health_handler))
        // Document layout engine
        .route("/api/generate-pdf", post(render::handle_generate_pdf))
        .route("/api/test-pdf", get(render::handle_test_pdf))
        // Collaborators
        .route(
            "/api/generate-content",
            post(generation::handle_generate_content),
        )
        .route("/api/extract-text", post(extraction::handle_extract_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
