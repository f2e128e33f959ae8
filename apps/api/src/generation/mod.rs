// Content generation: résumé and cover-letter text from a profile and a job description.
// All LLM calls go through llm_client. Output is raw text in the layout the PDF
// normalizer reads, ready to post back to /api/generate-pdf as `content`.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::document::DocumentType;
use crate::llm_client::{LlmClient, LlmError};

const ROLE_KEYWORDS: [&str; 4] = ["position", "role", "job", "opening"];
const DEFAULT_ROLE: &str = "Position";

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub profile: Value,
    pub job_description: String,
    pub document_type: DocumentType,
}

/// Text generation backend. Carried in `AppState` as `Option<Arc<dyn TextGenerator>>`;
/// `None` when no API key is configured.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError>;
}

pub struct LlmTextGenerator {
    llm: LlmClient,
}

impl LlmTextGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextGenerator for LlmTextGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let prompt = build_prompt(request);
        info!(
            document_type = request.document_type.slug(),
            model = self.llm.model(),
            "Generating document text"
        );
        self.llm.complete(&prompt, prompts::GENERATION_SYSTEM).await
    }
}

pub fn build_prompt(request: &GenerationRequest) -> String {
    let profile =
        serde_json::to_string_pretty(&request.profile).unwrap_or_else(|_| request.profile.to_string());
    let template = match request.document_type {
        DocumentType::Resume => prompts::RESUME_PROMPT_TEMPLATE,
        DocumentType::CoverLetter => prompts::COVER_LETTER_PROMPT_TEMPLATE,
    };
    prompts::render(template, &profile, &request.job_description)
}

/// Role title from a job description: the part of its first line before the first
/// "position", "role", "job" or "opening" (case-insensitive). Falls back to "Position".
pub fn extract_role(job_description: &str) -> String {
    let first_line = job_description.trim().lines().next().unwrap_or("");
    let lower = first_line.to_lowercase();

    let cut = ROLE_KEYWORDS
        .iter()
        .filter_map(|keyword| lower.find(keyword))
        .min();

    // Lower-casing can change byte lengths for non-ASCII text; only slice when the
    // offset is a boundary of the original line.
    cut.filter(|&idx| first_line.is_char_boundary(idx))
        .map(|idx| first_line[..idx].trim())
        .filter(|role| !role.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_ROLE.to_string())
}
