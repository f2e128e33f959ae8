use anyhow::{Context, Result};
use std::str::FromStr;

use crate::llm_client::DEFAULT_MODEL;

const DEFAULT_PORT: u16 = 5000;
/// Matches the 50 MB JSON limit the web client was built against.
const DEFAULT_BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;
const DEFAULT_EXTRACTION_MIN_CHARS: usize = 100;

/// Application configuration loaded from environment variables.
/// Everything has a default; a present but unparsable value is a startup error.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Reported by /api/health. `APP_ENV`, falling back to `NODE_ENV`.
    pub environment: String,
    pub body_limit_bytes: usize,
    /// Direct PDF extraction shorter than this falls back to OCR.
    pub extraction_min_chars: usize,
    /// Without a key the generation endpoint answers 503.
    pub anthropic_api_key: Option<String>,
    pub llm_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            environment: "development".to_string(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            extraction_min_chars: DEFAULT_EXTRACTION_MIN_CHARS,
            anthropic_api_key: None,
            llm_model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Config {
            port: parse_or(&non_empty, "PORT", defaults.port)?,
            rust_log: non_empty("RUST_LOG").unwrap_or(defaults.rust_log),
            environment: non_empty("APP_ENV")
                .or_else(|| non_empty("NODE_ENV"))
                .unwrap_or(defaults.environment),
            body_limit_bytes: parse_or(&non_empty, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
            extraction_min_chars: parse_or(
                &non_empty,
                "EXTRACTION_MIN_CHARS",
                defaults.extraction_min_chars,
            )?,
            anthropic_api_key: non_empty("ANTHROPIC_API_KEY"),
            llm_model: non_empty("LLM_MODEL").unwrap_or(defaults.llm_model),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
    }
}
