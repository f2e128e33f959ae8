//! Download filenames for rendered documents.

use chrono::{DateTime, Utc};

use crate::document::DocumentType;

/// `<documentType>-<role or name>-<YYYY-MM-DD>.pdf`, safe for any filesystem.
///
/// The subject falls back from role to candidate name to `"document"`.
pub fn document_filename(
    document_type: DocumentType,
    role: Option<&str>,
    name: Option<&str>,
    at: &DateTime<Utc>,
) -> String {
    let subject = role
        .or(name)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("document");
    let stem = format!(
        "{}-{}-{}",
        document_type.slug(),
        subject,
        at.format("%Y-%m-%d")
    );
    format!("{}.pdf", sanitize(&stem))
}

/// Lower-cases, turns whitespace runs into `-`, drops anything outside
/// `[a-z0-9._-]` and collapses repeated hyphens.
pub fn sanitize(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    for ch in stem.to_lowercase().chars() {
        let mapped = if ch.is_whitespace() {
            '-'
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '.' || ch == '_' || ch == '-' {
            ch
        } else {
            continue;
        };
        if mapped == '-' && out.ends_with('-') {
            continue;
        }
        out.push(mapped);
    }
    out.trim_matches('-').to_string()
}
