//! The rendering pipeline: normalize → lay out → serialize.
//!
//! Everything here is synchronous and CPU-bound. Handlers call `render_resume` from
//! `tokio::task::spawn_blocking`.

pub mod filename;
pub mod handlers;
pub mod pdf_writer;
pub mod sample;
pub mod sections;
pub mod winansi;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::document::{normalize, ResumePayload, Section};
use crate::errors::RenderError;
use crate::layout::{Canvas, DocumentStyle, Page};

pub use filename::document_filename;
pub use pdf_writer::DocumentInfo;
pub use sections::SectionRenderer;

const KEYWORDS: &str = "resume, cv, job application";

/// A finished PDF and the metadata the HTTP layer needs.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub pages: usize,
    pub sections: usize,
}

/// Renders `payload` into a complete PDF. `at` stamps `CreationDate` and the filename;
/// it is the only input besides the payload and style.
pub fn render_resume(
    payload: &ResumePayload,
    style: &DocumentStyle,
    at: DateTime<Utc>,
) -> Result<RenderedDocument, RenderError> {
    let sections = normalize(payload);
    let pages = lay_out(&sections, style)?;
    let info = document_info(payload, at);
    let bytes = pdf_writer::write_pdf(&pages, style, &info)?;

    let name = payload.candidate_name();
    let filename = document_filename(payload.document_type(), payload.role(), name.as_deref(), &at);

    debug!(
        mode = payload.mode(),
        sections = sections.len(),
        pages = pages.len(),
        bytes = bytes.len(),
        "Rendered document"
    );

    Ok(RenderedDocument {
        bytes,
        filename,
        pages: pages.len(),
        sections: sections.len(),
    })
}

/// Places every section on the canvas and closes it.
pub fn lay_out(sections: &[Section], style: &DocumentStyle) -> Result<Vec<Page>, RenderError> {
    let renderer = SectionRenderer::new(style);
    let mut canvas = Canvas::new();
    let mut cursor = renderer.first_cursor();
    for section in sections {
        cursor = renderer.render_section(section, cursor, &mut canvas)?;
    }
    canvas.finalize()
}

fn document_info(payload: &ResumePayload, at: DateTime<Utc>) -> DocumentInfo {
    let name = payload.candidate_name();
    let document_type = payload.document_type();
    let subject_line = name
        .clone()
        .or_else(|| payload.role().map(str::to_string))
        .unwrap_or_else(|| "Untitled".to_string());

    DocumentInfo {
        title: format!("{} - {}", document_type.label(), subject_line),
        author: name,
        subject: document_type.label().to_string(),
        keywords: KEYWORDS.to_string(),
        created_at: at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DrawOp, FontFace};
    use chrono::TimeZone;
    use serde_json::json;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap()
    }

    fn payload(value: serde_json::Value) -> ResumePayload {
        ResumePayload::from_value(value).unwrap()
    }

    fn drawn_text(pages: &[Page]) -> Vec<(String, FontFace)> {
        pages
            .iter()
            .flat_map(|p| p.ops.iter())
            .filter_map(|op| match op {
                DrawOp::Text { text, face, .. } => Some((text.clone(), *face)),
                DrawOp::Rule { .. } => None,
            })
            .collect()
    }

    fn jane_doe() -> ResumePayload {
        payload(json!({
            "content": "Jane Doe\nNYC, NY | jane@x.com\nSUMMARY\nExperienced engineer.\nEXPERIENCE\nAcme Inc, NYC\nEngineer, 2020 - Present\n- Shipped X"
        }))
    }

    #[test]
    fn test_jane_doe_scenario() {
        let style = DocumentStyle::a4();
        let pages = lay_out(&normalize(&jane_doe()), &style).unwrap();
        assert_eq!(pages.len(), 1);

        let text = drawn_text(&pages);
        let expected = [
            ("Jane Doe", FontFace::Bold),
            ("NYC, NY | jane@x.com", FontFace::Regular),
            ("SUMMARY", FontFace::Bold),
            ("Experienced engineer.", FontFace::Regular),
            ("EXPERIENCE", FontFace::Bold),
            ("Acme Inc, NYC", FontFace::Bold),
            ("Engineer, 2020 - Present", FontFace::Regular),
            ("\u{2022}", FontFace::Regular),
            ("Shipped X", FontFace::Regular),
        ];
        let actual: Vec<(&str, FontFace)> = text.iter().map(|(t, f)| (t.as_str(), *f)).collect();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn test_same_payload_same_bytes() {
        let style = DocumentStyle::a4();
        let a = render_resume(&jane_doe(), &style, at()).unwrap();
        let b = render_resume(&jane_doe(), &style, at()).unwrap();
        assert_eq!(a.bytes, b.bytes);
    }

    #[test]
    fn test_rendered_pdf_is_loadable() {
        let style = DocumentStyle::a4();
        let doc = render_resume(&jane_doe(), &style, at()).unwrap();
        assert_eq!(doc.filename, "resume-jane-doe-2024-03-09.pdf");
        assert_eq!(doc.pages, 1);
        let parsed = lopdf::Document::load_mem(&doc.bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 1);
    }

    #[test]
    fn test_empty_payload_renders_one_blank_page() {
        let style = DocumentStyle::a4();
        let doc = render_resume(&payload(json!({})), &style, at()).unwrap();
        assert_eq!(doc.pages, 1);
        assert_eq!(doc.sections, 0);
        assert_eq!(doc.filename, "resume-document-2024-03-09.pdf");
    }

    #[test]
    fn test_missing_end_date_reads_present() {
        let style = DocumentStyle::a4();
        let pages = lay_out(
            &normalize(&payload(json!({
                "workExperience": [{ "company": "Acme", "title": "Eng", "startDate": "2020" }]
            }))),
            &style,
        )
        .unwrap();
        assert!(drawn_text(&pages)
            .iter()
            .any(|(t, _)| t == "Eng, 2020 - Present"));
    }

    #[test]
    fn test_every_bullet_has_exactly_one_glyph() {
        let style = DocumentStyle::a4();
        let pages = lay_out(
            &normalize(&payload(json!({
                "workExperience": [{
                    "company": "Acme",
                    "achievements": ["- One", "\u{2022} Two", "Three"]
                }]
            }))),
            &style,
        )
        .unwrap();
        let text = drawn_text(&pages);
        let glyphs = text.iter().filter(|(t, _)| t == "\u{2022}").count();
        assert_eq!(glyphs, 3);
        assert!(text
            .iter()
            .all(|(t, _)| !t.starts_with('-') && !t.starts_with("\u{2022} ")));
    }

    #[test]
    fn test_long_document_paginates() {
        let style = DocumentStyle::a4();
        let entries: Vec<_> = (0..40)
            .map(|i| {
                json!({
                    "company": format!("Company {i}"),
                    "title": "Engineer",
                    "startDate": "2020",
                    "achievements": ["Did a thing", "Did another thing"]
                })
            })
            .collect();
        let doc = render_resume(&payload(json!({ "workExperience": entries })), &style, at()).unwrap();
        assert!(doc.pages > 1);
        let parsed = lopdf::Document::load_mem(&doc.bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), doc.pages);
    }

    #[test]
    fn test_document_info_falls_back_to_role_then_untitled() {
        let info = document_info(&payload(json!({ "role": "Data Engineer" })), at());
        assert_eq!(info.title, "Resume - Data Engineer");
        assert!(info.author.is_none());

        let info = document_info(&payload(json!({ "documentType": "cover-letter" })), at());
        assert_eq!(info.title, "Cover Letter - Untitled");
        assert_eq!(info.subject, "Cover Letter");
    }
}
