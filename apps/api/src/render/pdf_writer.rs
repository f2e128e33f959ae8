//! Output assembler: turns the canvas display list into PDF bytes with lopdf.

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::errors::RenderError;
use crate::layout::{DocumentStyle, DrawOp, FontFace, Page, Rgb};
use crate::render::winansi;

pub const PRODUCER: &str = concat!("resume-api ", env!("CARGO_PKG_VERSION"));

/// Values for the PDF `Info` dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub author: Option<String>,
    pub subject: String,
    pub keywords: String,
    /// Written as `CreationDate`; the only input that varies between identical renders.
    pub created_at: DateTime<Utc>,
}

/// Serializes `pages` into a complete PDF 1.5 file.
pub fn write_pdf(
    pages: &[Page],
    style: &DocumentStyle,
    info: &DocumentInfo,
) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for face in FontFace::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = page_content(page, style);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(style.page_width),
                Object::Real(style.page_height),
            ],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = add_info(&mut doc, info);
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn add_info(doc: &mut Document, info: &DocumentInfo) -> ObjectId {
    let mut dict = dictionary! {
        "Title" => text_string(&info.title),
        "Subject" => text_string(&info.subject),
        "Keywords" => text_string(&info.keywords),
        "Producer" => text_string(PRODUCER),
        "Creator" => text_string(PRODUCER),
        "CreationDate" => Object::string_literal(pdf_date(&info.created_at)),
    };
    if let Some(author) = &info.author {
        dict.set("Author", text_string(author));
    }
    doc.add_object(dict)
}

/// `D:YYYYMMDDHHmmSSZ`
pub fn pdf_date(at: &DateTime<Utc>) -> String {
    format!("D:{}", at.format("%Y%m%d%H%M%SZ"))
}

fn text_string(text: &str) -> Object {
    Object::String(winansi::encode(text), StringFormat::Literal)
}

// ────────────────────────────────────────────────────────────────────────────
// Content streams
// ────────────────────────────────────────────────────────────────────────────

fn page_content(page: &Page, style: &DocumentStyle) -> Content {
    let mut operations = Vec::with_capacity(page.ops.len() * 5);
    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                face,
                size,
                color,
                text,
            } => {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("rg", rgb_operands(*color)));
                operations.push(Operation::new(
                    "Tf",
                    vec![face.resource_name().into(), Object::Real(*size)],
                ));
                operations.push(Operation::new(
                    "Td",
                    vec![Object::Real(*x), Object::Real(style.page_height - y)],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(
                        winansi::encode(text),
                        StringFormat::Hexadecimal,
                    )],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            DrawOp::Rule {
                x1,
                x2,
                y,
                width,
                color,
            } => {
                let pdf_y = style.page_height - y;
                operations.push(Operation::new("RG", rgb_operands(*color)));
                operations.push(Operation::new("w", vec![Object::Real(*width)]));
                operations.push(Operation::new(
                    "m",
                    vec![Object::Real(*x1), Object::Real(pdf_y)],
                ));
                operations.push(Operation::new(
                    "l",
                    vec![Object::Real(*x2), Object::Real(pdf_y)],
                ));
                operations.push(Operation::new("S", vec![]));
            }
        }
    }
    Content { operations }
}

fn rgb_operands(Rgb(r, g, b): Rgb) -> Vec<Object> {
    vec![Object::Real(r), Object::Real(g), Object::Real(b)]
}
