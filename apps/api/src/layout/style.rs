//! Fixed page geometry and typography for every rendered document.

use serde::{Deserialize, Serialize};

/// An RGB fill/stroke color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    /// `#333333`
    pub const DARK_GRAY: Rgb = Rgb(0.2, 0.2, 0.2);
}

/// Named vertical gaps, expressed in body line heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gap {
    /// Between paragraphs, skill categories and certifications; blank raw lines.
    Paragraph,
    /// Between consecutive entries of one section.
    Entry,
    /// Below the name/contact block.
    HeaderBlock,
    /// Above every section header.
    BeforeSection,
}

/// Layout parameters shared by every renderer.
///
/// Coordinates are top-down: `y = 0` is the top edge of the page. The PDF writer
/// flips them when emitting content streams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyle {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,

    pub title_size: f32,
    pub subtitle_size: f32,
    pub section_header_size: f32,
    pub body_size: f32,
    pub link_size: f32,

    /// Extra leading added after each wrapped body line.
    pub body_line_gap: f32,
    /// Line height as a multiple of the font size (Helvetica ascender − descender + gap).
    pub line_height_factor: f32,
    /// Baseline offset from the top of a line, as a multiple of the font size.
    pub ascent_factor: f32,

    pub bullet_indent: f32,
    /// Distance from the bullet glyph to the bullet text.
    pub bullet_hang: f32,

    pub rule_width: f32,
    /// Space between the section header text and its rule.
    pub rule_offset: f32,
    /// Space between the rule and the first body line.
    pub after_rule: f32,

    pub primary_color: Rgb,
    pub secondary_color: Rgb,
    pub rule_color: Rgb,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self::a4()
    }
}

impl DocumentStyle {
    /// A4 portrait, 40pt margins, Helvetica 9pt body.
    pub fn a4() -> Self {
        Self {
            page_width: 595.28,
            page_height: 841.89,
            margin: 40.0,
            title_size: 14.0,
            subtitle_size: 9.0,
            section_header_size: 11.0,
            body_size: 9.0,
            link_size: 8.0,
            body_line_gap: 2.0,
            line_height_factor: 1.157,
            ascent_factor: 0.718,
            bullet_indent: 10.0,
            bullet_hang: 8.0,
            rule_width: 0.5,
            rule_offset: 2.0,
            after_rule: 4.0,
            primary_color: Rgb::BLACK,
            secondary_color: Rgb::DARK_GRAY,
            rule_color: Rgb::BLACK,
        }
    }

    pub fn content_top(&self) -> f32 {
        self.margin
    }

    pub fn content_bottom(&self) -> f32 {
        self.page_height - self.margin
    }

    pub fn content_height(&self) -> f32 {
        self.content_bottom() - self.content_top()
    }

    pub fn text_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn line_height(&self, size: f32) -> f32 {
        size * self.line_height_factor
    }

    pub fn gap(&self, gap: Gap) -> f32 {
        let lines = match gap {
            Gap::Paragraph => 0.4,
            Gap::Entry => 0.7,
            Gap::HeaderBlock => 0.8,
            Gap::BeforeSection => 0.8,
        };
        lines * self.line_height(self.body_size)
    }

    /// Left edge of wrapped bullet text.
    pub fn bullet_text_x(&self) -> f32 {
        self.margin + self.bullet_indent + self.bullet_hang
    }

    pub fn bullet_text_width(&self) -> f32 {
        self.text_width() - self.bullet_indent - self.bullet_hang
    }
}
