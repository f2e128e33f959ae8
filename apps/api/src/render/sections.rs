//! Section renderers: typeset normalized sections onto the canvas.
//!
//! Every line is first turned into placement units (rows of already-wrapped text plus
//! the gaps between them), then placed with the flow controller. A unit either flows
//! row by row or is kept together on one page.

use crate::document::{Line, LineKind, Section};
use crate::errors::RenderError;
use crate::layout::{
    get_metrics, wrap_text, Canvas, Cursor, DocumentStyle, DrawOp, FlowController, FontFace, Gap,
    Rgb,
};

const BULLET_GLYPH: &str = "\u{2022}";

// ────────────────────────────────────────────────────────────────────────────
// Placement units
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum Align {
    /// Left edge and available width.
    Left(f32, f32),
    Center,
}

/// One wrapped line of text, ready to draw.
#[derive(Debug, Clone)]
struct Row {
    x: f32,
    face: FontFace,
    size: f32,
    color: Rgb,
    text: String,
    height: f32,
    /// First row of a bullet item: the glyph is drawn in the gutter.
    bullet: bool,
}

#[derive(Debug, Clone, Default)]
struct Block {
    rows: Vec<Row>,
    /// Never split across a page break.
    keep_together: bool,
}

impl Block {
    fn height(&self) -> f32 {
        self.rows.iter().map(|r| r.height).sum()
    }

    /// Space that must follow a section header on the same page.
    fn lead_height(&self) -> f32 {
        if self.keep_together {
            self.height()
        } else {
            self.rows.first().map(|r| r.height).unwrap_or(0.0)
        }
    }
}

#[derive(Debug, Clone)]
enum Unit {
    Gap(Gap),
    Block(Block),
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

/// Renders sections with a fixed style. Holds no state between calls: the cursor goes
/// in, the advanced cursor comes out.
#[derive(Debug, Clone, Copy)]
pub struct SectionRenderer<'a> {
    style: &'a DocumentStyle,
    flow: FlowController<'a>,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(style: &'a DocumentStyle) -> Self {
        Self {
            style,
            flow: FlowController::new(style),
        }
    }

    pub fn first_cursor(&self) -> Cursor {
        self.flow.first_cursor()
    }

    /// Renders one section starting at `cursor` and returns the cursor below it.
    pub fn render_section(
        &self,
        section: &Section,
        cursor: Cursor,
        canvas: &mut Canvas,
    ) -> Result<Cursor, RenderError> {
        let units = self.units(&section.lines);
        let mut cursor = cursor;

        if let Some(header) = section.header_text.as_deref() {
            cursor = self.render_heading(header, self.lead(&units), cursor, canvas)?;
        }

        for unit in &units {
            cursor = match unit {
                Unit::Gap(gap) => self.flow.gap(cursor, self.style.gap(*gap)),
                Unit::Block(block) => self.place_block(block, cursor, canvas)?,
            };
        }
        Ok(cursor)
    }

    /// Height that must fit below a section header: any gaps ahead of the first block
    /// plus that block's lead.
    fn lead(&self, units: &[Unit]) -> f32 {
        let mut height = 0.0;
        for unit in units {
            match unit {
                Unit::Gap(gap) => height += self.style.gap(*gap),
                Unit::Block(block) => return height + block.lead_height(),
            }
        }
        0.0
    }

    /// Bold upper-cased header with a full-width rule beneath. Placed atomically with
    /// the lead of the section body so a header never ends a page.
    fn render_heading(
        &self,
        text: &str,
        lead: f32,
        cursor: Cursor,
        canvas: &mut Canvas,
    ) -> Result<Cursor, RenderError> {
        let style = self.style;
        let size = style.section_header_size;
        let text_height = style.line_height(size);
        let heading_height = text_height + style.rule_offset + style.rule_width + style.after_rule;

        let cursor = self.flow.gap(cursor, style.gap(Gap::BeforeSection));
        let cursor = self.flow.reserve(cursor, heading_height + lead);

        canvas.draw(
            cursor,
            DrawOp::Text {
                x: style.margin,
                y: cursor.y + size * style.ascent_factor,
                face: FontFace::Bold,
                size,
                color: style.primary_color,
                text: text.trim().to_uppercase(),
            },
        )?;
        canvas.draw(
            cursor,
            DrawOp::Rule {
                x1: style.margin,
                x2: style.page_width - style.margin,
                y: cursor.y + text_height + style.rule_offset,
                width: style.rule_width,
                color: style.rule_color,
            },
        )?;

        Ok(self.flow.advance(cursor, heading_height))
    }

    fn place_block(
        &self,
        block: &Block,
        cursor: Cursor,
        canvas: &mut Canvas,
    ) -> Result<Cursor, RenderError> {
        let mut cursor = if block.keep_together {
            self.flow.reserve(cursor, block.height())
        } else {
            cursor
        };

        for row in &block.rows {
            cursor = self.flow.reserve(cursor, row.height);
            self.draw_row(row, cursor, canvas)?;
            cursor = self.flow.advance(cursor, row.height);
        }
        Ok(cursor)
    }

    fn draw_row(&self, row: &Row, cursor: Cursor, canvas: &mut Canvas) -> Result<(), RenderError> {
        let baseline = cursor.y + row.size * self.style.ascent_factor;
        if row.bullet {
            canvas.draw(
                cursor,
                DrawOp::Text {
                    x: self.style.margin + self.style.bullet_indent,
                    y: baseline,
                    face: FontFace::Regular,
                    size: row.size,
                    color: row.color,
                    text: BULLET_GLYPH.to_string(),
                },
            )?;
        }
        canvas.draw(
            cursor,
            DrawOp::Text {
                x: row.x,
                y: baseline,
                face: row.face,
                size: row.size,
                color: row.color,
                text: row.text.clone(),
            },
        )
    }

    // ── line → unit conversion ──────────────────────────────────────────────

    fn units(&self, lines: &[Line]) -> Vec<Unit> {
        let mut units = Vec::new();
        let mut iter = lines.iter().peekable();

        while let Some(line) = iter.next() {
            match line.kind {
                LineKind::Spacer(gap) => units.push(Unit::Gap(gap)),
                LineKind::EntryHeading => {
                    let mut block = Block {
                        rows: self.rows_for(line),
                        keep_together: true,
                    };
                    while let Some(next) =
                        iter.next_if(|l| matches!(l.kind, LineKind::EntryDetail | LineKind::Link))
                    {
                        block.rows.extend(self.rows_for(next));
                    }
                    units.push(Unit::Block(self.checked(block)));
                }
                LineKind::Bullet | LineKind::Title | LineKind::Subtitle => {
                    let block = Block {
                        rows: self.rows_for(line),
                        keep_together: true,
                    };
                    units.push(Unit::Block(self.checked(block)));
                }
                LineKind::Text | LineKind::EntryDetail | LineKind::Link => {
                    units.push(Unit::Block(Block {
                        rows: self.rows_for(line),
                        keep_together: false,
                    }));
                }
            }
        }

        units.retain(|u| !matches!(u, Unit::Block(b) if b.rows.is_empty()));
        units
    }

    /// A block taller than a page cannot be kept together; let it flow.
    fn checked(&self, mut block: Block) -> Block {
        if !self.flow.fits_on_page(block.height()) {
            block.keep_together = false;
        }
        block
    }

    fn rows_for(&self, line: &Line) -> Vec<Row> {
        let s = self.style;
        let left = Align::Left(s.margin, s.text_width());
        match line.kind {
            LineKind::Title => self.wrap(&line.text, FontFace::Bold, s.title_size, s.primary_color, Align::Center),
            LineKind::Subtitle => self.wrap(
                &line.text,
                FontFace::Regular,
                s.subtitle_size,
                s.secondary_color,
                Align::Center,
            ),
            LineKind::Text | LineKind::EntryDetail => {
                self.wrap(&line.text, FontFace::Regular, s.body_size, s.primary_color, left)
            }
            LineKind::EntryHeading => {
                self.wrap(&line.text, FontFace::Bold, s.body_size, s.primary_color, left)
            }
            LineKind::Link => {
                self.wrap(&line.text, FontFace::Oblique, s.link_size, s.secondary_color, left)
            }
            LineKind::Bullet => {
                let mut rows = self.wrap(
                    &line.text,
                    FontFace::Regular,
                    s.body_size,
                    s.primary_color,
                    Align::Left(s.bullet_text_x(), s.bullet_text_width()),
                );
                if let Some(first) = rows.first_mut() {
                    first.bullet = true;
                }
                rows
            }
            LineKind::Spacer(_) => Vec::new(),
        }
    }

    fn wrap(&self, text: &str, face: FontFace, size: f32, color: Rgb, align: Align) -> Vec<Row> {
        let s = self.style;
        let metrics = get_metrics(&face);
        let (left, width) = match align {
            Align::Left(x, width) => (x, width),
            Align::Center => (s.margin, s.text_width()),
        };
        let height = s.line_height(size) + s.body_line_gap;

        wrap_text(text, metrics, size, width)
            .into_iter()
            .map(|text| {
                let x = match align {
                    Align::Left(..) => left,
                    Align::Center => {
                        left + ((width - metrics.width_pt(&text, size)) / 2.0).max(0.0)
                    }
                };
                Row {
                    x,
                    face,
                    size,
                    color,
                    text,
                    height,
                    bullet: false,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::section::SectionKind;
    use crate::layout::Page;

    fn render(sections: &[Section], start: Cursor) -> Vec<Page> {
        let style = DocumentStyle::a4();
        let renderer = SectionRenderer::new(&style);
        let mut canvas = Canvas::new();
        let mut cursor = start;
        for section in sections {
            cursor = renderer.render_section(section, cursor, &mut canvas).unwrap();
        }
        canvas.finalize().unwrap()
    }

    fn texts(page: &Page) -> Vec<(&str, FontFace, f32)> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, face, x, .. } => Some((text.as_str(), *face, *x)),
                DrawOp::Rule { .. } => None,
            })
            .collect()
    }

    fn experience() -> Section {
        let mut section = Section::new(SectionKind::Experience, Some("Experience"));
        section.push(LineKind::EntryHeading, "Acme Inc, NYC");
        section.push(LineKind::EntryDetail, "Engineer, 2020 - Present");
        section.push_gap(Gap::Paragraph);
        section.push(LineKind::Bullet, "Shipped X");
        section
    }

    #[test]
    fn test_heading_is_uppercased_bold_with_rule() {
        let style = DocumentStyle::a4();
        let pages = render(&[experience()], Cursor::top_of(0, &style));
        let ops = &pages[0].ops;

        assert!(matches!(
            &ops[0],
            DrawOp::Text { text, face: FontFace::Bold, .. } if text == "EXPERIENCE"
        ));
        match &ops[1] {
            DrawOp::Rule { x1, x2, .. } => {
                assert_eq!(*x1, style.margin);
                assert_eq!(*x2, style.page_width - style.margin);
            }
            other => panic!("expected rule, got {other:?}"),
        }
    }

    #[test]
    fn test_entry_heading_bold_detail_regular_single_bullet() {
        let style = DocumentStyle::a4();
        let pages = render(&[experience()], Cursor::top_of(0, &style));
        let texts = texts(&pages[0]);

        assert!(texts.contains(&("Acme Inc, NYC", FontFace::Bold, style.margin)));
        assert!(texts.contains(&("Engineer, 2020 - Present", FontFace::Regular, style.margin)));
        assert!(texts.contains(&("Shipped X", FontFace::Regular, style.bullet_text_x())));
        let glyphs = texts.iter().filter(|(t, _, _)| *t == BULLET_GLYPH).count();
        assert_eq!(glyphs, 1);
    }

    #[test]
    fn test_heading_never_alone_at_page_bottom() {
        let style = DocumentStyle::a4();
        // Room for the heading but not for the entry beneath it.
        let start = Cursor {
            y: style.content_bottom() - 30.0,
            page: 0,
        };
        let pages = render(&[experience()], start);

        assert_eq!(pages.len(), 2);
        assert!(pages[0].ops.is_empty());
        assert!(matches!(
            &pages[1].ops[0],
            DrawOp::Text { text, y, .. } if text == "EXPERIENCE" && *y < style.content_top() + 20.0
        ));
    }

    #[test]
    fn test_heading_moves_with_body_behind_leading_gap() {
        let style = DocumentStyle::a4();
        let mut section = Section::new(SectionKind::Summary, Some("SUMMARY"));
        section.push_gap(Gap::Paragraph);
        section.push(LineKind::Text, "Experienced engineer.");

        // Room for heading and body, but not once the gap between them is counted.
        let start = Cursor {
            y: style.content_bottom() - 41.0,
            page: 0,
        };
        let pages = render(&[section], start);

        let page_of = |needle: &str| {
            pages
                .iter()
                .position(|p| texts(p).iter().any(|(t, _, _)| *t == needle))
                .unwrap()
        };
        assert_eq!(page_of("SUMMARY"), page_of("Experienced engineer."));
        assert_eq!(page_of("SUMMARY"), 1);
    }

    #[test]
    fn test_body_lines_flow_across_pages() {
        let style = DocumentStyle::a4();
        let mut section = Section::new(SectionKind::Summary, Some("SUMMARY"));
        for i in 0..120 {
            section.push(LineKind::Text, format!("Line {i}"));
        }
        let pages = render(&[section], Cursor::top_of(0, &style));

        assert!(pages.len() >= 2);
        for page in &pages {
            for op in &page.ops {
                if let DrawOp::Text { y, .. } = op {
                    assert!(*y <= style.content_bottom());
                }
            }
        }
    }

    #[test]
    fn test_wrapped_bullet_is_kept_together_and_aligned() {
        let style = DocumentStyle::a4();
        let mut section = Section::new(SectionKind::Experience, None);
        section.push(LineKind::Bullet, "word ".repeat(60));

        // Enough room for one row but not the whole item.
        let start = Cursor {
            y: style.content_bottom() - 15.0,
            page: 0,
        };
        let pages = render(&[section], start);

        assert!(pages[0].ops.is_empty());
        let rows: Vec<_> = texts(&pages[1])
            .into_iter()
            .filter(|(t, _, _)| *t != BULLET_GLYPH)
            .collect();
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|(_, _, x)| *x == style.bullet_text_x()));
    }

    #[test]
    fn test_title_is_centered() {
        let style = DocumentStyle::a4();
        let mut header = Section::new(SectionKind::Header, None);
        header.push(LineKind::Title, "Jane Doe");
        let pages = render(&[header], Cursor::top_of(0, &style));

        let DrawOp::Text { x, text, size, .. } = &pages[0].ops[0] else {
            panic!("expected text op");
        };
        let width = get_metrics(&FontFace::Bold).width_pt(text, *size);
        let left_gap = x - style.margin;
        let right_gap = style.page_width - style.margin - (x + width);
        assert!((left_gap - right_gap).abs() < 0.01);
    }

    #[test]
    fn test_link_is_oblique() {
        let style = DocumentStyle::a4();
        let mut section = Section::new(SectionKind::Projects, Some("PROJECTS"));
        section.push(LineKind::EntryHeading, "Forge");
        section.push(LineKind::Link, "https://forge.dev");
        let pages = render(&[section], Cursor::top_of(0, &style));
        assert!(texts(&pages[0]).contains(&("https://forge.dev", FontFace::Oblique, style.margin)));
    }

    #[test]
    fn test_section_gap_dropped_at_page_top() {
        let style = DocumentStyle::a4();
        let mut section = Section::new(SectionKind::Summary, Some("SUMMARY"));
        section.push(LineKind::Text, "One.");
        let pages = render(&[section], Cursor::top_of(0, &style));
        let DrawOp::Text { y, .. } = &pages[0].ops[0] else {
            panic!("expected text op");
        };
        let expected = style.content_top() + style.section_header_size * style.ascent_factor;
        assert!((y - expected).abs() < 1e-3);
    }
}
