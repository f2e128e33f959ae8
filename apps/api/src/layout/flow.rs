//! Pagination: the cursor threaded through renderers, the page-break rules, and the
//! canvas (per-page display list) the renderers draw into.
//!
//! Renderers never hold a mutable "current y". Each call receives a `Cursor`, asks the
//! `FlowController` where a unit of content may start, draws it, and returns the
//! advanced cursor to its caller.

use serde::Serialize;

use crate::errors::RenderError;
use crate::layout::font_metrics::FontFace;
use crate::layout::style::{DocumentStyle, Rgb};

// ────────────────────────────────────────────────────────────────────────────
// Cursor
// ────────────────────────────────────────────────────────────────────────────

/// Vertical position in the document: distance from the top edge of `page` (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cursor {
    pub y: f32,
    pub page: u32,
}

impl Cursor {
    pub fn top_of(page: u32, style: &DocumentStyle) -> Self {
        Cursor {
            y: style.content_top(),
            page,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Flow controller
// ────────────────────────────────────────────────────────────────────────────

/// Decides where page breaks happen. Stateless: every decision is a function of the
/// cursor and the height of the unit about to be placed.
#[derive(Debug, Clone, Copy)]
pub struct FlowController<'a> {
    style: &'a DocumentStyle,
}

impl<'a> FlowController<'a> {
    pub fn new(style: &'a DocumentStyle) -> Self {
        Self { style }
    }

    pub fn first_cursor(&self) -> Cursor {
        Cursor::top_of(0, self.style)
    }

    pub fn remaining(&self, cursor: Cursor) -> f32 {
        self.style.content_bottom() - cursor.y
    }

    fn at_page_top(&self, cursor: Cursor) -> bool {
        cursor.y <= self.style.content_top() + f32::EPSILON
    }

    /// Returns where a unit of `height` may start: `cursor` itself when it fits, else
    /// the top of the next page. A unit taller than a whole page is placed at the top
    /// of the current page when already there, so the flow never loops on it.
    pub fn reserve(&self, cursor: Cursor, height: f32) -> Cursor {
        if height <= self.remaining(cursor) || self.at_page_top(cursor) {
            cursor
        } else {
            Cursor::top_of(cursor.page + 1, self.style)
        }
    }

    /// Moves past content of `height` that has just been drawn.
    pub fn advance(&self, cursor: Cursor, height: f32) -> Cursor {
        Cursor {
            y: cursor.y + height,
            page: cursor.page,
        }
    }

    /// Adds vertical whitespace. A gap is never carried over a page break: it stops at
    /// the bottom margin, and gaps at the top of a page are dropped.
    pub fn gap(&self, cursor: Cursor, height: f32) -> Cursor {
        if self.at_page_top(cursor) {
            return cursor;
        }
        Cursor {
            y: (cursor.y + height).min(self.style.content_bottom()),
            page: cursor.page,
        }
    }

    /// Whether a unit of `height` could ever fit on an empty page.
    pub fn fits_on_page(&self, height: f32) -> bool {
        height <= self.style.content_height()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Canvas
// ────────────────────────────────────────────────────────────────────────────

/// One drawing instruction in top-down page coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOp {
    /// A single line of text; `y` is the baseline.
    Text {
        x: f32,
        y: f32,
        face: FontFace,
        size: f32,
        color: Rgb,
        text: String,
    },
    /// A horizontal rule from `x1` to `x2` at `y`.
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        width: f32,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// Lifecycle of a document stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowState {
    NotStarted,
    Rendering,
    Finalized,
}

/// Per-page display list. Pages are created on demand when a cursor points past the
/// last one, so a trailing gap never produces an empty page.
#[derive(Debug)]
pub struct Canvas {
    pages: Vec<Page>,
    state: FlowState,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            state: FlowState::NotStarted,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Appends `op` to the page the cursor is on.
    pub fn draw(&mut self, cursor: Cursor, op: DrawOp) -> Result<(), RenderError> {
        match self.state {
            FlowState::Finalized => return Err(RenderError::StreamClosed),
            FlowState::NotStarted => self.state = FlowState::Rendering,
            FlowState::Rendering => {}
        }

        let index = cursor.page as usize;
        if self.pages.len() <= index {
            self.pages.resize_with(index + 1, Page::default);
        }
        self.pages[index].ops.push(op);
        Ok(())
    }

    /// Closes the stream and hands out the pages. A document with no content still
    /// has one (blank) page.
    pub fn finalize(&mut self) -> Result<Vec<Page>, RenderError> {
        if self.state == FlowState::Finalized {
            return Err(RenderError::StreamClosed);
        }
        self.state = FlowState::Finalized;

        let mut pages = std::mem::take(&mut self.pages);
        if pages.is_empty() {
            pages.push(Page::default());
        }
        Ok(pages)
    }
}
