//! Cursor-based page layout over the draw-command model.
//!
//! The builder tracks a vertical cursor and opens a new page whenever a
//! requested block would run past the bottom margin, so composition code
//! reads top-to-bottom without page arithmetic.

use crate::export::{Document, DrawCommand, Page, TextAlign, PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH};

pub struct PageBuilder {
    pages: Vec<Page>,
    current: Page,
    cursor: f64,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Page::default(),
            cursor: PAGE_MARGIN,
        }
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn set_cursor(&mut self, y: f64) {
        self.cursor = y;
    }

    pub fn advance(&mut self, dy: f64) {
        self.cursor += dy;
    }

    /// Start a new page unconditionally
    pub fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor = PAGE_MARGIN;
    }

    /// Break the page if a block of this height would overflow the bottom
    /// margin. Returns true when a break happened.
    pub fn ensure_space(&mut self, height: f64) -> bool {
        if self.cursor + height > PAGE_HEIGHT - PAGE_MARGIN {
            self.new_page();
            true
        } else {
            false
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.current.commands.push(command);
    }

    /// Text at an absolute position; does not move the cursor
    #[allow(clippy::too_many_arguments)]
    pub fn text_at(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        bold: bool,
        color: &str,
        align: TextAlign,
        text: impl Into<String>,
    ) {
        self.push(DrawCommand::Text {
            x,
            y,
            size,
            bold,
            color: color.to_string(),
            align,
            text: text.into(),
        });
    }

    /// Left-aligned text at the cursor, advancing by the given line height
    pub fn line(&mut self, x: f64, size: f64, bold: bool, color: &str, text: impl Into<String>, advance: f64) {
        let y = self.cursor;
        self.text_at(x, y, size, bold, color, TextAlign::Left, text);
        self.cursor += advance;
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str, stroke: Option<&str>) {
        self.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            fill: fill.to_string(),
            stroke: stroke.map(str::to_string),
        });
    }

    pub fn wedge(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, sweep: f64, fill: &str) {
        self.push(DrawCommand::Wedge {
            cx,
            cy,
            radius,
            start_angle,
            sweep,
            fill: fill.to_string(),
        });
    }

    pub fn finish(mut self) -> Document {
        self.pages.push(self.current);
        Document {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_starts_at_the_top_margin() {
        let builder = PageBuilder::new();
        assert_eq!(builder.cursor(), PAGE_MARGIN);
    }

    #[test]
    fn ensure_space_breaks_only_on_overflow() {
        let mut builder = PageBuilder::new();
        assert!(!builder.ensure_space(50.0));

        builder.set_cursor(PAGE_HEIGHT - PAGE_MARGIN - 10.0);
        assert!(builder.ensure_space(50.0));
        assert_eq!(builder.cursor(), PAGE_MARGIN);

        let document = builder.finish();
        assert_eq!(document.pages.len(), 2);
    }

    #[test]
    fn line_advances_the_cursor() {
        let mut builder = PageBuilder::new();
        builder.line(PAGE_MARGIN, 10.0, false, "#000000", "first", 6.0);
        assert_eq!(builder.cursor(), PAGE_MARGIN + 6.0);

        let document = builder.finish();
        assert_eq!(document.pages[0].commands.len(), 1);
    }
}
