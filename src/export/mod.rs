//! Exportable document model: pages of declarative draw commands.
//!
//! The document-generation collaborator that rasterizes these commands is
//! external and opaque; this crate's contract ends at the command stream.
//! Coordinates are millimetres on an A4 portrait page, colors are hex
//! strings.

pub mod compose;
pub mod layout;

use serde::Serialize;

pub use compose::{compose_document, report_filename};
pub use layout::PageBuilder;

/// A4 portrait, millimetres
pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
pub const PAGE_MARGIN: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One declarative drawing operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Text {
        x: f64,
        y: f64,
        size: f64,
        bold: bool,
        color: String,
        align: TextAlign,
        text: String,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<String>,
    },
    /// Pie wedge; angles in degrees, sweep clockwise from the start angle
    Wedge {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        sweep: f64,
        fill: String,
    },
}

impl DrawCommand {
    /// Vertical extent of the command, for bounds checks
    pub fn bottom(&self) -> f64 {
        match self {
            DrawCommand::Text { y, .. } => *y,
            DrawCommand::Rect { y, height, .. } => y + height,
            DrawCommand::Wedge { cy, radius, .. } => cy + radius,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub commands: Vec<DrawCommand>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub pages: Vec<Page>,
}
