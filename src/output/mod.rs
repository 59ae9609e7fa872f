//! Report render targets.
//!
//! Every writer consumes the same composed aggregate; the format only
//! changes how it is serialized. Terminal output is the interactive
//! summary, markdown and JSON feed tooling, and HTML is the standalone
//! print document.

pub mod html;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::report::LossReport;
use anyhow::Result;
use std::io::Write;

pub use html::render_print_document;
pub use json::{JsonWriter, ReportView};
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
    Html,
}

/// Context shared by all render targets
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    pub company: Option<String>,
    pub generated: Option<chrono::NaiveDate>,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &LossReport, context: &ReportContext) -> Result<()>;
}

pub fn create_writer(format: OutputFormat, out: Box<dyn Write>) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Html => Box::new(html::HtmlWriter::new(out)),
    }
}
