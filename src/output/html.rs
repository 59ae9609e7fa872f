//! The print-formatted document: a standalone styled HTML page handed to
//! the platform's print dialog by the embedding UI.
//!
//! Serialization fails when there is no report content; the caller surfaces
//! that as a user-visible message rather than printing an empty page.

use crate::errors::LossmapError;
use crate::formatting::format_inr;
use crate::output::{ReportContext, ReportWriter};
use crate::report::LossReport;
use anyhow::Result;
use html_escape::encode_text;
use std::fmt::Write as _;
use std::io::Write;

const PRINT_STYLE: &str = r#"
    @page { margin: 1in; size: A4; }
    body { font-family: Arial, sans-serif; line-height: 1.4; color: #000; }
    .header { background: #1e3a8a; color: white; padding: 20px; text-align: center; margin-bottom: 20px; }
    .summary-box { background: #fef2f2; border: 1px solid #fecaca; padding: 15px; margin: 20px 0; }
    .critical-loss { color: #dc2626; font-weight: bold; font-size: 18px; }
    .insight { border-left: 3px solid #3b82f6; padding-left: 12px; font-style: italic; }
    table { width: 100%; border-collapse: collapse; margin: 20px 0; }
    th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
    th { background-color: #f3f4f6; }
    .high-priority { color: #dc2626; font-weight: bold; }
    .medium-priority { color: #f59e0b; font-weight: bold; }
    .low-priority { color: #22c55e; font-weight: bold; }
    .footer { color: #6b7280; font-size: 11px; text-align: center; margin-top: 30px; }
"#;

/// Serialize the report into a standalone printable HTML document.
///
/// Errors when no scored gap exists; there is nothing to print and the
/// embedding UI shows a blocking message instead.
pub fn render_print_document(
    report: &LossReport,
    context: &ReportContext,
) -> std::result::Result<String, LossmapError> {
    if report.is_empty() {
        return Err(LossmapError::Print("no report content present"));
    }

    let mut html = String::new();
    push_head(&mut html);
    push_header(&mut html);
    push_summary(&mut html, report, context);
    push_table(&mut html, report);
    push_insight(&mut html, report);
    html.push_str("<div class=\"footer\">This report is generated based on your assessment inputs. Actual results may vary.</div>\n");
    html.push_str("</body>\n</html>\n");
    Ok(html)
}

fn push_head(html: &mut String) {
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<title>Leadership Loss Assessment Report</title>\n");
    let _ = writeln!(html, "<style>{PRINT_STYLE}</style>");
    html.push_str("</head>\n<body>\n");
}

fn push_header(html: &mut String) {
    html.push_str("<div class=\"header\">\n");
    html.push_str("<h1>Leadership Loss Assessment Report</h1>\n");
    html.push_str("<p>Comprehensive Analysis of Leadership Gaps &amp; Financial Impact</p>\n");
    html.push_str("</div>\n");
}

fn push_summary(html: &mut String, report: &LossReport, context: &ReportContext) {
    html.push_str("<h2>Executive Summary</h2>\n");
    if let Some(company) = &context.company {
        let _ = writeln!(html, "<p><strong>Company:</strong> {}</p>", encode_text(company));
    }
    if let Some(generated) = context.generated {
        let _ = writeln!(
            html,
            "<p><strong>Report Date:</strong> {}</p>",
            generated.format("%-d %B %Y")
        );
    }
    let _ = writeln!(
        html,
        "<p><strong>Areas Evaluated:</strong> {} out of {}</p>",
        report.active_count(),
        report.catalog_size()
    );
    let _ = writeln!(
        html,
        "<p><strong>Critical Areas Identified:</strong> {}</p>",
        report.scored().len()
    );

    html.push_str("<div class=\"summary-box\">\n<h3>CRITICAL FINANCIAL IMPACT</h3>\n");
    let _ = writeln!(
        html,
        "<p>Monthly Loss: <span class=\"critical-loss\">{}</span></p>",
        format_inr(report.total_monthly())
    );
    let _ = writeln!(
        html,
        "<p>Annual Loss: <span class=\"critical-loss\">{}</span></p>",
        format_inr(report.total_annual())
    );
    html.push_str("</div>\n");
}

fn push_table(html: &mut String, report: &LossReport) {
    html.push_str("<table>\n<thead>\n<tr><th>Leadership Area</th><th>Monthly Loss</th><th>Annual Loss</th><th>Priority</th></tr>\n</thead>\n<tbody>\n");
    for (gap, tier) in report.ranked_with_tiers() {
        let _ = writeln!(
            html,
            "<tr><td>{}<br><small>{}</small></td><td>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>",
            encode_text(gap.definition.title),
            encode_text(gap.definition.description),
            format_inr(gap.loss.monthly),
            format_inr(gap.loss.annual),
            tier.css_class(),
            tier.label()
        );
    }
    html.push_str("</tbody>\n</table>\n");
}

fn push_insight(html: &mut String, report: &LossReport) {
    let _ = writeln!(
        html,
        "<blockquote class=\"insight\">\"You are losing approximately <strong>{}</strong> annually due to unaddressed leadership gaps. The cost of inaction is invisible — until you measure it. Is leadership development an expense, or your biggest ROI opportunity?\"</blockquote>",
        format_inr(report.total_annual())
    );
}

pub struct HtmlWriter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for HtmlWriter<W> {
    fn write_report(&mut self, report: &LossReport, context: &ReportContext) -> Result<()> {
        let document = render_print_document(report, context)?;
        self.writer.write_all(document.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GapRecord;

    fn active(id: u32, quantity: f64, unit_cost: f64) -> GapRecord {
        GapRecord {
            id,
            active: true,
            quantity,
            unit_cost,
        }
    }

    #[test]
    fn document_is_standalone_and_styled() {
        let report = LossReport::compose(&[active(1, 5.0, 500.0), active(2, 3.0, 15_000.0)]);
        let context = ReportContext {
            company: Some("Verma & Sons".into()),
            generated: chrono::NaiveDate::from_ymd_opt(2026, 8, 5),
        };
        let html = render_print_document(&report, &context).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("@page { margin: 1in; size: A4; }"));
        // Ampersand in the company name must be escaped
        assert!(html.contains("Verma &amp; Sons"));
        assert!(html.contains("₹6,60,000"));
        assert!(html.contains("class=\"high-priority\">HIGH"));
        assert!(html.contains("class=\"low-priority\">LOW"));
    }

    #[test]
    fn empty_report_refuses_to_print() {
        let report = LossReport::compose(&[]);
        let result = render_print_document(&report, &ReportContext::default());
        assert!(matches!(result, Err(LossmapError::Print(_))));
    }
}
