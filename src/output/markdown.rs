use crate::formatting::{format_inr, format_percent};
use crate::output::{ReportContext, ReportWriter};
use crate::report::charts::pie_wedges;
use crate::report::LossReport;
use anyhow::Result;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &LossReport, context: &ReportContext) -> Result<()> {
        self.write_header(context)?;
        self.write_summary(report)?;
        self.write_breakdown(report)?;
        self.write_contribution(report)?;
        self.write_roi(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, context: &ReportContext) -> Result<()> {
        writeln!(self.writer, "# Leadership Loss Assessment Report")?;
        writeln!(self.writer)?;
        if let Some(company) = &context.company {
            writeln!(self.writer, "Company: {company}")?;
        }
        if let Some(generated) = context.generated {
            writeln!(self.writer, "Generated: {}", generated.format("%-d %B %Y"))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &LossReport) -> Result<()> {
        writeln!(self.writer, "## Executive Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Areas Evaluated | {} out of {} |",
            report.active_count(),
            report.catalog_size()
        )?;
        writeln!(
            self.writer,
            "| Critical Areas Identified | {} |",
            report.scored().len()
        )?;
        writeln!(
            self.writer,
            "| Total Monthly Loss | {} |",
            format_inr(report.total_monthly())
        )?;
        writeln!(
            self.writer,
            "| Total Annual Loss | {} |",
            format_inr(report.total_annual())
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &LossReport) -> Result<()> {
        writeln!(self.writer, "## Financial Breakdown")?;
        writeln!(self.writer)?;

        if report.is_empty() {
            writeln!(
                self.writer,
                "No active leadership gaps produced a positive loss."
            )?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| Leadership Area | Monthly Loss | Annual Loss | Priority |"
        )?;
        writeln!(
            self.writer,
            "|-----------------|--------------|-------------|----------|"
        )?;
        for (gap, tier) in report.ranked_with_tiers() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                gap.definition.title,
                format_inr(gap.loss.monthly),
                format_inr(gap.loss.annual),
                tier.label()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_contribution(&mut self, report: &LossReport) -> Result<()> {
        let wedges = pie_wedges(report);
        if wedges.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Contribution to Total Loss")?;
        writeln!(self.writer)?;
        for wedge in wedges {
            writeln!(
                self.writer,
                "- {}: {}",
                wedge.title,
                format_percent(wedge.share * 100.0)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_roi(&mut self, report: &LossReport) -> Result<()> {
        if report.is_empty() {
            return Ok(());
        }
        let (low, high) = report.typical_investment();
        writeln!(self.writer, "## Investment ROI Projection")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "If 50% of identified gaps are addressed within 12 months:"
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Potential Annual Savings: {}",
            format_inr(report.potential_savings())
        )?;
        writeln!(
            self.writer,
            "- Typical Investment: {} - {}",
            format_inr(low),
            format_inr(high)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GapRecord;

    fn render(records: &[GapRecord]) -> String {
        let report = LossReport::compose(records);
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&report, &ReportContext::default())
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn breakdown_table_is_ranked_with_tiers() {
        let output = render(&[
            GapRecord {
                id: 1,
                active: true,
                quantity: 5.0,
                unit_cost: 500.0,
            },
            GapRecord {
                id: 2,
                active: true,
                quantity: 3.0,
                unit_cost: 15_000.0,
            },
        ]);

        assert!(output.contains("| Total Annual Loss | ₹6,60,000 |"));
        let high_pos = output.find("Emotional Intelligence").unwrap();
        let low_pos = output.find("Communication Gap").unwrap();
        assert!(high_pos < low_pos);
        assert!(output.contains("| Emotional Intelligence | ₹45,000 | ₹5,40,000 | HIGH |"));
        assert!(output.contains("| Communication Gap | ₹10,000 | ₹1,20,000 | LOW |"));
    }

    #[test]
    fn empty_report_renders_placeholder() {
        let output = render(&[]);
        assert!(output.contains("No active leadership gaps produced a positive loss."));
        assert!(!output.contains("Investment ROI Projection"));
    }
}
