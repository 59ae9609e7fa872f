use crate::formatting::{format_inr, format_percent};
use crate::output::{ReportContext, ReportWriter};
use crate::report::charts::{bar_percent, pie_wedges};
use crate::report::{LossReport, PriorityTier};
use anyhow::Result;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::io::Write;

const BAR_WIDTH: usize = 40;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &LossReport, context: &ReportContext) -> Result<()> {
        self.write_header(context)?;

        if report.is_empty() {
            writeln!(
                self.writer,
                "No active leadership gaps to display. Toggle some challenges to see your financial impact."
            )?;
            return Ok(());
        }

        self.write_summary(report)?;
        self.write_breakdown(report)?;
        self.write_bars(report)?;
        self.write_contribution(report)?;
        self.write_insight(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, context: &ReportContext) -> Result<()> {
        writeln!(
            self.writer,
            "{}",
            "Leadership Loss Assessment Report".bold().blue()
        )?;
        writeln!(self.writer, "{}", "=================================".blue())?;
        if let Some(company) = &context.company {
            writeln!(self.writer, "Company: {company}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &LossReport) -> Result<()> {
        writeln!(self.writer, "Summary:")?;
        writeln!(
            self.writer,
            "  Areas evaluated: {} out of {}",
            report.active_count(),
            report.catalog_size()
        )?;
        writeln!(
            self.writer,
            "  Critical areas identified: {}",
            report.scored().len()
        )?;
        writeln!(
            self.writer,
            "  Total monthly loss: {}",
            format_inr(report.total_monthly()).yellow().bold()
        )?;
        writeln!(
            self.writer,
            "  Total annual loss: {}",
            format_inr(report.total_annual()).red().bold()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &LossReport) -> Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Leadership Area", "Monthly Loss", "Annual Loss", "Priority"]);

        for (gap, tier) in report.ranked_with_tiers() {
            table.add_row(vec![
                Cell::new(gap.definition.title),
                Cell::new(format_inr(gap.loss.monthly)),
                Cell::new(format_inr(gap.loss.annual)),
                Cell::new(colored_tier(tier)),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_bars(&mut self, report: &LossReport) -> Result<()> {
        writeln!(self.writer, "Annual loss by leadership gap:")?;
        for gap in report.scored() {
            let percent = bar_percent(gap, report);
            let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
            let bar = "█".repeat(filled.max(1));
            writeln!(
                self.writer,
                "  {:<28} {} {}",
                gap.definition.title,
                bar.red(),
                format_inr(gap.loss.annual)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_contribution(&mut self, report: &LossReport) -> Result<()> {
        writeln!(self.writer, "Contribution to total loss:")?;
        for wedge in pie_wedges(report) {
            writeln!(
                self.writer,
                "  {:<28} {}",
                wedge.title,
                format_percent(wedge.share * 100.0)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_insight(&mut self, report: &LossReport) -> Result<()> {
        writeln!(
            self.writer,
            "You are losing approximately {} annually due to unaddressed leadership gaps.",
            format_inr(report.total_annual()).red().bold()
        )?;
        writeln!(
            self.writer,
            "The cost of inaction is invisible — until you measure it."
        )?;
        Ok(())
    }
}

fn colored_tier(tier: PriorityTier) -> String {
    match tier {
        PriorityTier::High => tier.label().red().bold().to_string(),
        PriorityTier::Medium => tier.label().yellow().to_string(),
        PriorityTier::Low => tier.label().green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GapRecord;

    fn render(records: &[GapRecord]) -> String {
        colored::control::set_override(false);
        let report = LossReport::compose(records);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&report, &ReportContext::default())
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn summary_and_table_render_for_scored_gaps() {
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

        assert!(output.contains("Total annual loss: ₹6,60,000"));
        assert!(output.contains("Emotional Intelligence"));
        assert!(output.contains("HIGH"));
        assert!(output.contains("LOW"));
        assert!(output.contains("100.0%") || output.contains("81.8%"));
    }

    #[test]
    fn empty_report_prints_the_placeholder() {
        let output = render(&[]);
        assert!(output.contains("No active leadership gaps to display."));
        assert!(!output.contains("Summary:"));
    }
}
