use crate::output::{ReportContext, ReportWriter};
use crate::report::charts::{bar_percent, pie_wedges};
use crate::report::LossReport;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Serializable projection of a composed report, ranked order
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub generated: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub summary: SummaryView,
    pub gaps: Vec<GapView>,
    pub wedges: Vec<WedgeView>,
}

#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub areas_evaluated: usize,
    pub catalog_size: usize,
    pub critical_areas: usize,
    pub total_monthly_loss: f64,
    pub total_annual_loss: f64,
    pub potential_annual_savings: f64,
}

#[derive(Debug, Serialize)]
pub struct GapView {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub monthly_loss: f64,
    pub annual_loss: f64,
    pub priority: &'static str,
    pub bar_percent: f64,
}

#[derive(Debug, Serialize)]
pub struct WedgeView {
    pub gap_id: u32,
    pub start_angle: f64,
    pub sweep: f64,
    pub share: f64,
    pub color: &'static str,
}

impl ReportView {
    pub fn new(report: &LossReport, context: &ReportContext) -> Self {
        let gaps = report
            .ranked_with_tiers()
            .into_iter()
            .map(|(gap, tier)| GapView {
                id: gap.definition.id,
                title: gap.definition.title,
                description: gap.definition.description,
                monthly_loss: gap.loss.monthly,
                annual_loss: gap.loss.annual,
                priority: tier.label(),
                bar_percent: bar_percent(gap, report),
            })
            .collect();

        let wedges = pie_wedges(report)
            .into_iter()
            .map(|wedge| WedgeView {
                gap_id: wedge.gap_id,
                start_angle: wedge.start_angle,
                sweep: wedge.sweep,
                share: wedge.share,
                color: wedge.color,
            })
            .collect();

        Self {
            generated: context.generated,
            company: context.company.clone(),
            summary: SummaryView {
                areas_evaluated: report.active_count(),
                catalog_size: report.catalog_size(),
                critical_areas: report.scored().len(),
                total_monthly_loss: report.total_monthly(),
                total_annual_loss: report.total_annual(),
                potential_annual_savings: report.potential_savings(),
            },
            gaps,
            wedges,
        }
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &LossReport, context: &ReportContext) -> Result<()> {
        let view = ReportView::new(report, context);
        let json = serde_json::to_string_pretty(&view)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}
