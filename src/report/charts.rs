//! Chart geometry derived from a composed report: pie wedges for the
//! contribution chart and bar percentages for the comparison chart.
//!
//! Geometry is computed here so every consumer (terminal legend, export
//! document) draws identical shapes.

use crate::report::{LossReport, ScoredGap};

/// Fixed wedge palette, assigned cyclically by scored-gap index
pub const PALETTE: [&str; 11] = [
    "#EF4444", "#F97316", "#EAB308", "#22C55E", "#3B82F6", "#8B5CF6", "#EC4899", "#06B6D4",
    "#84CC16", "#F59E0B", "#10B981",
];

/// One pie wedge, angles in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieWedge {
    pub gap_id: u32,
    pub title: &'static str,
    /// Cumulative share of gaps before this one, as a start angle
    pub start_angle: f64,
    pub sweep: f64,
    /// This gap's fraction of the total annual loss, 0..=1
    pub share: f64,
    pub color: &'static str,
}

/// Wedges for the contribution-to-total chart, in encounter order.
///
/// Empty when the report has no scored gaps; the degenerate zero-total case
/// never divides.
pub fn pie_wedges(report: &LossReport) -> Vec<PieWedge> {
    let total = report.total_annual();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut cumulative = 0.0;
    report
        .scored()
        .iter()
        .enumerate()
        .map(|(index, gap)| {
            let share = gap.loss.annual / total;
            let wedge = PieWedge {
                gap_id: gap.definition.id,
                title: gap.definition.title,
                start_angle: cumulative * 360.0,
                sweep: share * 360.0,
                share,
                color: PALETTE[index % PALETTE.len()],
            };
            cumulative += share;
            wedge
        })
        .collect()
}

/// Bar length for the comparison chart, as a percentage of the report's
/// largest annual loss
pub fn bar_percent(gap: &ScoredGap, report: &LossReport) -> f64 {
    match report.max_annual() {
        Some(max) if max > 0.0 => gap.loss.annual / max * 100.0,
        _ => 0.0,
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
    fn wedges_cover_the_full_circle() {
        let report = LossReport::compose(&[
            active(1, 5.0, 500.0),
            active(2, 3.0, 15_000.0),
            active(3, 2.0, 1_000.0),
        ]);
        let wedges = pie_wedges(&report);
        assert_eq!(wedges.len(), 3);

        let total_sweep: f64 = wedges.iter().map(|w| w.sweep).sum();
        assert!((total_sweep - 360.0).abs() < 1e-9);

        // Each wedge starts where the previous one ended
        let mut expected_start = 0.0;
        for wedge in &wedges {
            assert!((wedge.start_angle - expected_start).abs() < 1e-9);
            expected_start += wedge.sweep;
        }
    }

    #[test]
    fn wedge_shares_match_loss_ratios() {
        // 120,000 and 540,000 of a 660,000 total
        let report = LossReport::compose(&[active(1, 5.0, 500.0), active(2, 3.0, 15_000.0)]);
        let wedges = pie_wedges(&report);
        assert!((wedges[0].share - 120_000.0 / 660_000.0).abs() < 1e-12);
        assert!((wedges[1].share - 540_000.0 / 660_000.0).abs() < 1e-12);
    }

    #[test]
    fn colors_cycle_through_the_palette() {
        let records: Vec<GapRecord> = (1..=13).map(|id| active(id, 1.0, 100.0)).collect();
        let report = LossReport::compose(&records);
        let wedges = pie_wedges(&report);
        assert_eq!(wedges.len(), 13);
        assert_eq!(wedges[0].color, PALETTE[0]);
        assert_eq!(wedges[11].color, PALETTE[0]);
        assert_eq!(wedges[12].color, PALETTE[1]);
    }

    #[test]
    fn empty_report_yields_no_wedges() {
        let report = LossReport::compose(&[]);
        assert!(pie_wedges(&report).is_empty());
    }

    #[test]
    fn bar_percent_is_relative_to_the_maximum() {
        let report = LossReport::compose(&[active(1, 5.0, 500.0), active(2, 3.0, 15_000.0)]);
        let scored = report.scored();
        assert!((bar_percent(&scored[1], &report) - 100.0).abs() < 1e-9);
        let smaller = bar_percent(&scored[0], &report);
        assert!((smaller - 120_000.0 / 540_000.0 * 100.0).abs() < 1e-9);
    }
}
