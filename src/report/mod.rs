//! Report composition: aggregate active gap records into the figures every
//! render target consumes.
//!
//! The composer joins records against the catalog, attaches computed losses,
//! and derives totals, a stable descending ranking, and relative priority
//! tiers. All three render targets (terminal/markdown/JSON summary, print
//! document, paginated export document) read the same aggregate.

pub mod charts;
pub mod tiers;

use crate::catalog;
use crate::core::{GapDefinition, GapRecord, LossFigures};
use crate::scoring::compute_loss;

pub use tiers::{classify_tier, PriorityTier};

/// One active gap with its computed loss attached
#[derive(Debug, Clone, Copy)]
pub struct ScoredGap {
    pub definition: &'static GapDefinition,
    pub record: GapRecord,
    pub loss: LossFigures,
}

/// Aggregated view over one assessment's records
#[derive(Debug, Clone)]
pub struct LossReport {
    /// Active gaps with positive annual loss, in encounter order
    scored: Vec<ScoredGap>,
    total: LossFigures,
    active_count: usize,
}

impl LossReport {
    /// Compose the aggregate from a slice of gap records.
    ///
    /// Records whose id is not in the catalog are skipped with a warning;
    /// active records with zero loss never appear in any report view.
    pub fn compose(records: &[GapRecord]) -> Self {
        let active_count = records.iter().filter(|r| r.active).count();

        let mut scored = Vec::new();
        let mut total = LossFigures::ZERO;
        for record in records.iter().filter(|r| r.active) {
            let Some(definition) = catalog::gap(record.id) else {
                log::warn!("skipping record for unknown gap id {}", record.id);
                continue;
            };
            let loss = compute_loss(record, definition.mode);
            if loss.annual > 0.0 {
                total.monthly += loss.monthly;
                total.annual += loss.annual;
                scored.push(ScoredGap {
                    definition,
                    record: *record,
                    loss,
                });
            }
        }

        Self {
            scored,
            total,
            active_count,
        }
    }

    /// Scored gaps in encounter order
    pub fn scored(&self) -> &[ScoredGap] {
        &self.scored
    }

    /// True when no active gap produced a positive loss
    pub fn is_empty(&self) -> bool {
        self.scored.is_empty()
    }

    pub fn total_monthly(&self) -> f64 {
        self.total.monthly
    }

    pub fn total_annual(&self) -> f64 {
        self.total.annual
    }

    /// Count of records with the activity flag set (including zero-loss ones)
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Size of the full catalog, for "N out of 23" summary lines
    pub fn catalog_size(&self) -> usize {
        catalog::GAPS.len()
    }

    /// Largest annual loss across scored gaps
    pub fn max_annual(&self) -> Option<f64> {
        self.scored
            .iter()
            .map(|gap| gap.loss.annual)
            .fold(None, |max, annual| match max {
                Some(m) if m >= annual => Some(m),
                _ => Some(annual),
            })
    }

    /// Scored gaps sorted descending by annual loss; ties keep encounter
    /// order (stable sort)
    pub fn ranked(&self) -> Vec<&ScoredGap> {
        let mut ranked: Vec<&ScoredGap> = self.scored.iter().collect();
        ranked.sort_by(|a, b| b.loss.annual.total_cmp(&a.loss.annual));
        ranked
    }

    /// The top N ranked gaps
    pub fn top(&self, n: usize) -> Vec<&ScoredGap> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Tier for an annual loss relative to this report's maximum.
    ///
    /// None when the report is empty; no tiers exist then and render
    /// targets fall back to their placeholder states.
    pub fn tier_for(&self, annual_loss: f64) -> Option<PriorityTier> {
        self.max_annual().map(|max| classify_tier(annual_loss, max))
    }

    /// Ranked gaps with their tiers attached; empty for an empty report
    pub fn ranked_with_tiers(&self) -> Vec<(&ScoredGap, PriorityTier)> {
        let Some(max) = self.max_annual() else {
            return Vec::new();
        };
        self.ranked()
            .into_iter()
            .map(|gap| (gap, classify_tier(gap.loss.annual, max)))
            .collect()
    }

    /// Projected annual savings if half the identified loss is recovered
    pub fn potential_savings(&self) -> f64 {
        self.total.annual * 0.5
    }

    /// Typical investment range for addressing the identified gaps
    pub fn typical_investment(&self) -> (f64, f64) {
        (self.total.annual * 0.1, self.total.annual * 0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(id: u32, quantity: f64, unit_cost: f64) -> GapRecord {
        GapRecord {
            id,
            active: true,
            quantity,
            unit_cost,
        }
    }

    #[test]
    fn totals_sum_scored_gaps_exactly() {
        // gap 1 is weekly_hours: 5 × 500 × 4 = 10,000/month
        // gap 2 is monthly_incidents: 3 × 15,000 = 45,000/month
        let report = LossReport::compose(&[active(1, 5.0, 500.0), active(2, 3.0, 15_000.0)]);
        assert_eq!(report.total_monthly(), 55_000.0);
        assert_eq!(report.total_annual(), 660_000.0);
        assert_eq!(report.scored().len(), 2);
    }

    #[test]
    fn inactive_and_zero_input_records_never_appear() {
        let records = [
            GapRecord {
                id: 1,
                active: false,
                quantity: 5.0,
                unit_cost: 500.0,
            },
            active(2, 0.0, 15_000.0),
            active(3, 4.0, 0.0),
        ];
        let report = LossReport::compose(&records);
        assert!(report.is_empty());
        assert_eq!(report.total_annual(), 0.0);
        // active flags still count toward areas evaluated
        assert_eq!(report.active_count(), 2);
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let report = LossReport::compose(&[active(999, 5.0, 500.0), active(1, 5.0, 500.0)]);
        assert_eq!(report.scored().len(), 1);
        assert_eq!(report.scored()[0].definition.id, 1);
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        // gaps 2 and 4 are both monthly_incidents; equal losses keep
        // encounter order
        let records = [
            active(1, 5.0, 500.0),       // 120,000 annual
            active(2, 3.0, 15_000.0),    // 540,000 annual
            active(4, 3.0, 15_000.0),    // 540,000 annual, ties with gap 2
        ];
        let report = LossReport::compose(&records);
        let ranked: Vec<u32> = report.ranked().iter().map(|g| g.definition.id).collect();
        assert_eq!(ranked, vec![2, 4, 1]);
    }

    #[test]
    fn concrete_tiering_scenario() {
        let report = LossReport::compose(&[active(1, 5.0, 500.0), active(2, 3.0, 15_000.0)]);
        assert_eq!(report.total_annual(), 660_000.0);

        let tiers = report.ranked_with_tiers();
        assert_eq!(tiers[0].0.definition.id, 2);
        assert_eq!(tiers[0].1, PriorityTier::High);
        // 120,000 ≤ 0.3 × 540,000 = 162,000, so LOW
        assert_eq!(tiers[1].0.definition.id, 1);
        assert_eq!(tiers[1].1, PriorityTier::Low);
    }

    #[test]
    fn empty_report_has_no_tiers() {
        let report = LossReport::compose(&[]);
        assert!(report.max_annual().is_none());
        assert!(report.tier_for(100.0).is_none());
        assert!(report.ranked_with_tiers().is_empty());
    }

    #[test]
    fn roi_projection_uses_fixed_ratios() {
        let report = LossReport::compose(&[active(2, 3.0, 15_000.0)]);
        assert_eq!(report.potential_savings(), 270_000.0);
        assert_eq!(report.typical_investment(), (54_000.0, 108_000.0));
    }
}
