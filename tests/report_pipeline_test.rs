//! End-to-end checks over the composition pipeline: catalog → records →
//! report → tiers, matching the documented aggregate contracts.

use lossmap::report::charts::pie_wedges;
use lossmap::{catalog, GapRecord, LossReport, PriorityTier};
use pretty_assertions::assert_eq;

fn active(id: u32, quantity: f64, unit_cost: f64) -> GapRecord {
    GapRecord {
        id,
        active: true,
        quantity,
        unit_cost,
    }
}

#[test]
fn totals_equal_the_sum_of_scored_gaps_over_the_full_catalog() {
    let records: Vec<GapRecord> = catalog::GAPS
        .iter()
        .enumerate()
        .map(|(index, gap)| active(gap.id, (index + 1) as f64, 1_000.0))
        .collect();

    let report = LossReport::compose(&records);
    assert_eq!(report.scored().len(), catalog::GAPS.len());

    let monthly_sum: f64 = report.scored().iter().map(|g| g.loss.monthly).sum();
    let annual_sum: f64 = report.scored().iter().map(|g| g.loss.annual).sum();
    assert_eq!(report.total_monthly(), monthly_sum);
    assert_eq!(report.total_annual(), annual_sum);
}

#[test]
fn ranking_is_non_increasing_and_stable() {
    // Two pairs of equal annual losses across different modes:
    // gap 2 (monthly) 10 × 4,000 = 40,000/mo; gap 8 (weekly) 10 × 1,000 × 4
    // = 40,000/mo. Encounter order must survive the tie.
    let records = [
        active(2, 10.0, 4_000.0),
        active(8, 10.0, 1_000.0),
        active(1, 1.0, 100.0),
    ];
    let report = LossReport::compose(&records);

    let ranked = report.ranked();
    for pair in ranked.windows(2) {
        assert!(pair[0].loss.annual >= pair[1].loss.annual);
    }
    assert_eq!(ranked[0].definition.id, 2);
    assert_eq!(ranked[1].definition.id, 8);
}

#[test]
fn tiers_partition_scored_gaps_and_the_maximum_is_high() {
    // Annual losses: gap 2 → 1,200,000; gap 4 → 600,000 (50% → MEDIUM);
    // gap 5 → 120,000 (10% → LOW).
    let records = [
        active(2, 10.0, 10_000.0),
        active(4, 10.0, 5_000.0),
        active(5, 1.0, 10_000.0),
    ];
    let report = LossReport::compose(&records);
    let tiers = report.ranked_with_tiers();

    assert_eq!(tiers.len(), report.scored().len());
    assert_eq!(tiers[0].1, PriorityTier::High);
    assert_eq!(tiers[1].1, PriorityTier::Medium);
    assert_eq!(tiers[2].1, PriorityTier::Low);
}

#[test]
fn spec_scenario_120k_vs_540k() {
    let report = LossReport::compose(&[active(1, 5.0, 500.0), active(2, 3.0, 15_000.0)]);

    assert_eq!(report.total_annual(), 660_000.0);
    let tiers = report.ranked_with_tiers();
    assert_eq!(tiers[0].0.loss.annual, 540_000.0);
    assert_eq!(tiers[0].1, PriorityTier::High);
    assert_eq!(tiers[1].0.loss.annual, 120_000.0);
    assert_eq!(tiers[1].1, PriorityTier::Low);
}

#[test]
fn wedge_angles_accumulate_share_of_total() {
    let records = [
        active(1, 5.0, 500.0),      // 120,000
        active(2, 3.0, 15_000.0),   // 540,000
    ];
    let report = LossReport::compose(&records);
    let wedges = pie_wedges(&report);

    assert_eq!(wedges[0].start_angle, 0.0);
    let expected_sweep = 360.0 * 120_000.0 / 660_000.0;
    assert!((wedges[0].sweep - expected_sweep).abs() < 1e-9);
    assert!((wedges[1].start_angle - expected_sweep).abs() < 1e-9);
    assert!((wedges[1].start_angle + wedges[1].sweep - 360.0).abs() < 1e-9);
}

#[test]
fn zero_loss_actives_count_toward_evaluation_but_not_reports() {
    let records = [
        active(1, 5.0, 500.0),
        GapRecord {
            id: 2,
            active: true,
            quantity: 0.0,
            unit_cost: 0.0,
        },
    ];
    let report = LossReport::compose(&records);
    assert_eq!(report.active_count(), 2);
    assert_eq!(report.scored().len(), 1);
    assert_eq!(report.total_annual(), 120_000.0);
}
