//! Loss calculation for a single gap record.
//!
//! `compute_loss` is a total function. Inactive records and non-positive
//! inputs produce zero figures; no input can produce a negative loss.

use crate::core::{CalculationMode, GapRecord, LossFigures};

/// Weekly rates are scaled to a uniform 4-week month.
const WEEKS_PER_MONTH: f64 = 4.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Compute monthly and annual loss for one gap record.
///
/// Returns `{0, 0}` when the record is inactive or either numeric input
/// is non-positive.
pub fn compute_loss(record: &GapRecord, mode: CalculationMode) -> LossFigures {
    if !record.active || record.quantity <= 0.0 || record.unit_cost <= 0.0 {
        return LossFigures::ZERO;
    }

    let monthly = match mode {
        CalculationMode::WeeklyHours => record.quantity * record.unit_cost * WEEKS_PER_MONTH,
        CalculationMode::MonthlyIncidents => record.quantity * record.unit_cost,
    };

    LossFigures {
        monthly,
        annual: monthly * MONTHS_PER_YEAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(active: bool, quantity: f64, unit_cost: f64) -> GapRecord {
        GapRecord {
            id: 1,
            active,
            quantity,
            unit_cost,
        }
    }

    #[test]
    fn inactive_record_loses_nothing() {
        let loss = compute_loss(&record(false, 5.0, 500.0), CalculationMode::WeeklyHours);
        assert_eq!(loss, LossFigures::ZERO);
    }

    #[test]
    fn zero_quantity_loses_nothing() {
        let loss = compute_loss(&record(true, 0.0, 500.0), CalculationMode::WeeklyHours);
        assert_eq!(loss, LossFigures::ZERO);
    }

    #[test]
    fn zero_cost_loses_nothing() {
        let loss = compute_loss(&record(true, 5.0, 0.0), CalculationMode::MonthlyIncidents);
        assert_eq!(loss, LossFigures::ZERO);
    }

    #[test]
    fn negative_inputs_lose_nothing() {
        let loss = compute_loss(&record(true, -2.0, 500.0), CalculationMode::WeeklyHours);
        assert_eq!(loss, LossFigures::ZERO);
        let loss = compute_loss(&record(true, 5.0, -1.0), CalculationMode::WeeklyHours);
        assert_eq!(loss, LossFigures::ZERO);
    }

    #[test]
    fn weekly_hours_scales_to_four_week_month() {
        // 5 hours/week at 500/hour
        let loss = compute_loss(&record(true, 5.0, 500.0), CalculationMode::WeeklyHours);
        assert_eq!(loss.monthly, 10_000.0);
        assert_eq!(loss.annual, 120_000.0);
    }

    #[test]
    fn monthly_incidents_multiply_directly() {
        // 3 incidents/month at 15,000/incident
        let loss = compute_loss(&record(true, 3.0, 15_000.0), CalculationMode::MonthlyIncidents);
        assert_eq!(loss.monthly, 45_000.0);
        assert_eq!(loss.annual, 540_000.0);
    }
}
