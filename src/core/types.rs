//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};

/// How a gap's monthly loss is derived from its two numeric inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Quantity is a recurring weekly rate, scaled to a 4-week month
    WeeklyHours,
    /// Quantity is already a monthly count
    MonthlyIncidents,
}

impl CalculationMode {
    /// Get the display name for this mode
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculationMode::WeeklyHours => "weekly hours",
            CalculationMode::MonthlyIncidents => "monthly incidents",
        }
    }
}

/// Immutable catalog entry describing one leadership gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GapDefinition {
    /// Unique id, stable across sessions
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub mode: CalculationMode,
    /// Label for the usage-quantity input
    pub quantity_label: &'static str,
    /// Label for the unit-cost input
    pub cost_label: &'static str,
}

/// Mutable per-session state for one gap; one record exists per catalog
/// entry. Records are only toggled or reset, never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapRecord {
    pub id: u32,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit_cost: f64,
}

impl GapRecord {
    pub fn inactive(id: u32) -> Self {
        Self {
            id,
            active: false,
            quantity: 0.0,
            unit_cost: 0.0,
        }
    }

    /// Clear the activity flag and both numeric inputs
    pub fn reset(&mut self) {
        self.active = false;
        self.quantity = 0.0;
        self.unit_cost = 0.0;
    }
}

/// Derived monthly/annual loss figures for one gap
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LossFigures {
    pub monthly: f64,
    pub annual: f64,
}

impl LossFigures {
    pub const ZERO: LossFigures = LossFigures {
        monthly: 0.0,
        annual: 0.0,
    };
}

/// A user-facing problem statement shown during the identification step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProblemStatement {
    pub id: &'static str,
    pub text: &'static str,
    pub category: &'static str,
}

/// Links one problem statement to the gaps it suggests assessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProblemMapping {
    pub problem_id: &'static str,
    /// Ordered; overlap across mappings is deduplicated by the session
    pub suggested_gaps: &'static [u32],
    pub explanation: &'static str,
}
