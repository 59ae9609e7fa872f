/// Priority tier classification for scored gaps
///
/// Tiers are relative to the largest annual loss in the current report, so a
/// report always surfaces its worst gap as HIGH regardless of absolute size.
use serde::{Deserialize, Serialize};

/// Coarse classification of a gap's financial impact within one report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityTier {
    /// Above 70% of the report's maximum annual loss
    High,
    /// Above 30% of the report's maximum annual loss
    Medium,
    /// Everything else
    Low,
}

/// HIGH when annual loss exceeds this share of the maximum
pub const HIGH_SHARE: f64 = 0.7;
/// MEDIUM when annual loss exceeds this share of the maximum
pub const MEDIUM_SHARE: f64 = 0.3;

impl PriorityTier {
    /// Get tier label for display
    pub fn label(&self) -> &'static str {
        match self {
            PriorityTier::High => "HIGH",
            PriorityTier::Medium => "MEDIUM",
            PriorityTier::Low => "LOW",
        }
    }

    /// CSS class used by the print document
    pub fn css_class(&self) -> &'static str {
        match self {
            PriorityTier::High => "high-priority",
            PriorityTier::Medium => "medium-priority",
            PriorityTier::Low => "low-priority",
        }
    }

    /// Hex color used by the export document
    pub fn color(&self) -> &'static str {
        match self {
            PriorityTier::High => "#DC2626",
            PriorityTier::Medium => "#F59E0B",
            PriorityTier::Low => "#22C55E",
        }
    }
}

/// Classify one gap's annual loss against the report maximum.
///
/// Thresholds are strict inequalities: a gap at exactly 30% of the maximum
/// is LOW, at exactly 70% MEDIUM. The gap achieving the maximum is always
/// HIGH.
pub fn classify_tier(annual_loss: f64, max_annual_loss: f64) -> PriorityTier {
    if annual_loss > HIGH_SHARE * max_annual_loss {
        PriorityTier::High
    } else if annual_loss > MEDIUM_SHARE * max_annual_loss {
        PriorityTier::Medium
    } else {
        PriorityTier::Low
    }
}
