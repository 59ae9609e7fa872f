//! Display-category classification for catalog gaps.
//!
//! An ordered list of keyword rules evaluated in priority order, with a
//! catch-all default. Categories are advisory grouping for presentation and
//! never affect the data model.

use crate::core::GapDefinition;

pub const GENERAL_CATEGORY: &str = "General Leadership";

/// (keywords, category) pairs; first rule whose keyword matches the
/// lowercased title wins.
const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (
        &["communication", "email", "meeting"],
        "Communication & Meetings",
    ),
    (
        &["conflict", "emotional"],
        "Emotional Intelligence & Conflict",
    ),
    (
        &["coaching", "training", "feedback"],
        "Development & Coaching",
    ),
    (
        &["delegation", "decision", "problem"],
        "Decision Making & Delegation",
    ),
    (
        &["time", "productivity", "project"],
        "Time & Project Management",
    ),
];

/// Classify a gap title into a display category
pub fn classify_category(title: &str) -> &'static str {
    let title = title.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| title.contains(kw)))
        .map(|(_, category)| *category)
        .unwrap_or(GENERAL_CATEGORY)
}

/// Group gaps by classified category, categories in first-seen order
pub fn group_by_category<'a, I>(gaps: I) -> Vec<(&'static str, Vec<&'a GapDefinition>)>
where
    I: IntoIterator<Item = &'a GapDefinition>,
{
    let mut groups: Vec<(&'static str, Vec<&GapDefinition>)> = Vec::new();
    for gap in gaps {
        let category = classify_category(gap.title);
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, members)) => members.push(gap),
            None => groups.push((category, vec![gap])),
        }
    }
    groups
}
