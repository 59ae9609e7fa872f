//! Static reference data: the gap catalog, the user-facing problem
//! statements, and the problem-to-gap mapping table.
//!
//! All tables are module-level constants with process lifetime; nothing here
//! is recreated per session.

pub mod classify;

use crate::core::CalculationMode::{MonthlyIncidents, WeeklyHours};
use crate::core::{GapDefinition, ProblemMapping, ProblemStatement};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

pub static GAPS: [GapDefinition; 23] = [
    GapDefinition {
        id: 1,
        title: "Communication Gap",
        description: "Misunderstandings, rework, unclear delegation",
        mode: WeeklyHours,
        quantity_label: "Hours wasted weekly due to poor communication",
        cost_label: "Estimated cost per hour (₹)",
    },
    GapDefinition {
        id: 2,
        title: "Emotional Intelligence",
        description: "Conflicts, attrition, emotional volatility",
        mode: MonthlyIncidents,
        quantity_label: "Number of emotional incidents monthly",
        cost_label: "Estimated cost per incident (₹)",
    },
    GapDefinition {
        id: 3,
        title: "Low Productivity",
        description: "Poor prioritization, task mismanagement",
        mode: WeeklyHours,
        quantity_label: "Hours lost weekly to poor productivity",
        cost_label: "Estimated cost per hour (₹)",
    },
    GapDefinition {
        id: 4,
        title: "Weak Problem Solving",
        description: "Unnecessary escalation to owner/senior leaders",
        mode: MonthlyIncidents,
        quantity_label: "Number of escalations monthly",
        cost_label: "Estimated cost per escalation (₹)",
    },
    GapDefinition {
        id: 5,
        title: "Poor Decision-Making",
        description: "Missed opportunities, wrong hires/vendors",
        mode: MonthlyIncidents,
        quantity_label: "Number of poor decisions monthly",
        cost_label: "Estimated cost per poor decision (₹)",
    },
    GapDefinition {
        id: 6,
        title: "Delegation Gap",
        description: "Owner doing everything, team lacks initiative",
        mode: WeeklyHours,
        quantity_label: "Owner's hours spent on delegable tasks weekly",
        cost_label: "Owner's hourly rate (₹)",
    },
    GapDefinition {
        id: 7,
        title: "Lack of Trust & Openness",
        description: "Concealed mistakes, poor collaboration",
        mode: MonthlyIncidents,
        quantity_label: "Trust-related incidents monthly",
        cost_label: "Estimated cost per incident (₹)",
    },
    GapDefinition {
        id: 8,
        title: "Ineffective Feedback",
        description: "Employees unaware of performance issues",
        mode: WeeklyHours,
        quantity_label: "Hours spent on performance issues weekly",
        cost_label: "Estimated cost per hour (₹)",
    },
    GapDefinition {
        id: 9,
        title: "Low Motivation & Ownership",
        description: "Passive team, missed targets",
        mode: MonthlyIncidents,
        quantity_label: "Number of missed targets monthly",
        cost_label: "Estimated cost per missed target (₹)",
    },
    GapDefinition {
        id: 10,
        title: "Conflict Mismanagement",
        description: "Inter-team friction, lost clients or deals",
        mode: MonthlyIncidents,
        quantity_label: "Number of conflicts monthly",
        cost_label: "Estimated cost per conflict (₹)",
    },
    GapDefinition {
        id: 11,
        title: "Mind Management Deficit",
        description: "Burnout, reactivity, poor emotional control",
        mode: WeeklyHours,
        quantity_label: "Hours lost to burnout/reactivity weekly",
        cost_label: "Estimated cost per hour (₹)",
    },
    GapDefinition {
        id: 12,
        title: "Situational Leadership",
        description: "Inability to adapt leadership style to different situations and team members",
        mode: WeeklyHours,
        quantity_label: "Hours wasted due to inappropriate leadership approach weekly",
        cost_label: "Estimated cost per hour (₹)",
    },
    GapDefinition {
        id: 13,
        title: "Coaching",
        description: "Lack of coaching skills to develop team members effectively",
        mode: WeeklyHours,
        quantity_label: "Hours that could be saved with better coaching weekly",
        cost_label: "Estimated cost per hour (₹)",
    },
    GapDefinition {
        id: 14,
        title: "Classroom Training",
        description: "Ineffective training delivery and knowledge transfer",
        mode: MonthlyIncidents,
        quantity_label: "Number of ineffective training sessions monthly",
        cost_label: "Estimated cost per failed training session (₹)",
    },
    GapDefinition {
        id: 15,
        title: "Meetings",
        description: "Unproductive meetings, poor facilitation, time wastage",
        mode: WeeklyHours,
        quantity_label: "Hours wasted in unproductive meetings weekly",
        cost_label: "Estimated cost per hour (₹)",
    },
    GapDefinition {
        id: 16,
        title: "One-on-One Coaching",
        description: "Lack of individual mentoring and personalized development",
        mode: WeeklyHours,
        quantity_label: "Hours lost due to lack of individual coaching weekly",
        cost_label: "Estimated cost per hour (₹)",
    },
    GapDefinition {
        id: 17,
        title: "Time Management",
        description: "Poor prioritization and time allocation across the organization",
        mode: WeeklyHours,
        quantity_label: "Hours wasted due to poor time management weekly",
        cost_label: "Estimated cost per hour (₹)",
    },
    GapDefinition {
        id: 18,
        title: "Interviewing",
        description: "Poor hiring decisions due to ineffective interview processes",
        mode: MonthlyIncidents,
        quantity_label: "Number of poor hiring decisions monthly",
        cost_label: "Estimated cost per bad hire (₹)",
    },
    GapDefinition {
        id: 19,
        title: "Delegation",
        description: "Ineffective task assignment and follow-up processes",
        mode: WeeklyHours,
        quantity_label: "Hours wasted due to poor delegation weekly",
        cost_label: "Estimated cost per hour (₹)",
    },
    GapDefinition {
        id: 20,
        title: "Conflict Management",
        description: "Inability to resolve disputes and maintain team harmony",
        mode: MonthlyIncidents,
        quantity_label: "Number of unresolved conflicts monthly",
        cost_label: "Estimated cost per unresolved conflict (₹)",
    },
    GapDefinition {
        id: 21,
        title: "Email Management",
        description: "Poor email communication and information overload",
        mode: WeeklyHours,
        quantity_label: "Hours wasted on email inefficiencies weekly",
        cost_label: "Estimated cost per hour (₹)",
    },
    GapDefinition {
        id: 22,
        title: "Project Management",
        description: "Lack of structured project planning and execution",
        mode: MonthlyIncidents,
        quantity_label: "Number of delayed/failed projects monthly",
        cost_label: "Estimated cost per project failure (₹)",
    },
    GapDefinition {
        id: 23,
        title: "Vision Centric",
        description: "Lack of clear vision communication and alignment",
        mode: WeeklyHours,
        quantity_label: "Hours lost due to lack of vision clarity weekly",
        cost_label: "Estimated cost per hour (₹)",
    },
];

pub static PROBLEMS: [ProblemStatement; 15] = [
    ProblemStatement {
        id: "communication-issues",
        text: "Team members often misunderstand instructions or tasks",
        category: "Communication",
    },
    ProblemStatement {
        id: "frequent-conflicts",
        text: "There are frequent conflicts or tensions between team members",
        category: "Team Dynamics",
    },
    ProblemStatement {
        id: "low-productivity",
        text: "Team productivity is lower than expected",
        category: "Performance",
    },
    ProblemStatement {
        id: "decision-delays",
        text: "Important decisions take too long to make",
        category: "Decision Making",
    },
    ProblemStatement {
        id: "employee-turnover",
        text: "Good employees are leaving the company",
        category: "Retention",
    },
    ProblemStatement {
        id: "missed-deadlines",
        text: "Projects frequently miss deadlines",
        category: "Project Management",
    },
    ProblemStatement {
        id: "lack-initiative",
        text: "Team members wait for instructions instead of taking initiative",
        category: "Ownership",
    },
    ProblemStatement {
        id: "poor-feedback",
        text: "Employees seem unaware of their performance issues",
        category: "Feedback",
    },
    ProblemStatement {
        id: "owner-overwhelm",
        text: "As an owner/manager, I feel overwhelmed doing everything myself",
        category: "Delegation",
    },
    ProblemStatement {
        id: "meeting-waste",
        text: "Meetings are unproductive and waste time",
        category: "Meetings",
    },
    ProblemStatement {
        id: "training-ineffective",
        text: "Training programs don't seem to improve performance",
        category: "Development",
    },
    ProblemStatement {
        id: "vision-unclear",
        text: "Team members don't understand the company vision or goals",
        category: "Vision",
    },
    ProblemStatement {
        id: "stress-burnout",
        text: "High stress levels and burnout in the team",
        category: "Well-being",
    },
    ProblemStatement {
        id: "hiring-mistakes",
        text: "We often make poor hiring decisions",
        category: "Hiring",
    },
    ProblemStatement {
        id: "email-chaos",
        text: "Email communication is chaotic and inefficient",
        category: "Communication",
    },
];

pub static MAPPINGS: [ProblemMapping; 15] = [
    ProblemMapping {
        problem_id: "communication-issues",
        suggested_gaps: &[1, 15, 21],
        explanation: "Communication issues often stem from poor communication skills, ineffective meetings, and email management problems.",
    },
    ProblemMapping {
        problem_id: "frequent-conflicts",
        suggested_gaps: &[2, 10, 20],
        explanation: "Team conflicts indicate gaps in emotional intelligence, conflict management, and overall conflict resolution skills.",
    },
    ProblemMapping {
        problem_id: "low-productivity",
        suggested_gaps: &[3, 17, 9],
        explanation: "Low productivity is often caused by poor prioritization, time management issues, and lack of motivation.",
    },
    ProblemMapping {
        problem_id: "decision-delays",
        suggested_gaps: &[5, 4],
        explanation: "Decision delays indicate poor decision-making processes and weak problem-solving capabilities.",
    },
    ProblemMapping {
        problem_id: "employee-turnover",
        suggested_gaps: &[2, 8, 9, 16],
        explanation: "High turnover often results from poor emotional intelligence, ineffective feedback, low motivation, and lack of individual coaching.",
    },
    ProblemMapping {
        problem_id: "missed-deadlines",
        suggested_gaps: &[22, 17, 19],
        explanation: "Missed deadlines indicate problems with project management, time management, and delegation.",
    },
    ProblemMapping {
        problem_id: "lack-initiative",
        suggested_gaps: &[9, 6, 7],
        explanation: "Lack of initiative stems from low motivation, poor delegation, and lack of trust and openness.",
    },
    ProblemMapping {
        problem_id: "poor-feedback",
        suggested_gaps: &[8, 13, 16],
        explanation: "Poor feedback indicates gaps in feedback skills, coaching abilities, and one-on-one coaching practices.",
    },
    ProblemMapping {
        problem_id: "owner-overwhelm",
        suggested_gaps: &[6, 19, 17],
        explanation: "Owner overwhelm is typically caused by delegation gaps, poor delegation skills, and time management issues.",
    },
    ProblemMapping {
        problem_id: "meeting-waste",
        suggested_gaps: &[15],
        explanation: "Unproductive meetings indicate a clear gap in meeting facilitation and management skills.",
    },
    ProblemMapping {
        problem_id: "training-ineffective",
        suggested_gaps: &[14, 13],
        explanation: "Ineffective training suggests problems with classroom training delivery and coaching methodologies.",
    },
    ProblemMapping {
        problem_id: "vision-unclear",
        suggested_gaps: &[23, 1],
        explanation: "Unclear vision indicates gaps in vision-centric leadership and communication of company direction.",
    },
    ProblemMapping {
        problem_id: "stress-burnout",
        suggested_gaps: &[11, 2, 17],
        explanation: "Stress and burnout indicate mind management deficits, emotional intelligence gaps, and time management issues.",
    },
    ProblemMapping {
        problem_id: "hiring-mistakes",
        suggested_gaps: &[18],
        explanation: "Poor hiring decisions directly indicate gaps in interviewing and candidate assessment skills.",
    },
    ProblemMapping {
        problem_id: "email-chaos",
        suggested_gaps: &[21],
        explanation: "Email chaos indicates a clear gap in email management and communication efficiency.",
    },
];

static GAP_INDEX: Lazy<HashMap<u32, &'static GapDefinition>> =
    Lazy::new(|| GAPS.iter().map(|gap| (gap.id, gap)).collect());

/// Look up one gap definition by id
pub fn gap(id: u32) -> Option<&'static GapDefinition> {
    GAP_INDEX.get(&id).copied()
}

/// Look up one problem statement by id
pub fn problem(id: &str) -> Option<&'static ProblemStatement> {
    PROBLEMS.iter().find(|p| p.id == id)
}

/// Titles for a set of gap ids, preserving input order and silently
/// skipping unknown ids
pub fn gap_titles(ids: &[u32]) -> Vec<&'static str> {
    ids.iter()
        .filter_map(|id| gap(*id).map(|g| g.title))
        .collect()
}

/// Mapping entries for the selected problems, in catalog order
pub fn mappings_for(selected_problem_ids: &[&str]) -> Vec<&'static ProblemMapping> {
    MAPPINGS
        .iter()
        .filter(|mapping| selected_problem_ids.contains(&mapping.problem_id))
        .collect()
}

/// Union of suggested gap ids across the confirmed problems, deduplicated
/// with first-seen order preserved. A gap suggested by several overlapping
/// mappings appears once.
pub fn suggested_scope(confirmed_problem_ids: &[&str]) -> Vec<u32> {
    let mut seen = HashSet::new();
    mappings_for(confirmed_problem_ids)
        .iter()
        .flat_map(|mapping| mapping.suggested_gaps.iter().copied())
        .filter(|id| seen.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_ids_are_unique_and_stable() {
        let mut ids: Vec<u32> = GAPS.iter().map(|g| g.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), GAPS.len());
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&23));
    }

    #[test]
    fn every_mapping_references_known_gaps_and_problems() {
        for mapping in &MAPPINGS {
            assert!(problem(mapping.problem_id).is_some(), "{}", mapping.problem_id);
            for id in mapping.suggested_gaps {
                assert!(gap(*id).is_some(), "gap {id} in {}", mapping.problem_id);
            }
        }
    }

    #[test]
    fn gap_titles_preserves_order_and_skips_unknown() {
        let titles = gap_titles(&[15, 999, 1]);
        assert_eq!(titles, vec!["Meetings", "Communication Gap"]);
    }

    #[test]
    fn mappings_for_returns_catalog_order() {
        let mappings = mappings_for(&["meeting-waste", "communication-issues"]);
        let ids: Vec<&str> = mappings.iter().map(|m| m.problem_id).collect();
        assert_eq!(ids, vec!["communication-issues", "meeting-waste"]);
    }

    #[test]
    fn suggested_scope_deduplicates_overlapping_mappings() {
        // low-productivity suggests [3, 17, 9]; stress-burnout [11, 2, 17];
        // 17 overlaps and must appear once, at its first position.
        let scope = suggested_scope(&["low-productivity", "stress-burnout"]);
        assert_eq!(scope, vec![3, 17, 9, 11, 2]);
    }

    #[test]
    fn suggested_scope_empty_for_unknown_problems() {
        assert!(suggested_scope(&["not-a-problem"]).is_empty());
    }
}
