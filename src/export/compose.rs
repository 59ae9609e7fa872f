//! Composition of the exportable assessment report.
//!
//! Mirrors the print layout: header band, executive summary, critical-impact
//! box, top-ranked shortlist, full tabular breakdown with per-row priority
//! tier, contribution pie, strategic recommendations, and the ROI
//! projection. Composition is total: an empty report produces a document
//! with placeholder text rather than failing.

use crate::export::{Document, PageBuilder, TextAlign, PAGE_MARGIN, PAGE_WIDTH};
use crate::formatting::{format_inr, format_percent};
use crate::report::charts::pie_wedges;
use crate::report::{LossReport, PriorityTier, ScoredGap};
use chrono::NaiveDate;

const BLUE_900: &str = "#1E3A8A";
const RED_50: &str = "#FEF2F2";
const RED_200: &str = "#FECACA";
const RED_600: &str = "#DC2626";
const RED_700: &str = "#B91C1C";
const GRAY_50: &str = "#F9FAFB";
const GRAY_100: &str = "#F3F4F6";
const GRAY_500: &str = "#6B7280";
const GREEN_50: &str = "#F0FDF4";
const GREEN_200: &str = "#BBF7D0";
const GREEN_700: &str = "#15803D";
const BLACK: &str = "#000000";
const WHITE: &str = "#FFFFFF";

/// Filename for the saved artifact, stamped with the report date
pub fn report_filename(today: NaiveDate) -> String {
    format!("Leadership-Assessment-Report-{}.json", today.format("%Y-%m-%d"))
}

/// Compose the full paginated document
pub fn compose_document(
    report: &LossReport,
    company: Option<&str>,
    today: NaiveDate,
    top_gaps: usize,
) -> Document {
    let mut builder = PageBuilder::new();
    let ranked = report.ranked_with_tiers();

    write_header_band(&mut builder);
    write_executive_summary(&mut builder, report, company, today);
    write_impact_box(&mut builder, report);
    write_top_gaps(&mut builder, &ranked, top_gaps);

    builder.new_page();
    write_breakdown_table(&mut builder, &ranked);
    write_contribution_pie(&mut builder, report);
    write_recommendations(&mut builder, &ranked, top_gaps);
    write_roi_projection(&mut builder, report);
    write_footer(&mut builder);

    builder.finish()
}

fn write_header_band(builder: &mut PageBuilder) {
    builder.rect(0.0, 0.0, PAGE_WIDTH, 40.0, BLUE_900, None);
    builder.text_at(
        PAGE_WIDTH / 2.0,
        20.0,
        24.0,
        true,
        WHITE,
        TextAlign::Center,
        "Leadership Loss Assessment Report",
    );
    builder.text_at(
        PAGE_WIDTH / 2.0,
        30.0,
        12.0,
        false,
        WHITE,
        TextAlign::Center,
        "Comprehensive Analysis of Leadership Gaps & Financial Impact",
    );
    builder.set_cursor(60.0);
}

fn write_executive_summary(
    builder: &mut PageBuilder,
    report: &LossReport,
    company: Option<&str>,
    today: NaiveDate,
) {
    builder.line(PAGE_MARGIN, 14.0, true, BLACK, "Executive Summary", 10.0);
    if let Some(company) = company {
        builder.line(PAGE_MARGIN, 10.0, false, BLACK, format!("Company: {company}"), 6.0);
    }
    builder.line(
        PAGE_MARGIN,
        10.0,
        false,
        BLACK,
        format!("Report Generated: {}", today.format("%-d %B %Y")),
        6.0,
    );
    builder.line(
        PAGE_MARGIN,
        10.0,
        false,
        BLACK,
        format!(
            "Assessment Areas Evaluated: {} out of {}",
            report.active_count(),
            report.catalog_size()
        ),
        6.0,
    );
    builder.line(
        PAGE_MARGIN,
        10.0,
        false,
        BLACK,
        format!("Critical Areas Identified: {}", report.scored().len()),
        15.0,
    );
}

fn write_impact_box(builder: &mut PageBuilder, report: &LossReport) {
    builder.ensure_space(40.0);
    let top = builder.cursor();
    builder.rect(
        PAGE_MARGIN,
        top,
        PAGE_WIDTH - 2.0 * PAGE_MARGIN,
        35.0,
        RED_50,
        Some(RED_200),
    );
    builder.text_at(
        PAGE_MARGIN + 5.0,
        top + 10.0,
        12.0,
        true,
        RED_700,
        TextAlign::Left,
        "CRITICAL FINANCIAL IMPACT",
    );
    builder.text_at(
        PAGE_MARGIN + 5.0,
        top + 20.0,
        16.0,
        true,
        RED_600,
        TextAlign::Left,
        format!("Monthly Loss: {}", format_inr(report.total_monthly())),
    );
    builder.text_at(
        PAGE_MARGIN + 5.0,
        top + 30.0,
        16.0,
        true,
        RED_600,
        TextAlign::Left,
        format!("Annual Loss: {}", format_inr(report.total_annual())),
    );
    builder.advance(50.0);
}

fn write_top_gaps(builder: &mut PageBuilder, ranked: &[(&ScoredGap, PriorityTier)], top_gaps: usize) {
    builder.ensure_space(60.0);
    builder.line(
        PAGE_MARGIN,
        14.0,
        true,
        BLACK,
        format!("Top {top_gaps} Critical Leadership Gaps"),
        10.0,
    );

    if ranked.is_empty() {
        builder.line(
            PAGE_MARGIN + 5.0,
            10.0,
            false,
            GRAY_500,
            "No active leadership gaps were reported.",
            10.0,
        );
        return;
    }

    for (index, (gap, _)) in ranked.iter().take(top_gaps).enumerate() {
        builder.ensure_space(15.0);
        let y = builder.cursor();
        builder.text_at(
            PAGE_MARGIN + 5.0,
            y,
            10.0,
            true,
            BLACK,
            TextAlign::Left,
            format!("{}. {}", index + 1, gap.definition.title),
        );
        builder.text_at(
            PAGE_WIDTH - PAGE_MARGIN,
            y,
            10.0,
            false,
            BLACK,
            TextAlign::Right,
            format!("Annual Impact: {}", format_inr(gap.loss.annual)),
        );
        builder.advance(5.0);
        builder.line(
            PAGE_MARGIN + 10.0,
            9.0,
            false,
            BLACK,
            gap.definition.description,
            9.0,
        );
    }
}

fn write_breakdown_table(builder: &mut PageBuilder, ranked: &[(&ScoredGap, PriorityTier)]) {
    builder.line(PAGE_MARGIN, 14.0, true, BLACK, "Detailed Financial Breakdown", 15.0);

    if ranked.is_empty() {
        builder.line(
            PAGE_MARGIN,
            10.0,
            false,
            GRAY_500,
            "Nothing to break down — no gap produced a positive loss.",
            10.0,
        );
        return;
    }

    let header_top = builder.cursor();
    builder.rect(
        PAGE_MARGIN,
        header_top,
        PAGE_WIDTH - 2.0 * PAGE_MARGIN,
        8.0,
        GRAY_100,
        None,
    );
    for (offset, label) in [
        (2.0, "Leadership Area"),
        (80.0, "Monthly Loss"),
        (120.0, "Annual Loss"),
        (160.0, "Priority"),
    ] {
        builder.text_at(
            PAGE_MARGIN + offset,
            header_top + 5.0,
            9.0,
            true,
            BLACK,
            TextAlign::Left,
            label,
        );
    }
    builder.advance(10.0);

    for (index, (gap, tier)) in ranked.iter().enumerate() {
        builder.ensure_space(8.0);
        let y = builder.cursor();
        if index % 2 == 0 {
            builder.rect(
                PAGE_MARGIN,
                y - 2.0,
                PAGE_WIDTH - 2.0 * PAGE_MARGIN,
                6.0,
                GRAY_50,
                None,
            );
        }
        builder.text_at(
            PAGE_MARGIN + 2.0,
            y + 2.0,
            8.0,
            false,
            BLACK,
            TextAlign::Left,
            truncate_title(gap.definition.title),
        );
        builder.text_at(
            PAGE_MARGIN + 80.0,
            y + 2.0,
            8.0,
            false,
            BLACK,
            TextAlign::Left,
            format_inr(gap.loss.monthly),
        );
        builder.text_at(
            PAGE_MARGIN + 120.0,
            y + 2.0,
            8.0,
            true,
            RED_600,
            TextAlign::Left,
            format_inr(gap.loss.annual),
        );
        builder.text_at(
            PAGE_MARGIN + 160.0,
            y + 2.0,
            8.0,
            true,
            tier.color(),
            TextAlign::Left,
            tier.label(),
        );
        builder.advance(6.0);
    }
    builder.advance(10.0);
}

fn write_contribution_pie(builder: &mut PageBuilder, report: &LossReport) {
    let wedges = pie_wedges(report);
    if wedges.is_empty() {
        return;
    }

    let radius = 30.0;
    let legend_height = wedges.len() as f64 * 6.0;
    builder.ensure_space(2.0 * radius + legend_height + 20.0);

    builder.line(PAGE_MARGIN, 14.0, true, BLACK, "Contribution to Total Loss", 10.0);

    let cy = builder.cursor() + radius;
    builder.push_pie(PAGE_MARGIN + radius + 10.0, cy, radius, &wedges);
    builder.advance(2.0 * radius + 10.0);

    for wedge in &wedges {
        builder.line(
            PAGE_MARGIN + 5.0,
            9.0,
            false,
            BLACK,
            format!(
                "{} — {} ({})",
                wedge.title,
                format_inr(report.total_annual() * wedge.share),
                format_percent(wedge.share * 100.0)
            ),
            6.0,
        );
    }
    builder.advance(8.0);
}

fn write_recommendations(
    builder: &mut PageBuilder,
    ranked: &[(&ScoredGap, PriorityTier)],
    top_gaps: usize,
) {
    builder.ensure_space(80.0);
    builder.line(PAGE_MARGIN, 14.0, true, BLACK, "Strategic Recommendations", 10.0);

    let shortlist: Vec<&ScoredGap> = ranked.iter().take(top_gaps).map(|(gap, _)| *gap).collect();
    let immediate: Vec<String> = shortlist
        .iter()
        .take(2)
        .map(|gap| {
            format!(
                "Address {} - Potential savings: {}",
                gap.definition.title,
                format_inr(gap.loss.annual)
            )
        })
        .collect();
    let medium: Vec<String> = shortlist
        .iter()
        .skip(2)
        .take(2)
        .map(|gap| {
            format!(
                "Implement solutions for {} - Impact: {}",
                gap.definition.title,
                format_inr(gap.loss.annual)
            )
        })
        .collect();
    let long_term = vec![
        "Establish comprehensive leadership development program".to_string(),
        "Create measurement systems for leadership effectiveness".to_string(),
        "Build internal coaching capabilities".to_string(),
    ];

    for (title, items) in [
        ("Immediate Action Required (Next 30 Days)", immediate),
        ("Medium-term Focus (Next 90 Days)", medium),
        ("Long-term Development (Next 6 Months)", long_term),
    ] {
        if items.is_empty() {
            continue;
        }
        builder.ensure_space(25.0);
        builder.line(PAGE_MARGIN, 11.0, true, BLACK, title, 8.0);
        for item in items {
            builder.ensure_space(6.0);
            builder.line(PAGE_MARGIN + 5.0, 9.0, false, BLACK, format!("• {item}"), 5.0);
        }
        builder.advance(5.0);
    }
}

fn write_roi_projection(builder: &mut PageBuilder, report: &LossReport) {
    builder.ensure_space(40.0);
    let top = builder.cursor();
    builder.rect(
        PAGE_MARGIN,
        top,
        PAGE_WIDTH - 2.0 * PAGE_MARGIN,
        30.0,
        GREEN_50,
        Some(GREEN_200),
    );
    builder.text_at(
        PAGE_MARGIN + 5.0,
        top + 8.0,
        12.0,
        true,
        GREEN_700,
        TextAlign::Left,
        "Investment ROI Projection",
    );
    builder.text_at(
        PAGE_MARGIN + 5.0,
        top + 16.0,
        10.0,
        false,
        BLACK,
        TextAlign::Left,
        "If 50% of identified gaps are addressed within 12 months:",
    );
    builder.text_at(
        PAGE_MARGIN + 5.0,
        top + 22.0,
        10.0,
        true,
        GREEN_700,
        TextAlign::Left,
        format!(
            "Potential Annual Savings: {}",
            format_inr(report.potential_savings())
        ),
    );
    let (low, high) = report.typical_investment();
    builder.text_at(
        PAGE_MARGIN + 5.0,
        top + 28.0,
        10.0,
        false,
        BLACK,
        TextAlign::Left,
        format!(
            "Typical Investment: {} - {}",
            format_inr(low),
            format_inr(high)
        ),
    );
    builder.advance(35.0);
}

fn write_footer(builder: &mut PageBuilder) {
    builder.text_at(
        PAGE_WIDTH / 2.0,
        crate::export::PAGE_HEIGHT - 10.0,
        8.0,
        false,
        GRAY_500,
        TextAlign::Center,
        "This report is generated based on your assessment inputs. Actual results may vary.",
    );
}

/// Long titles are shortened so table columns stay aligned
fn truncate_title(title: &str) -> String {
    if title.chars().count() > 25 {
        let short: String = title.chars().take(22).collect();
        format!("{short}...")
    } else {
        title.to_string()
    }
}

impl PageBuilder {
    fn push_pie(&mut self, cx: f64, cy: f64, radius: f64, wedges: &[crate::report::charts::PieWedge]) {
        for wedge in wedges {
            self.wedge(cx, cy, radius, wedge.start_angle, wedge.sweep, wedge.color);
        }
    }
}
