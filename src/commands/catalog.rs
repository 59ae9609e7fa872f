use crate::catalog::{self, classify};
use anyhow::Result;
use colored::*;

/// List the gap catalog grouped by display category, or the problem
/// statements with their ids for use with `lossmap suggest`.
pub fn run(problems: bool) -> Result<()> {
    if problems {
        for problem in &catalog::PROBLEMS {
            println!("{}  [{}]", problem.id.bold(), problem.category.dimmed());
            println!("  {}", problem.text);
        }
        return Ok(());
    }

    for (category, gaps) in classify::group_by_category(catalog::GAPS.iter()) {
        println!("{}", category.bold().blue());
        for gap in gaps {
            println!(
                "  {:>2}. {} ({})",
                gap.id,
                gap.title.bold(),
                gap.mode.display_name()
            );
            println!("      {}", gap.description);
            println!("      {} / {}", gap.quantity_label.dimmed(), gap.cost_label.dimmed());
        }
        println!();
    }
    Ok(())
}
