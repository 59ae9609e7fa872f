use crate::catalog;
use anyhow::Result;
use colored::*;

/// Show, for each selected problem, its mapping entry and the deduplicated
/// assessment scope the confirmed suggestions would produce.
pub fn run(problems: Vec<String>) -> Result<()> {
    let known: Vec<&str> = problems
        .iter()
        .map(String::as_str)
        .filter(|id| {
            let found = catalog::problem(id).is_some();
            if !found {
                log::warn!("unknown problem id: {id}");
            }
            found
        })
        .collect();

    if known.is_empty() {
        anyhow::bail!("no known problem ids given; run `lossmap catalog --problems` for the list");
    }

    for mapping in catalog::mappings_for(&known) {
        let statement = catalog::problem(mapping.problem_id)
            .map(|p| p.text)
            .unwrap_or(mapping.problem_id);
        println!("{}", statement.bold());
        println!("  {}", mapping.explanation);
        println!(
            "  Suggested gaps: {}",
            catalog::gap_titles(mapping.suggested_gaps).join(", ").cyan()
        );
        println!();
    }

    let scope = catalog::suggested_scope(&known);
    println!(
        "Assessment scope: {} unique gap(s): {}",
        scope.len(),
        catalog::gap_titles(&scope).join(", ")
    );
    Ok(())
}
