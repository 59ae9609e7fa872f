//! The guided questionnaire, driven by the wizard state machine:
//! problems → analysis → assessment → additional → results.
//!
//! Input and output are generic so the flow is testable with buffered
//! readers; the CLI wires stdin/stdout.

use crate::catalog;
use crate::output::{ReportContext, ReportWriter, TerminalWriter};
use crate::session::file::AssessmentFile;
use crate::session::steps::{transition, Step, StepAction};
use crate::session::Assessment;
use anyhow::Result;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub fn run(output: Option<PathBuf>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_wizard(stdin.lock(), stdout.lock(), output.as_deref())
}

pub fn run_wizard<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    save: Option<&Path>,
) -> Result<()> {
    let mut step = Step::Problems;
    let mut assessment = Assessment::new();
    let mut selected: Vec<&'static str> = Vec::new();
    let mut scope: Vec<u32> = Vec::new();

    loop {
        writeln!(out)?;
        writeln!(out, "── Step {} of {}: {}", step.position(), Step::ALL.len(), step.title())?;
        match step {
            Step::Problems => {
                for (index, problem) in catalog::PROBLEMS.iter().enumerate() {
                    writeln!(out, "  {:>2}. {}", index + 1, problem.text)?;
                }
                let answer = prompt(
                    &mut input,
                    &mut out,
                    "Select the challenges you face (numbers, comma-separated): ",
                )?;
                selected = parse_selection(&answer)
                    .into_iter()
                    .filter_map(|n| catalog::PROBLEMS.get(n - 1).map(|p| p.id))
                    .collect();
                step = transition(step, StepAction::Next);
            }
            Step::Analysis => {
                let mappings = catalog::mappings_for(&selected);
                if mappings.is_empty() {
                    writeln!(out, "No challenges selected; you can pick gaps directly later.")?;
                    step = transition(step, StepAction::Next);
                    continue;
                }
                for mapping in &mappings {
                    let text = catalog::problem(mapping.problem_id)
                        .map(|p| p.text)
                        .unwrap_or(mapping.problem_id);
                    writeln!(out, "• {text}")?;
                    writeln!(out, "  {}", mapping.explanation)?;
                    writeln!(
                        out,
                        "  Suggested gaps: {}",
                        catalog::gap_titles(mapping.suggested_gaps).join(", ")
                    )?;
                }
                let answer = prompt(&mut input, &mut out, "Confirm these suggestions? [Enter = yes, b = back] ")?;
                if answer.trim().eq_ignore_ascii_case("b") {
                    step = transition(step, StepAction::Back);
                } else {
                    scope = catalog::suggested_scope(&selected);
                    assessment.activate_scope(&scope);
                    step = transition(step, StepAction::Next);
                }
            }
            Step::Assessment => {
                for id in scope.clone() {
                    ask_gap_inputs(&mut input, &mut out, &mut assessment, id)?;
                }
                step = transition(step, StepAction::Next);
            }
            Step::Additional => {
                let groups = assessment.additional_gaps(&scope);
                for (category, gaps) in &groups {
                    writeln!(out, "{category}:")?;
                    for gap in gaps {
                        writeln!(out, "  {:>2}. {} — {}", gap.id, gap.title, gap.description)?;
                    }
                }
                let answer = prompt(
                    &mut input,
                    &mut out,
                    "Assess more gaps by id (comma-separated, Enter to skip): ",
                )?;
                for id in parse_selection(&answer) {
                    let id = id as u32;
                    if assessment.set_active(id, true).is_ok() {
                        scope.push(id);
                        ask_gap_inputs(&mut input, &mut out, &mut assessment, id)?;
                    } else {
                        writeln!(out, "  (skipping unknown gap id {id})")?;
                    }
                }
                step = transition(step, StepAction::Next);
            }
            Step::Results => {
                let report = assessment.report();
                TerminalWriter::new(&mut out).write_report(
                    &report,
                    &ReportContext {
                        company: None,
                        generated: Some(chrono::Local::now().date_naive()),
                    },
                )?;
                if let Some(path) = save {
                    save_assessment(&assessment, path)?;
                    writeln!(out, "Assessment saved to {}", path.display())?;
                }
                return Ok(());
            }
        }
    }
}

fn ask_gap_inputs<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    assessment: &mut Assessment,
    id: u32,
) -> Result<()> {
    let Some(gap) = catalog::gap(id) else {
        return Ok(());
    };
    writeln!(out)?;
    writeln!(out, "{} — {}", gap.title, gap.description)?;
    let quantity = prompt_number(input, out, gap.quantity_label)?;
    let unit_cost = prompt_number(input, out, gap.cost_label)?;
    assessment.set_inputs(id, quantity, unit_cost)?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<String> {
    write!(out, "{message}")?;
    out.flush()?;
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        // EOF: treat as an empty answer so the flow completes
        return Ok(String::new());
    }
    Ok(line.trim().to_string())
}

fn prompt_number<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<f64> {
    let answer = prompt(input, out, &format!("  {label}: "))?;
    if answer.is_empty() {
        return Ok(0.0);
    }
    match answer.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => {
            writeln!(out, "  (not a number, using 0)")?;
            Ok(0.0)
        }
    }
}

/// Parse "1, 3,5" into indices; anything unparsable is dropped
fn parse_selection(answer: &str) -> Vec<usize> {
    answer
        .split(',')
        .filter_map(|part| part.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .collect()
}

fn save_assessment(assessment: &Assessment, path: &Path) -> Result<()> {
    let file = AssessmentFile {
        company: None,
        gaps: assessment.records().to_vec(),
        lead: None,
    };
    let content = toml::to_string_pretty(&file)?;
    fs::write(path, content)?;
    Ok(())
}
