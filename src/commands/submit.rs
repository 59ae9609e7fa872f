use crate::config;
use crate::errors::LossmapError;
use crate::formatting::format_inr;
use crate::lead::{submit_lead, SubmitAck};
use crate::session::file as assessment_file;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

pub fn run(assessment: PathBuf) -> Result<()> {
    let file = assessment_file::load(&assessment)?;
    let lead = file.lead.clone().ok_or_else(|| {
        LossmapError::config(format!(
            "no [lead] section in {}; add one with name, email, and phone",
            assessment.display()
        ))
    })?;

    let report = file.assessment().report();
    let total_annual = report.total_annual();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let ack = runtime.block_on(submit_lead(&config::config().endpoint, &lead, total_annual))?;

    match ack {
        SubmitAck::Remote { id } => {
            println!("{}", "Your assessment has been submitted.".green().bold());
            if let Some(id) = id {
                println!("Reference: {id}");
            }
            println!(
                "Potential annual savings: {}",
                format_inr(report.potential_savings()).green().bold()
            );
            println!("Expect a response within 24 hours to schedule your ROI discovery call.");
        }
        SubmitAck::Offline => {
            println!(
                "{}",
                "No lead endpoint configured — nothing was stored remotely.".yellow()
            );
            println!("Set [endpoint] in lossmap.toml (or LOSSMAP_ENDPOINT_URL / LOSSMAP_ENDPOINT_KEY) to enable submissions.");
        }
    }
    Ok(())
}
