use crate::config;
use crate::errors::LossmapError;
use crate::export::{compose_document, report_filename};
use crate::session::file as assessment_file;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub struct ExportOptions {
    pub assessment: PathBuf,
    pub output_dir: PathBuf,
    pub company: Option<String>,
}

pub fn run(options: ExportOptions) -> Result<()> {
    let file = assessment_file::load(&options.assessment)?;
    let report = file.assessment().report();

    let company = options
        .company
        .or_else(|| file.company.clone())
        .or_else(|| config::config().report.company.clone());
    let today = chrono::Local::now().date_naive();

    let document = compose_document(
        &report,
        company.as_deref(),
        today,
        config::config().report.top_gaps,
    );

    let path = options.output_dir.join(report_filename(today));
    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| LossmapError::Export(e.to_string()))?;
    fs::write(&path, json).map_err(|e| LossmapError::Export(e.to_string()))?;

    log::info!("exported {} pages", document.pages.len());
    println!("Report exported to {}", path.display());
    Ok(())
}
