use crate::config;
use crate::output::{render_print_document, ReportContext};
use crate::session::file as assessment_file;
use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub struct PrintOptions {
    pub assessment: PathBuf,
    pub output: Option<PathBuf>,
    pub company: Option<String>,
}

pub fn run(options: PrintOptions) -> Result<()> {
    let file = assessment_file::load(&options.assessment)?;
    let report = file.assessment().report();

    let context = ReportContext {
        company: options
            .company
            .or_else(|| file.company.clone())
            .or_else(|| config::config().report.company.clone()),
        generated: Some(chrono::Local::now().date_naive()),
    };

    let document = render_print_document(&report, &context)?;

    match &options.output {
        Some(path) => {
            fs::write(path, document)?;
            println!("Print document written to {}", path.display());
        }
        None => io::stdout().write_all(document.as_bytes())?,
    }
    Ok(())
}
