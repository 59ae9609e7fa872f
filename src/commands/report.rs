use crate::config;
use crate::output::{create_writer, OutputFormat, ReportContext};
use crate::session::file as assessment_file;
use anyhow::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

pub struct ReportOptions {
    pub assessment: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub company: Option<String>,
}

pub fn run(options: ReportOptions) -> Result<()> {
    let file = assessment_file::load(&options.assessment)?;
    let report = file.assessment().report();

    let context = ReportContext {
        company: options
            .company
            .or_else(|| file.company.clone())
            .or_else(|| config::config().report.company.clone()),
        generated: Some(chrono::Local::now().date_naive()),
    };

    let sink: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    create_writer(options.format, sink).write_report(&report, &context)
}
