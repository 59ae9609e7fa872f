// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod formatting;
pub mod lead;
pub mod output;
pub mod report;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CalculationMode, GapDefinition, GapRecord, LossFigures, ProblemMapping, ProblemStatement,
};

pub use crate::errors::LossmapError;

pub use crate::report::{classify_tier, LossReport, PriorityTier, ScoredGap};

pub use crate::scoring::compute_loss;

pub use crate::session::{
    steps::{transition, Step, StepAction},
    Assessment,
};

pub use crate::lead::{submit_lead, validate, LeadRecord, SubmitAck};

pub use crate::export::{compose_document, report_filename, Document, DrawCommand};

pub use crate::output::{create_writer, render_print_document, OutputFormat, ReportWriter};
