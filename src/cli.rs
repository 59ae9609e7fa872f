use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored summary for the terminal
    Terminal,
    /// Machine-readable report view
    Json,
    /// Markdown report
    Markdown,
    /// Standalone print-formatted document
    Html,
}

impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => crate::output::OutputFormat::Terminal,
            OutputFormat::Json => crate::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::output::OutputFormat::Markdown,
            OutputFormat::Html => crate::output::OutputFormat::Html,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lossmap")]
#[command(about = "Leadership gap loss analyzer and report generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./lossmap.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colors and other terminal decoration
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose the loss report from an assessment file
    Report {
        /// Assessment file (TOML or JSON)
        assessment: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Company name shown on the report
        #[arg(long)]
        company: Option<String>,
    },

    /// Export the paginated report document as draw commands
    Export {
        /// Assessment file (TOML or JSON)
        assessment: PathBuf,

        /// Directory for the date-stamped artifact
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Company name shown on the report
        #[arg(long)]
        company: Option<String>,
    },

    /// Render the print-formatted standalone HTML document
    Print {
        /// Assessment file (TOML or JSON)
        assessment: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Company name shown on the report
        #[arg(long)]
        company: Option<String>,
    },

    /// Map selected problem statements to suggested leadership gaps
    Suggest {
        /// Problem ids, comma-separated (see `lossmap catalog --problems`)
        #[arg(value_delimiter = ',', required = true)]
        problems: Vec<String>,
    },

    /// List the gap catalog, grouped by category
    Catalog {
        /// List the problem statements instead
        #[arg(long)]
        problems: bool,
    },

    /// Validate and submit the lead from an assessment file
    Submit {
        /// Assessment file with a [lead] section
        assessment: PathBuf,
    },

    /// Run the guided questionnaire in the terminal
    Wizard {
        /// Where to save the resulting assessment file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write starter configuration and assessment files
    Init {
        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}
