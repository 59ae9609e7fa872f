use anyhow::Result;
use clap::Parser;
use lossmap::cli::{Cli, Commands};
use lossmap::commands;
use lossmap::formatting::FormattingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity);

    let formatting = if cli.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    formatting.apply();

    let config = lossmap::config::load_config(cli.config.as_deref())?;
    lossmap::config::set_config(config);

    match cli.command {
        Commands::Report {
            assessment,
            format,
            output,
            company,
        } => commands::report::run(commands::report::ReportOptions {
            assessment,
            format: format.into(),
            output,
            company,
        }),
        Commands::Export {
            assessment,
            output_dir,
            company,
        } => commands::export::run(commands::export::ExportOptions {
            assessment,
            output_dir,
            company,
        }),
        Commands::Print {
            assessment,
            output,
            company,
        } => commands::print::run(commands::print::PrintOptions {
            assessment,
            output,
            company,
        }),
        Commands::Suggest { problems } => commands::suggest::run(problems),
        Commands::Catalog { problems } => commands::catalog::run(problems),
        Commands::Submit { assessment } => commands::submit::run(assessment),
        Commands::Wizard { output } => commands::wizard::run(output),
        Commands::Init { force } => commands::init::run(force),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
