use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("formtree=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_flag(cli.json);

    let result = match &cli.command {
        Commands::Encode(args) => commands::share::encode(args, format).map(|()| true),
        Commands::Decode(args) => commands::share::decode(args, format).map(|()| true),
        Commands::Import(args) => commands::convert::run_import(args, format).map(|()| true),
        Commands::Export(args) => commands::convert::run_export(args).map(|()| true),
        Commands::Validate(args) => commands::validate::run(args, format),
        Commands::Example => commands::starter::example(format).map(|()| true),
        Commands::Templates => commands::starter::templates(format).map(|()| true),
        Commands::Draft(args) => commands::draft::run(args, format).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
