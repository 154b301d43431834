use chiasma::cli::{Cli, Commands};
use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // CHIASMA_LOG overrides; otherwise -v/-vv raise the default level.
    let log_level = std::env::var("CHIASMA_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<chiasma::ChiasmaError>() {
            Some(chiasma::ChiasmaError::InvalidInput(_)) => 2,
            Some(chiasma::ChiasmaError::Io(_)) => 3,
            Some(chiasma::ChiasmaError::Parse(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Align(args) => chiasma::cli::commands::align::run(args),
        Commands::Random(args) => chiasma::cli::commands::random::run(args),
    }
}
