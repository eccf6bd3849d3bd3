//! Binary entrypoint for the `canonical` CLI.

use std::process::ExitCode;

use canonical::cli::Cli;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.target(env_logger::Target::Stderr).init();

    // Recording is handled in commands::resolve via CANONICAL_RECORD=<file>.
    match canonical::commands::dispatch(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
