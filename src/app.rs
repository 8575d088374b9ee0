//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - runs the fit pipeline
//! - prints the run summary

use clap::Parser;
use log::info;

use crate::cli::Cli;
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `core-temps` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // Usage errors print clap's help text and exit with status 2.
    let cli = Cli::parse();
    let config = RunConfig::from(cli);
    info!(
        "fitting {} cores with {} terms, step {}",
        config.channels, config.terms, config.step
    );

    let run = pipeline::run(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(run.sample_count, &run.fits, &run.outputs)
    );

    Ok(())
}
