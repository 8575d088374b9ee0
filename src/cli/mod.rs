//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting code. Every option can also come from the environment (or a
//! `.env` file, loaded before parsing).

use std::path::PathBuf;

use clap::Parser;
use clap::builder::TypedValueParser;

use crate::domain::RunConfig;

/// Least-squares and piecewise linear fits for per-core CPU temperatures.
#[derive(Debug, Parser, Clone)]
#[command(name = "core-temps", version)]
pub struct Cli {
    /// Temperature log: one line per sample, one reading per core.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Spacing between successive samples on the x axis.
    #[arg(long, env = "CORE_TEMPS_STEP", default_value_t = RunConfig::DEFAULT_STEP)]
    pub step: f64,

    /// Readings (cores) expected on every line.
    #[arg(long, env = "CORE_TEMPS_CHANNELS", default_value_t = RunConfig::DEFAULT_CHANNELS)]
    pub channels: usize,

    /// Basis terms in the least-squares fit (1 = constant, 2 = line, 3 = quadratic).
    #[arg(
        long,
        env = "CORE_TEMPS_TERMS",
        default_value_t = RunConfig::DEFAULT_TERMS,
        value_parser = clap::value_parser!(u8).range(1..=3).map(usize::from)
    )]
    pub terms: usize,

    /// Directory for the per-core files (default: next to the input).
    #[arg(long, env = "CORE_TEMPS_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also write a JSON summary of every fit.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            input: cli.input,
            step: cli.step,
            channels: cli.channels,
            terms: cli.terms,
            output_dir: cli.output_dir,
            export_json: cli.export_json,
        }
    }
}
