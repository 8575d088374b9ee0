//! JSON summary of a run.
//!
//! The summary is the machine-readable companion to the per-core text files:
//! coefficients, rendered formula and segments for every core, plus the run
//! settings that produced them.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::AppError;
use crate::fit::{ChannelFit, Segment};

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: String,
    pub input: PathBuf,
    pub step: f64,
    pub sample_count: usize,
    pub channels: Vec<ChannelSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelSummary {
    pub channel: usize,
    pub output: PathBuf,
    pub coefficients: Vec<f64>,
    pub formula: String,
    pub segments: Vec<Segment>,
}

impl RunSummary {
    pub fn new(
        input: &Path,
        step: f64,
        sample_count: usize,
        fits: &[ChannelFit],
        outputs: &[PathBuf],
    ) -> Self {
        let channels = fits
            .iter()
            .zip(outputs)
            .map(|(fit, output)| ChannelSummary {
                channel: fit.channel,
                output: output.clone(),
                coefficients: fit.coefficients.as_slice().to_vec(),
                formula: fit.formula().trim().to_string(),
                segments: fit.segments.clone(),
            })
            .collect();

        Self {
            tool: "core-temps".to_string(),
            input: input.to_path_buf(),
            step,
            sample_count,
            channels,
        }
    }
}

/// Write a summary JSON file.
pub fn write_summary_json(path: &Path, summary: &RunSummary) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| {
            AppError::new(
                2,
                format!("Failed to create summary JSON '{}': {e}", path.display()),
            )
        })?;

    serde_json::to_writer_pretty(file, summary)
        .map_err(|e| AppError::new(2, format!("Failed to write summary JSON: {e}")))?;

    Ok(())
}
