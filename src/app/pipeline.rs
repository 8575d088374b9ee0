//! The fit pipeline shared by the binary and the integration tests.
//!
//! ingest -> shared design matrices -> per-core fits -> per-core files ->
//! optional JSON summary
//!
//! Cores are independent value pipelines: each gets its own response vector,
//! augmented matrix and segments, and only reads the shared [`Design`].

use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::prelude::*;

use crate::domain::{RunConfig, Sample, channel_readings};
use crate::error::AppError;
use crate::fit::{ChannelFit, Design, fit_channel};
use crate::io::{RunSummary, load_samples, output_path, write_channel_file, write_summary_json};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub sample_count: usize,
    pub fits: Vec<ChannelFit>,
    /// Per-core file paths, in core order.
    pub outputs: Vec<PathBuf>,
}

/// Execute the full pipeline for `config`, writing every output file.
pub fn run(config: &RunConfig) -> Result<RunOutput, AppError> {
    let samples = load_samples(&config.input, config.channels)?;
    info!(
        "read {} samples ({} cores) from {}",
        samples.len(),
        config.channels,
        config.input.display()
    );

    let fits = fit_samples(&samples, config)?;
    let outputs = write_outputs(&config.input, config.output_dir.as_deref(), &fits)?;

    if let Some(path) = &config.export_json {
        let summary = RunSummary::new(&config.input, config.step, samples.len(), &fits, &outputs);
        write_summary_json(path, &summary)?;
        info!("wrote summary {}", path.display());
    }

    Ok(RunOutput {
        sample_count: samples.len(),
        fits,
        outputs,
    })
}

/// Fit every core of `samples`.
///
/// Results come back in core order regardless of scheduling.
pub fn fit_samples(samples: &[Sample], config: &RunConfig) -> Result<Vec<ChannelFit>, AppError> {
    if samples.len() < config.terms {
        return Err(AppError::new(
            3,
            format!(
                "A {}-term fit needs at least {} samples, found {}.",
                config.terms,
                config.terms,
                samples.len()
            ),
        ));
    }

    if let Some(bad) = samples.iter().find(|s| s.readings.len() != config.channels) {
        return Err(AppError::new(
            3,
            format!(
                "Sample {} has {} readings, expected {}.",
                bad.index,
                bad.readings.len(),
                config.channels
            ),
        ));
    }

    let design = Design::new(samples.len(), config.terms, config.step);

    (0..config.channels)
        .into_par_iter()
        .map(|idx| -> Result<ChannelFit, AppError> {
            let channel = idx + 1;
            let readings = channel_readings(samples, idx);
            let fit = fit_channel(&design, channel, &readings)
                .map_err(|e| AppError::channel(channel, e))?;
            debug!("core {channel}: coefficients {:?}", fit.coefficients.as_slice());
            Ok(fit)
        })
        .collect()
}

fn write_outputs(
    input: &Path,
    output_dir: Option<&Path>,
    fits: &[ChannelFit],
) -> Result<Vec<PathBuf>, AppError> {
    let mut outputs = Vec::with_capacity(fits.len());
    for fit in fits {
        let path = output_path(input, fit.channel, output_dir);
        write_channel_file(&path, fit)?;
        info!("core {}: wrote {}", fit.channel, path.display());
        outputs.push(path);
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(rows: &[[f64; 2]]) -> Vec<Sample> {
        rows.iter()
            .enumerate()
            .map(|(index, r)| Sample {
                index,
                readings: r.to_vec(),
            })
            .collect()
    }

    #[test]
    fn fits_come_back_in_core_order() {
        let mut config = RunConfig::new("temps.txt");
        config.channels = 2;
        let data = samples(&[[10.0, 70.0], [40.0, 40.0], [70.0, 10.0]]);

        let fits = fit_samples(&data, &config).unwrap();
        assert_eq!(fits.len(), 2);
        assert_eq!(fits[0].channel, 1);
        assert_eq!(fits[1].channel, 2);
        assert!((fits[0].coefficients.slope() - 1.0).abs() < 1e-9);
        assert!((fits[1].coefficients.slope() + 1.0).abs() < 1e-9);
        assert!((fits[1].coefficients.intercept() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn too_few_samples_is_a_data_error() {
        let mut config = RunConfig::new("temps.txt");
        config.channels = 2;
        let err = fit_samples(&samples(&[[1.0, 2.0]]), &config).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn zero_step_names_the_failing_core() {
        let mut config = RunConfig::new("temps.txt");
        config.channels = 2;
        config.step = 0.0;
        config.terms = 1;
        let err = fit_samples(&samples(&[[1.0, 2.0], [3.0, 4.0]]), &config).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().starts_with("Core "), "{err}");
    }
}
