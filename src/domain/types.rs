//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can
//! be used in-memory during fitting and exported to the JSON summary.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One time-indexed observation across all channels.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Position in the input; the sample sits at `x = index * step`.
    pub index: usize,
    /// One reading per channel, in channel order.
    pub readings: Vec<f64>,
}

/// Readings for one channel (0-based), in sample order.
pub fn channel_readings(samples: &[Sample], channel: usize) -> Vec<f64> {
    samples.iter().map(|s| s.readings[channel]).collect()
}

/// A straight line `y = intercept + slope * x`.
///
/// `Display` renders the fixed-width form used in output files:
/// `{intercept:>12.4} + {slope:>8.4}x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub intercept: f64,
    pub slope: f64,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `+ 0.0` folds -0.0 into 0.0 so flat fits print without a sign.
        write!(f, "{:>12.4} + {:>8.4}x", self.intercept + 0.0, self.slope + 0.0)
    }
}

/// Solved polynomial coefficients `c_0, c_1, ...`, lowest degree first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    values: Vec<f64>,
}

impl Coefficients {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Coefficient of `x^term`; terms beyond the fit read as zero.
    pub fn get(&self, term: usize) -> f64 {
        self.values.get(term).copied().unwrap_or(0.0)
    }

    pub fn intercept(&self) -> f64 {
        self.get(0)
    }

    pub fn slope(&self) -> f64 {
        self.get(1)
    }

    /// Only populated for three-term fits; never rendered.
    pub fn quadratic(&self) -> f64 {
        self.get(2)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// The linear part of the fit.
    pub fn line(&self) -> Line {
        Line {
            intercept: self.intercept(),
            slope: self.slope(),
        }
    }

    /// Rendered least-squares formula, e.g. `     10.0000 +   1.0000x`.
    pub fn formula(&self) -> String {
        self.line().to_string()
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    /// Spacing between successive sample x-values.
    pub step: f64,
    /// Readings expected on every input line.
    pub channels: usize,
    /// Basis terms in the least-squares fit (1..=3).
    pub terms: usize,
    /// Directory for per-channel files; defaults to the input's directory.
    pub output_dir: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

impl RunConfig {
    pub const DEFAULT_STEP: f64 = 30.0;
    pub const DEFAULT_CHANNELS: usize = 4;
    pub const DEFAULT_TERMS: usize = 2;

    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            step: Self::DEFAULT_STEP,
            channels: Self::DEFAULT_CHANNELS,
            terms: Self::DEFAULT_TERMS,
            output_dir: None,
            export_json: None,
        }
    }
}
