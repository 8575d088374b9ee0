//! Fit one channel: least-squares line plus piecewise interpolation.

use nalgebra::DMatrix;

use crate::domain::Coefficients;
use crate::error::FitError;
use crate::fit::piecewise::{Segment, build_segments};
use crate::math::{create_design_matrix, create_transpose, solve_least_squares};

/// Design matrix and transpose for one sample layout.
///
/// Every channel of a run shares the same x-values, so this is built once and
/// only read afterwards.
#[derive(Debug, Clone)]
pub struct Design {
    pub x: DMatrix<f64>,
    pub xt: DMatrix<f64>,
    pub step: f64,
}

impl Design {
    pub fn new(sample_count: usize, term_count: usize, step: f64) -> Self {
        Self {
            x: create_design_matrix(sample_count, term_count, step),
            xt: create_transpose(sample_count, term_count, step),
            step,
        }
    }
}

/// Everything computed for a single channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelFit {
    /// 1-based channel number.
    pub channel: usize,
    pub sample_count: usize,
    pub step: f64,
    pub coefficients: Coefficients,
    pub segments: Vec<Segment>,
}

impl ChannelFit {
    /// Right edge of the least-squares interval, `(n - 1) * step`.
    pub fn span_end(&self) -> f64 {
        self.sample_count.saturating_sub(1) as f64 * self.step
    }

    pub fn formula(&self) -> String {
        self.coefficients.formula()
    }
}

/// Solve the normal equations for `readings` and build its segments.
pub fn fit_channel(
    design: &Design,
    channel: usize,
    readings: &[f64],
) -> Result<ChannelFit, FitError> {
    let y = DMatrix::from_column_slice(readings.len(), 1, readings);
    let coefficients = solve_least_squares(&design.x, &design.xt, &y)?;
    let segments = build_segments(readings, design.step)?.collect::<Result<Vec<_>, _>>()?;

    Ok(ChannelFit {
        channel,
        sample_count: readings.len(),
        step: design.step,
        coefficients,
        segments,
    })
}
