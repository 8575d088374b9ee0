//! Piecewise linear interpolation between consecutive samples.
//!
//! For samples `y_0, y_1, ...` at `x_i = i * step`, segment `i` is the line
//! through `(x_i, y_i)` and `(x_{i+1}, y_{i+1})`, valid on `[x_i, x_{i+1})`.

use serde::Serialize;

use crate::domain::Line;
use crate::error::FitError;

/// One interpolation interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    /// Index of the left-hand sample.
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub line: Line,
}

impl Segment {
    /// The segment through `(x0, y0)` and `(x1, y1)`.
    pub fn through(index: usize, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self, FitError> {
        if x1 == x0 {
            return Err(FitError::DegenerateInterval { x: x0 });
        }

        let slope = (y1 - y0) / (x1 - x0);
        Ok(Self {
            index,
            start: x0,
            end: x1,
            line: Line {
                intercept: y0 - slope * x0,
                slope,
            },
        })
    }
}

/// Lazy sequence of segments over one channel's readings.
///
/// Each pair is checked as it is produced, so an interval that collapses
/// (e.g. both ends overflow to infinity) surfaces as `DegenerateInterval`.
/// Cloning yields an independent iterator from the same position, so a fresh
/// `build_segments` result (or a clone of it) can be walked any number of
/// times.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    readings: &'a [f64],
    step: f64,
    next: usize,
}

impl Iterator for Segments<'_> {
    type Item = Result<Segment, FitError>;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.next;
        let (&y0, &y1) = (self.readings.get(i)?, self.readings.get(i + 1)?);
        self.next += 1;

        let x0 = i as f64 * self.step;
        let x1 = (i + 1) as f64 * self.step;
        Some(Segment::through(i, x0, y0, x1, y1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.readings.len().saturating_sub(self.next + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}

/// Segments between every consecutive pair of `readings`.
///
/// A zero `step` is rejected up front when there is at least one pair to
/// interpolate; any other collapsed interval is reported by the pair itself.
pub fn build_segments(readings: &[f64], step: f64) -> Result<Segments<'_>, FitError> {
    if readings.len() >= 2 && step == 0.0 {
        return Err(FitError::DegenerateInterval { x: 0.0 });
    }
    Ok(Segments {
        readings,
        step,
        next: 0,
    })
}
