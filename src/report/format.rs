//! Fixed-width output lines and the terminal run summary.
//!
//! We keep formatting code in one place so the math/fitting code stays clean
//! and output changes are localized. Field widths follow the per-core file
//! layout:
//!
//! ```text
//!     0 <= x <      60; y_x      =      10.0000 +   1.0000x; least-squares
//!     0 <= x <      30; y_0      =      10.0000 +   1.0000x; interpolation
//! ```

use std::path::PathBuf;

use crate::domain::Line;
use crate::fit::{ChannelFit, Segment};

/// Render an interval boundary: integral values without a fraction.
pub fn format_x(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 {
        format!("{x:.0}")
    } else {
        format!("{x}")
    }
}

fn format_line(start: f64, end: f64, label: &str, line: &Line, kind: &str) -> String {
    format!(
        "{:>5} <= x < {:>7}; y_{:<6} = {}; {}",
        format_x(start),
        format_x(end),
        label,
        line,
        kind
    )
}

/// The global least-squares line over `[0, (n - 1) * step)`.
pub fn format_least_squares_line(fit: &ChannelFit) -> String {
    format_line(0.0, fit.span_end(), "x", &fit.coefficients.line(), "least-squares")
}

pub fn format_segment_line(segment: &Segment) -> String {
    format_line(
        segment.start,
        segment.end,
        &segment.index.to_string(),
        &segment.line,
        "interpolation",
    )
}

/// Full contents of one per-core output file, newline-terminated.
pub fn render_channel(fit: &ChannelFit) -> String {
    let mut out = format_least_squares_line(fit);
    out.push('\n');
    for segment in &fit.segments {
        out.push_str(&format_segment_line(segment));
        out.push('\n');
    }
    out
}

/// Short terminal summary: one least-squares formula per core.
pub fn format_run_summary(sample_count: usize, fits: &[ChannelFit], outputs: &[PathBuf]) -> String {
    let mut out = String::new();
    out.push_str("=== core-temps - least-squares fit ===\n");
    out.push_str(&format!("Samples: {sample_count}\n"));

    for (fit, path) in fits.iter().zip(outputs) {
        out.push_str(&format!(
            "Core {}: y = {} -> {}\n",
            fit.channel,
            fit.formula().trim(),
            path.display()
        ));
    }
    out
}
