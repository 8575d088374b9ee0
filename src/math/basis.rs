//! Polynomial basis matrices for the normal equations.
//!
//! For samples at `x_i = i * step` and `k` basis terms the design matrix is
//!
//! ```text
//! X[i][j] = x_i^j        (X[i][0] = 1, X[i][1] = i * step)
//! ```
//!
//! `X` and `Xᵗ` are built by separate routines. The solver only ever sees
//! them as two independent inputs, so both builders must agree on every
//! entry.

use nalgebra::DMatrix;

/// Evaluate basis term `term` at the x-value of sample `index`.
fn basis_value(index: usize, term: usize, step: f64) -> f64 {
    let x = index as f64 * step;
    match term {
        0 => 1.0,
        1 => x,
        _ => x.powi(term as i32),
    }
}

/// Build the `sample_count × term_count` design matrix `X`.
///
/// `sample_count = 0` yields an empty matrix.
pub fn create_design_matrix(sample_count: usize, term_count: usize, step: f64) -> DMatrix<f64> {
    let mut x = DMatrix::zeros(sample_count, term_count);
    for i in 0..sample_count {
        for j in 0..term_count {
            x[(i, j)] = basis_value(i, j, step);
        }
    }
    x
}

/// Build the `term_count × sample_count` transpose `Xᵗ` directly.
pub fn create_transpose(sample_count: usize, term_count: usize, step: f64) -> DMatrix<f64> {
    let mut xt = DMatrix::zeros(term_count, sample_count);
    for j in 0..term_count {
        for i in 0..sample_count {
            xt[(j, i)] = basis_value(i, j, step);
        }
    }
    xt
}
