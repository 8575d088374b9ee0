//! Dense matrix primitives used by the Gaussian-elimination solver.
//!
//! Everything here operates on `nalgebra::DMatrix<f64>` indexed as
//! `(row, col)`. The row operations mutate in place; the solver owns the
//! matrix it passes in, so nothing here is ever shared.

use nalgebra::DMatrix;

use crate::error::FitError;

/// Matrix product `lhs * rhs`.
///
/// Fails unless `lhs.ncols() == rhs.nrows()`.
pub fn multiply(lhs: &DMatrix<f64>, rhs: &DMatrix<f64>) -> Result<DMatrix<f64>, FitError> {
    if lhs.ncols() != rhs.nrows() {
        return Err(FitError::DimensionMismatch {
            op: "multiply",
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        });
    }
    Ok(lhs * rhs)
}

/// Concatenate `a` and `b` horizontally: `a`'s columns, then `b`'s.
pub fn augment(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>, FitError> {
    if a.nrows() != b.nrows() {
        return Err(FitError::DimensionMismatch {
            op: "augment",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let mut out = DMatrix::zeros(a.nrows(), a.ncols() + b.ncols());
    out.view_mut((0, 0), a.shape()).copy_from(a);
    out.view_mut((0, a.ncols()), b.shape()).copy_from(b);
    Ok(out)
}

/// Split a matrix into its first `at` columns and the rest.
///
/// Inverse of [`augment`].
pub fn split_columns(
    matrix: &DMatrix<f64>,
    at: usize,
) -> Result<(DMatrix<f64>, DMatrix<f64>), FitError> {
    if at > matrix.ncols() {
        return Err(FitError::DimensionMismatch {
            op: "split_columns",
            lhs: matrix.shape(),
            rhs: (matrix.nrows(), at),
        });
    }
    let left = matrix.columns(0, at).into_owned();
    let right = matrix.columns(at, matrix.ncols() - at).into_owned();
    Ok((left, right))
}

/// Index of the row in `start_row..row_end` with the largest magnitude in
/// `column`.
///
/// The first candidate seeds the running maximum and only a strictly larger
/// value replaces it, so ties resolve to the earliest row. An empty range (or
/// an out-of-range column) returns `start_row`.
pub fn find_pivot_row(
    matrix: &DMatrix<f64>,
    column: usize,
    row_end: usize,
    start_row: usize,
) -> usize {
    let row_end = row_end.min(matrix.nrows());
    if start_row >= row_end || column >= matrix.ncols() {
        return start_row;
    }

    let mut best = start_row;
    let mut max = matrix[(start_row, column)].abs();
    for row in (start_row + 1)..row_end {
        let value = matrix[(row, column)].abs();
        if value > max {
            max = value;
            best = row;
        }
    }
    best
}

/// Exchange two full rows.
pub fn swap_rows(matrix: &mut DMatrix<f64>, row_a: usize, row_b: usize) {
    if row_a != row_b {
        matrix.swap_rows(row_a, row_b);
    }
}

/// Divide the first `column_count` entries of `row_index` by the row's first
/// non-zero entry, leaving an exact `1.0` there.
///
/// Returns the column of that leading entry.
pub fn scale_row(
    matrix: &mut DMatrix<f64>,
    row_index: usize,
    column_count: usize,
) -> Result<usize, FitError> {
    let column_count = column_count.min(matrix.ncols());
    let lead = (0..column_count)
        .find(|&col| matrix[(row_index, col)] != 0.0)
        .ok_or(FitError::SingularMatrix { row: row_index })?;

    let scale = matrix[(row_index, lead)];
    for col in 0..column_count {
        matrix[(row_index, col)] /= scale;
    }
    matrix[(row_index, lead)] = 1.0;
    Ok(lead)
}

/// Zero the pivot column below `pivot_row_index`.
///
/// The pivot sits on the diagonal, at `(pivot_row_index, pivot_row_index)`,
/// and is expected to be `1.0` (see [`scale_row`]).
pub fn eliminate_below(matrix: &mut DMatrix<f64>, pivot_row_index: usize, column_count: usize) {
    let column_count = column_count.min(matrix.ncols());
    let pivot_col = pivot_row_index;
    if pivot_col >= column_count {
        return;
    }

    for row in (pivot_row_index + 1)..matrix.nrows() {
        let factor = matrix[(row, pivot_col)];
        if factor == 0.0 {
            continue;
        }
        for col in 0..column_count {
            matrix[(row, col)] -= factor * matrix[(pivot_row_index, col)];
        }
        matrix[(row, pivot_col)] = 0.0;
    }
}

/// Clear everything above the unit diagonal of an upper-triangular augmented
/// matrix, last row first, carrying each subtraction into the trailing
/// columns.
pub fn back_substitute(matrix: &mut DMatrix<f64>) {
    let rows = matrix.nrows().min(matrix.ncols());
    let cols = matrix.ncols();

    for i in (1..rows).rev() {
        for j in (0..i).rev() {
            let factor = matrix[(j, i)];
            if factor == 0.0 {
                continue;
            }
            for col in i..cols {
                matrix[(j, col)] -= factor * matrix[(i, col)];
            }
        }
    }
}
