//! Least squares via the normal equations.
//!
//! We solve
//!
//! ```text
//! (XᵗX) c = Xᵗy
//! ```
//!
//! by forming the augmented matrix `[XᵗX | Xᵗy]` and running Gaussian
//! elimination with partial pivoting followed by back-substitution. The
//! systems here are tiny (two or three unknowns), so a hand-rolled
//! elimination over `DMatrix` is all we need.

use nalgebra::DMatrix;

use crate::domain::Coefficients;
use crate::error::FitError;
use crate::math::matrix::{
    augment, back_substitute, eliminate_below, find_pivot_row, multiply, scale_row, swap_rows,
};

/// Fit `y ≈ X c` and return `c`.
///
/// `xt` must be the transpose of `x` and `y` an `n × 1` column with one entry
/// per row of `x`.
pub fn solve_least_squares(
    x: &DMatrix<f64>,
    xt: &DMatrix<f64>,
    y: &DMatrix<f64>,
) -> Result<Coefficients, FitError> {
    if xt.shape() != (x.ncols(), x.nrows()) {
        return Err(FitError::DimensionMismatch {
            op: "transpose",
            lhs: x.shape(),
            rhs: xt.shape(),
        });
    }
    if y.ncols() != 1 {
        return Err(FitError::DimensionMismatch {
            op: "response",
            lhs: (x.nrows(), 1),
            rhs: y.shape(),
        });
    }

    let xtx = multiply(xt, x)?;
    let xty = multiply(xt, y)?;
    let augmented = augment(&xtx, &xty)?;

    solve_augmented(augmented)
}

/// Solve a square system given as a `k × (k + 1)` augmented matrix.
///
/// Takes the matrix by value: elimination happens in place on it and only
/// the solved last column survives, as a fresh [`Coefficients`].
pub fn solve_augmented(mut augmented: DMatrix<f64>) -> Result<Coefficients, FitError> {
    let terms = augmented.nrows();
    let width = augmented.ncols();
    if width != terms + 1 {
        return Err(FitError::DimensionMismatch {
            op: "solve",
            lhs: (terms, terms + 1),
            rhs: augmented.shape(),
        });
    }

    for row in 0..terms {
        if row != terms - 1 {
            let pivot = find_pivot_row(&augmented, row, terms, row);
            swap_rows(&mut augmented, row, pivot);
        }

        // A leading entry right of the diagonal means the column is all zero
        // from here down.
        let lead = scale_row(&mut augmented, row, width)?;
        if lead != row {
            return Err(FitError::SingularMatrix { row });
        }

        eliminate_below(&mut augmented, row, width);
    }

    back_substitute(&mut augmented);

    Ok(Coefficients::new(augmented.column(terms).iter().copied().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::basis::{create_design_matrix, create_transpose};

    fn column(values: &[f64]) -> DMatrix<f64> {
        DMatrix::from_column_slice(values.len(), 1, values)
    }

    #[test]
    fn recovers_exact_line() {
        // y = 3 + 2x on x = 0, 30, ..., 270
        let n = 10;
        let step = 30.0;
        let x = create_design_matrix(n, 2, step);
        let xt = create_transpose(n, 2, step);
        let y: Vec<f64> = (0..n).map(|i| 3.0 + 2.0 * (i as f64 * step)).collect();

        let c = solve_least_squares(&x, &xt, &column(&y)).unwrap();
        assert!((c.intercept() - 3.0).abs() < 1e-6, "intercept {}", c.intercept());
        assert!((c.slope() - 2.0).abs() < 1e-6, "slope {}", c.slope());
    }

    #[test]
    fn three_sample_reference_case() {
        let x = create_design_matrix(3, 2, 30.0);
        let xt = create_transpose(3, 2, 30.0);
        let c = solve_least_squares(&x, &xt, &column(&[10.0, 40.0, 70.0])).unwrap();

        assert!((c.intercept() - 10.0).abs() < 1e-9);
        assert!((c.slope() - 1.0).abs() < 1e-9);
        assert_eq!(c.formula(), "     10.0000 +   1.0000x");
    }

    #[test]
    fn noisy_data_matches_closed_form() {
        let x_vals = [0.0, 30.0, 60.0, 90.0, 120.0];
        let y_vals = [61.0, 63.0, 60.0, 66.0, 64.0];
        let n = x_vals.len() as f64;
        let mean_x = x_vals.iter().sum::<f64>() / n;
        let mean_y = y_vals.iter().sum::<f64>() / n;
        let sxy: f64 = x_vals
            .iter()
            .zip(&y_vals)
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();
        let sxx: f64 = x_vals.iter().map(|x| (x - mean_x).powi(2)).sum();
        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;

        let x = create_design_matrix(5, 2, 30.0);
        let xt = create_transpose(5, 2, 30.0);
        let c = solve_least_squares(&x, &xt, &column(&y_vals)).unwrap();
        assert!((c.slope() - slope).abs() < 1e-9);
        assert!((c.intercept() - intercept).abs() < 1e-9);
    }

    #[test]
    fn quadratic_fit_recovers_all_terms() {
        // y = 1 + 0.5x + 0.01x^2
        let n = 6;
        let step = 10.0;
        let x = create_design_matrix(n, 3, step);
        let xt = create_transpose(n, 3, step);
        let y: Vec<f64> = (0..n)
            .map(|i| {
                let t = i as f64 * step;
                1.0 + 0.5 * t + 0.01 * t * t
            })
            .collect();

        let c = solve_least_squares(&x, &xt, &column(&y)).unwrap();
        assert_eq!(c.as_slice().len(), 3);
        assert!((c.intercept() - 1.0).abs() < 1e-6);
        assert!((c.slope() - 0.5).abs() < 1e-6);
        assert!((c.quadratic() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn single_term_fit_is_the_mean() {
        let x = create_design_matrix(4, 1, 30.0);
        let xt = create_transpose(4, 1, 30.0);
        let c = solve_least_squares(&x, &xt, &column(&[1.0, 2.0, 3.0, 6.0])).unwrap();
        assert!((c.intercept() - 3.0).abs() < 1e-12);
        assert_eq!(c.slope(), 0.0);
    }

    #[test]
    fn repeated_solves_are_identical() {
        let y = column(&[55.0, 57.5, 58.0, 61.25]);
        let x = create_design_matrix(4, 2, 30.0);
        let xt = create_transpose(4, 2, 30.0);
        let a = solve_least_squares(&x, &xt, &y).unwrap();
        let b = solve_least_squares(&x, &xt, &y).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_response_of_wrong_length() {
        let x = create_design_matrix(3, 2, 30.0);
        let xt = create_transpose(3, 2, 30.0);
        let err = solve_least_squares(&x, &xt, &column(&[1.0, 2.0])).unwrap_err();
        assert!(matches!(err, FitError::DimensionMismatch { op: "multiply", .. }));
    }

    #[test]
    fn rejects_inconsistent_transpose() {
        let x = create_design_matrix(3, 2, 30.0);
        let xt = create_transpose(4, 2, 30.0);
        let err = solve_least_squares(&x, &xt, &column(&[1.0, 2.0, 3.0])).unwrap_err();
        assert!(matches!(err, FitError::DimensionMismatch { op: "transpose", .. }));
    }

    #[test]
    fn single_sample_two_terms_is_singular() {
        let x = create_design_matrix(1, 2, 30.0);
        let xt = create_transpose(1, 2, 30.0);
        let err = solve_least_squares(&x, &xt, &column(&[42.0])).unwrap_err();
        assert_eq!(err, FitError::SingularMatrix { row: 1 });
    }

    #[test]
    fn dependent_rows_are_singular() {
        let aug = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0]);
        assert_eq!(solve_augmented(aug), Err(FitError::SingularMatrix { row: 1 }));
    }

    #[test]
    fn pivoting_handles_zero_leading_entry() {
        // 0x + y = 2, x + y = 3  ->  x = 1, y = 2
        let aug = DMatrix::from_row_slice(2, 3, &[0.0, 1.0, 2.0, 1.0, 1.0, 3.0]);
        let c = solve_augmented(aug).unwrap();
        assert!((c.get(0) - 1.0).abs() < 1e-12);
        assert!((c.get(1) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn solve_rejects_non_augmented_shape() {
        let err = solve_augmented(DMatrix::zeros(2, 2)).unwrap_err();
        assert!(matches!(err, FitError::DimensionMismatch { op: "solve", .. }));
    }
}
