//! Linear algebra for the least-squares fit: basis matrices, dense matrix
//! primitives and the Gaussian-elimination solver.

pub mod basis;
pub mod matrix;
pub mod ols;

pub use basis::*;
pub use matrix::*;
pub use ols::*;
