//! `core-temps` library crate.
//!
//! The binary is a thin wrapper around this library so that:
//!
//! - the solver and interpolation are testable without spawning processes
//! - each core's fit is an independent value computation
//!
//! Layout, leaf-first: `math` (matrix primitives + Gaussian elimination),
//! `fit` (per-core least squares + piecewise interpolation), `report`
//! (fixed-width text), `io` (ingest/export), `cli` + `app` (the binary).

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod report;
