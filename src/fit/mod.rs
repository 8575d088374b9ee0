//! Per-channel fitting.
//!
//! Responsibilities:
//!
//! - build the shared design matrices for a run
//! - solve the least-squares line for each channel
//! - derive the piecewise linear interpolation segments

pub mod channel;
pub mod piecewise;

pub use channel::*;
pub use piecewise::*;
