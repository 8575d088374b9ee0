//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - parsed input samples (`Sample`)
//! - fit outputs (`Coefficients`, `Line`)
//! - resolved run settings (`RunConfig`)

pub mod types;

pub use types::*;
