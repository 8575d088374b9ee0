//! Input/output helpers.
//!
//! - temperature log ingest + validation (`ingest`)
//! - per-core text files (`export`)
//! - run summary JSON (`summary`)

pub mod export;
pub mod ingest;
pub mod summary;

pub use export::*;
pub use ingest::*;
pub use summary::*;
