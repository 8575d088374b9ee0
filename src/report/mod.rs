//! Reporting utilities: per-core file contents and terminal output.

pub mod format;

pub use format::*;
