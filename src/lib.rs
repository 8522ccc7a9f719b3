//! `errdocs` - MDX error documentation from JSON error reports
//!
//! Reads an error report, groups its records by source file, and writes
//! one MDX page per file into an output directory.

pub mod cli;
pub mod docgen;
pub mod error;
pub mod observability;
