//! Observability module
//!
//! Structured logging for `errdocs` runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
