//! CLI argument definitions
//!
//! Clap derive structs for `errdocs` command-line parsing. Every flag is
//! optional; with none given the tool reads stdin and writes `errors/`.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};

use crate::docgen::DEFAULT_OUTPUT_DIR;
use crate::observability::LogFormat;

/// Placeholder path meaning standard input.
pub const STDIN_PATH: &str = "-";

/// Generate MDX error documentation from a JSON error report on stdin.
#[derive(Parser, Debug)]
#[command(name = "errdocs", author, version, about)]
pub struct Cli {
    /// Read the report from a file instead of stdin (`-` is stdin).
    #[arg(short, long, default_value = STDIN_PATH, env = "ERRDOCS_INPUT")]
    pub input: PathBuf,

    /// Directory that receives the generated pages.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR, env = "ERRDOCS_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log record format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Human, env = "ERRDOCS_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "ERRDOCS_COLOR")]
    pub color: ColorChoice,
}

impl Cli {
    /// Returns the input file, or `None` when reading stdin.
    #[must_use]
    pub fn input_file(&self) -> Option<&Path> {
        (self.input.as_os_str() != STDIN_PATH).then_some(self.input.as_path())
    }
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}
