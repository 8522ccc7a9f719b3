//! Command-line entry point.
//!
//! Binds the generator to the process: stdin or a file as input, the
//! filesystem as the sink, stdout for confirmation lines.

pub mod args;

use tracing::debug;

use crate::cli::args::Cli;
use crate::docgen::{Generator, RunSummary, sink::FsSink};
use crate::error::GenerateError;

/// Run the generator for a parsed invocation.
///
/// # Errors
///
/// Returns `GenerateError` if the input file cannot be opened or the
/// generation run fails.
pub async fn run(cli: &Cli) -> Result<RunSummary, GenerateError> {
    let generator = Generator::new(FsSink, &cli.output_dir);
    let mut stdout = std::io::stdout();

    if let Some(path) = cli.input_file() {
        debug!(input = %path.display(), "reading report from file");
        let file = tokio::fs::File::open(path)
            .await
            .map_err(GenerateError::Read)?;
        generator.run(file, &mut stdout).await
    } else {
        debug!("reading report from stdin");
        generator.run(tokio::io::stdin(), &mut stdout).await
    }
}
