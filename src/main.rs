//! `errdocs` - MDX error documentation from JSON error reports

use clap::Parser;

use errdocs::cli::{self, args::Cli};
use errdocs::error::ExitCode;
use errdocs::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match cli::run(&cli).await {
        Ok(summary) => {
            tracing::info!(
                records = summary.records,
                pages = summary.written.len(),
                "done"
            );
            std::process::exit(ExitCode::SUCCESS);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
