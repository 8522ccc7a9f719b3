//! Error documentation generation.
//!
//! Reads a JSON error report, groups records by source file, and writes
//! one MDX page per file:
//!
//! input → parse → group → (per group: name → render → write → confirm)
//!
//! The run is strictly sequential. Nothing is written until the whole
//! input has been read and parsed; after that, the first failure aborts
//! the run and earlier pages stay on disk.

pub mod group;
pub mod mdx;
pub mod naming;
pub mod report;
pub mod sink;

use std::io::Write;
use std::path::PathBuf;

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info};

use crate::error::GenerateError;
use group::group_by_file;
use mdx::render_document;
use report::ErrorReport;
use sink::DocSink;

/// Default destination directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "errors";

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of records in the input.
    pub records: usize,
    /// Pages written, in write order.
    pub written: Vec<PathBuf>,
}

/// Generates error pages into a [`DocSink`].
#[derive(Debug)]
pub struct Generator<S> {
    sink: S,
    output_dir: PathBuf,
}

impl<S: DocSink> Generator<S> {
    /// Creates a generator writing under `output_dir`.
    #[must_use]
    pub fn new(sink: S, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            sink,
            output_dir: output_dir.into(),
        }
    }

    /// Returns the underlying sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs the whole pipeline.
    ///
    /// Consumes `input` to end-of-stream, then creates the output directory
    /// and writes one page per distinct `file`, in first-seen order. A line
    /// `Generated <path>` is written to `out` after each page.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError` if the input cannot be read or parsed, the
    /// output directory cannot be created, a page cannot be written, or
    /// `out` rejects a confirmation line.
    pub async fn run<R, W>(&self, mut input: R, out: &mut W) -> Result<RunSummary, GenerateError>
    where
        R: AsyncRead + Unpin,
        W: Write,
    {
        let mut buf = Vec::new();
        input
            .read_to_end(&mut buf)
            .await
            .map_err(GenerateError::Read)?;

        let report = ErrorReport::from_slice(&buf)?;
        debug!(bytes = buf.len(), records = report.errors.len(), "parsed error report");

        self.sink
            .create_dir_all(&self.output_dir)
            .await
            .map_err(|source| GenerateError::CreateDir {
                path: self.output_dir.clone(),
                source,
            })?;

        let groups = group_by_file(&report.errors);
        debug!(groups = groups.len(), "grouped records by file");

        let mut written = Vec::with_capacity(groups.len());
        for group in &groups {
            let doc = render_document(&self.output_dir, group);
            debug!(file = group.file, path = %doc.path.display(), "rendered page");

            self.sink
                .write(&doc.path, &doc.body)
                .await
                .map_err(|source| GenerateError::Write {
                    path: doc.path.clone(),
                    source,
                })?;
            info!(
                path = %doc.path.display(),
                records = group.records.len(),
                "wrote error page"
            );

            writeln!(out, "Generated {}", doc.path.display()).map_err(GenerateError::Console)?;
            written.push(doc.path);
        }

        Ok(RunSummary {
            records: report.errors.len(),
            written,
        })
    }
}
