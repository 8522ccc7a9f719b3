//! Destinations for generated documents.
//!
//! The generator only talks to a [`DocSink`], so it can run against the
//! real filesystem or, in tests, an in-memory map.

use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Capability to create the output directory and write documents.
#[async_trait]
pub trait DocSink: Send + Sync {
    /// Creates `path` and its parents. Succeeds if it already exists.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Writes `contents` to `path`, replacing any existing file.
    async fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes documents to disk via `tokio::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

#[async_trait]
impl DocSink for FsSink {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}
