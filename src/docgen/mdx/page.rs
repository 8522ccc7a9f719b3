//! Per-file MDX page generation.
//!
//! Assembles frontmatter, the page heading, and one section per error
//! into a complete document. Record fields are emitted verbatim; no
//! Markdown escaping is applied.

use std::path::{Path, PathBuf};

use crate::docgen::group::FileGroup;
use crate::docgen::mdx::frontmatter::generate_frontmatter;
use crate::docgen::naming::{doc_path, title_from_file};
use crate::docgen::report::ErrorRecord;

/// A rendered page and the path it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    /// Target path, always inside the output directory.
    pub path: PathBuf,
    /// Full page text.
    pub body: String,
}

/// Render the document for one file group under `output_dir`.
#[must_use]
pub fn render_document(output_dir: &Path, group: &FileGroup<'_>) -> OutputDocument {
    OutputDocument {
        path: doc_path(output_dir, group.file),
        body: generate_error_page(group),
    }
}

/// Generate the page text for one file group.
///
/// Layout:
///
/// ```text
/// ---
/// title: <Title> Errors
/// ---
///
/// # <Title> Errors
///
/// <one `##` section per error>
/// ```
#[must_use]
pub fn generate_error_page(group: &FileGroup<'_>) -> String {
    let heading = format!("{} Errors", title_from_file(group.file));

    let sections = group
        .records
        .iter()
        .map(|&record| render_section(record))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n# {heading}\n\n{sections}\n",
        generate_frontmatter(&heading)
    )
}

/// Render one `##` section; each is wrapped in a leading and trailing newline.
fn render_section(record: &ErrorRecord) -> String {
    format!(
        "\n## {}\n\n{}\n\n{}\n",
        record.name, record.short_message, record.long_message
    )
}
