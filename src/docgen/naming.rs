//! Output file name and title derivation from a group's `file` key.
//!
//! Both substitutions of `.go` are plain first-occurrence replacements, not
//! suffix matches: `cargo_errors.go` and `go.go` are each altered at their
//! first `.go`.

use std::path::{Component, Path, PathBuf};

/// Source extension marker replaced in derived names.
pub const SOURCE_EXT: &str = ".go";

/// Extension of generated documents.
pub const DOC_EXT: &str = ".mdx";

/// Derives the output file name: `_` becomes `-`, then the first `.go`
/// becomes `.mdx`.
///
/// ```
/// use errdocs::docgen::naming::doc_file_name;
/// assert_eq!(doc_file_name("parse_errors.go"), "parse-errors.mdx");
/// ```
#[must_use]
pub fn doc_file_name(file: &str) -> String {
    file.replace('_', "-").replacen(SOURCE_EXT, DOC_EXT, 1)
}

/// Builds the target path for `file` inside `output_dir`.
///
/// Only the normal components of the derived name are kept. Root,
/// prefix, `.` and `..` components are dropped, so the result never
/// leaves `output_dir`: `/etc/x.go` maps to `<output_dir>/etc/x.mdx`.
#[must_use]
pub fn doc_path(output_dir: &Path, file: &str) -> PathBuf {
    let name = doc_file_name(file);
    let mut path = output_dir.to_path_buf();
    for component in Path::new(&name).components() {
        if let Component::Normal(part) = component {
            path.push(part);
        }
    }
    path
}

/// Derives the human-readable title: drop the first `.go`, split on `_`,
/// capitalize each word, join with spaces.
///
/// Empty words are kept, so `a__b.go` yields `"A  B"`.
#[must_use]
pub fn title_from_file(file: &str) -> String {
    file.replacen(SOURCE_EXT, "", 1)
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-cases the first character and leaves the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
