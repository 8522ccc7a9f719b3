//! YAML frontmatter generation for error pages.

/// Generate the frontmatter block carrying the page `title`.
///
/// The title is interpolated as-is, with no YAML quoting. The block is
/// delimited by `---` lines and has no trailing newline.
#[must_use]
pub fn generate_frontmatter(title: &str) -> String {
    let lines = ["---".to_string(), format!("title: {title}"), "---".to_string()];
    lines.join("\n")
}
