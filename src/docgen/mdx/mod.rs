//! MDX page generation for error groups.
//!
//! Converts grouped error records into MDX pages with:
//! - YAML frontmatter carrying the page title
//! - a level-1 heading repeating the title
//! - one level-2 section per error

pub mod frontmatter;
pub mod page;

pub use page::{OutputDocument, generate_error_page, render_document};
