//! Markdown conventions the generator reads and writes.
//!
//! The marker lines are a contract with any other tooling that parses generated index
//! documents, so they must never change shape.

use std::path::Path;

/// File name of the document representing a directory.
pub const INDEX_DOC_NAME: &str = "README.md";

/// Extension (without the dot) of files eligible for the table of contents.
pub const EXTENSION: &str = "md";

/// First line of the generated block.
pub const TOC_START: &str = "[//]: # (dirtocgen start)";

/// Last line of the generated block.
pub const TOC_END: &str = "[//]: # (dirtocgen end)";

/// List marker opening every outline line.
pub const BULLET: &str = "*";

/// Indentation added per nesting level below the first.
pub const INDENT: &str = "  ";

#[must_use]
/// Extracts the title from a heading line of the form `#+\s+(.*)`.
///
/// The line may still carry its terminator. The whitespace run after the hashes may be the
/// terminator itself, in which case the title is empty.
pub fn heading_title(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches('#');
    if rest.len() == line.len() {
        return None;
    }
    let title = rest.trim_start();
    if title.len() == rest.len() {
        return None;
    }
    let title = title.split('\n').next().unwrap_or_default();
    Some(title.strip_suffix('\r').unwrap_or(title))
}

#[must_use]
/// Contents of a freshly created index document: a level-one heading naming the directory.
pub fn index_doc_text(name: &str) -> String {
    format!("# {name}\n")
}

#[must_use]
/// Whether `path` names a standalone document: a Markdown file other than an index document.
pub fn is_leaf_document(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == EXTENSION)
        && path.file_name().is_some_and(|name| name != INDEX_DOC_NAME)
}

#[cfg(test)]
#[path = "tests/markdown.rs"]
mod tests;
