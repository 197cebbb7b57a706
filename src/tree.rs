//! Recursive listing of a directory's descendants.

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file or directory found below a walked root.
pub struct Entry {
    /// Full path, prefixed with the walked root.
    pub path: PathBuf,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

/// Lists the descendants of `root` (the root itself excluded), files and directories
/// together.
///
/// At most `max_depth` levels are walked, direct children being level 1. With `skip_hidden`,
/// dot-prefixed entries are left out along with everything below them. Pruned subtrees are
/// never opened, so an unreadable directory inside one is not an error.
///
/// Entries are ordered by comparing paths component-wise, so a directory always comes
/// directly before its own subtree and siblings interleave by name regardless of type.
/// Symlinks are not followed.
///
/// # Errors
///
/// Returns an error if any walked directory below `root` cannot be read.
pub fn descendants(
    root: &Path,
    max_depth: Option<usize>,
    skip_hidden: bool,
) -> Result<Vec<Entry>> {
    // walkdir raises a max depth below the min depth back up to it
    if max_depth == Some(0) {
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(root).min_depth(1);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut entries = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| !(skip_hidden && is_hidden(e)))
    {
        let entry = entry?;
        entries.push(Entry {
            is_dir: entry.file_type().is_dir(),
            path: entry.into_path(),
        });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

// Only entries below the root reach the filter, and a hidden parent is never descended into,
// so the entry's own name is enough.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().starts_with(b".")
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
