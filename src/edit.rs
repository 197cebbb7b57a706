//! Whole-document rewrites computed ahead of touching disk.
//!
//! An edit is a textum patch applied to a rope of the document's current contents. Keeping the
//! old and new text together lets the caller report whether anything changed and lets a dry run
//! stop short of [`DocEdit::apply`].

use crate::error::{Result, TocError};
use ropey::Rope;
use std::fs;
use std::path::PathBuf;
use textum::Patch;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Planned replacement of one document's contents.
pub struct DocEdit {
    /// Document to rewrite.
    pub path: PathBuf,
    /// Contents as read, or as they would be for a document not yet created.
    pub before: String,
    /// Contents after the edit.
    pub after: String,
}

impl DocEdit {
    /// Applies `patch` to `before` in memory.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::Splice`] if the patch does not resolve against `before`.
    pub fn patched(path: PathBuf, before: String, patch: &Patch) -> Result<Self> {
        let mut rope = Rope::from_str(&before);
        if let Err(source) = patch.apply(&mut rope) {
            return Err(TocError::Splice { path, source });
        }
        Ok(Self {
            path,
            before,
            after: rope.to_string(),
        })
    }

    #[must_use]
    /// Whether applying the edit alters the document's bytes.
    pub fn is_change(&self) -> bool {
        self.before != self.after
    }

    /// Rewrites the whole document with the new contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn apply(&self) -> Result<()> {
        fs::write(&self.path, &self.after).map_err(|source| TocError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "tests/edit.rs"]
mod tests;
