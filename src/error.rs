//! Error taxonomy shared by every table-of-contents operation.
//!
//! Callers match on the variant rather than on message text: in particular `FileNotFound` and
//! `TitleNotFound` must stay distinct, since TOC rendering swallows exactly those two and
//! nothing else.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for results carrying a [`TocError`].
pub type Result<T> = std::result::Result<T, TocError>;

#[derive(Error, Debug)]
/// Every way a content path operation can fail.
pub enum TocError {
    /// The title source (a file, or a directory's `README.md`) does not exist.
    #[error("title source not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The title source exists but its first line is not a Markdown heading.
    #[error("no markdown heading on the first line of {}", .0.display())]
    TitleNotFound(PathBuf),

    /// The operation needs a directory (or a file) and was given the other kind.
    #[error("invalid operand {}: {reason}", .path.display())]
    InvalidOperand {
        /// Path the operation was invoked on.
        path: PathBuf,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Depth was requested against a path that is not an ancestor.
    #[error("{} is not {} or one of its descendants", .path.display(), .ancestor.display())]
    InvalidRelativePath {
        /// Path whose depth was requested.
        path: PathBuf,
        /// Path the depth was measured from.
        ancestor: PathBuf,
    },

    /// An index document is already present where one was about to be created.
    #[error("index document already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// An update was requested but the document holds no marker block.
    #[error("no toc block to update in {}", .0.display())]
    UpdateToc(PathBuf),

    /// A textum patch did not resolve against the document it was planned for.
    #[error("failed to splice toc block into {}: {source}", .path.display())]
    Splice {
        /// Document being patched.
        path: PathBuf,
        /// Underlying patch error.
        source: textum::PatchError,
    },

    /// Any other I/O failure while reading or rewriting a document.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// Directory traversal failed part way.
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// The settings file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TocError {
    /// Wraps an I/O error for `path`, keeping `NotFound` as its own variant.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound(path)
        } else {
            Self::Io { path, source }
        }
    }

    #[must_use]
    /// Whether TOC rendering may replace this failure with the entry's file name.
    pub fn is_title_fallback(&self) -> bool {
        matches!(self, Self::FileNotFound(_) | Self::TitleNotFound(_))
    }
}

#[cfg(test)]
#[path = "tests/error.rs"]
mod tests;
