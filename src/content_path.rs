//! A filesystem entry seen as a node of the documentation tree.
//!
//! A directory is represented by its `README.md` (its index document), a Markdown file by
//! itself. Nothing is cached: titles, depths and document paths are re-derived from disk on
//! every call, so a `ContentPath` is cheap to build for each entry visited and never goes
//! stale within a run.

use crate::edit::DocEdit;
use crate::error::{Result, TocError};
use crate::markdown::{self, BULLET, INDENT, INDEX_DOC_NAME};
use crate::{toc, tree};
use std::borrow::Cow;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use ropey::Rope;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Controls which descendants appear in a rendered table of contents.
pub struct TocOptions {
    /// Deepest level rendered, counting direct children as 1. `None` renders everything.
    pub max_depth: Option<usize>,
    /// Leave out entries with a dot-prefixed segment below the rendered directory.
    pub ignore_hidden: bool,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            ignore_hidden: true,
        }
    }
}

impl TocOptions {
    #[must_use]
    /// Limits rendering to `max_depth` levels below the directory.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    /// Chooses whether hidden entries are left out.
    pub fn with_ignore_hidden(mut self, ignore_hidden: bool) -> Self {
        self.ignore_hidden = ignore_hidden;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Wraps a path to a file or directory, which need not exist.
pub struct ContentPath {
    path: PathBuf,
}

impl ContentPath {
    #[must_use]
    /// Wraps `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    /// The wrapped path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    /// Whether any segment of the path starts with a dot.
    pub fn is_hidden(&self) -> bool {
        self.path.components().any(|component| match component {
            Component::Normal(name) => name.as_encoded_bytes().starts_with(b"."),
            _ => false,
        })
    }

    #[must_use]
    /// The Markdown file holding this entry's title: `README.md` inside a directory, the path
    /// itself otherwise.
    pub fn doc_path(&self) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(INDEX_DOC_NAME)
        } else {
            self.path.clone()
        }
    }

    /// Reads the display title from the first line of [`Self::doc_path`].
    ///
    /// # Errors
    ///
    /// Returns [`TocError::FileNotFound`] if the title source is absent and
    /// [`TocError::TitleNotFound`] if its first line is not a Markdown heading.
    pub fn title(&self) -> Result<String> {
        let doc = self.doc_path();
        let file = File::open(&doc).map_err(|e| TocError::from_io(&doc, e))?;
        let mut first_line = String::new();
        BufReader::new(file)
            .read_line(&mut first_line)
            .map_err(|e| TocError::from_io(&doc, e))?;

        markdown::heading_title(&first_line)
            .map(str::to_string)
            .ok_or(TocError::TitleNotFound(doc))
    }

    /// Number of path segments between `ancestor` and this entry: 0 for the ancestor itself,
    /// 1 for a direct child.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::InvalidRelativePath`] unless the path is `ancestor` or lies below it.
    pub fn depth_from(&self, ancestor: impl AsRef<Path>) -> Result<usize> {
        Ok(self.relative_to(ancestor.as_ref())?.components().count())
    }

    fn relative_to(&self, ancestor: &Path) -> Result<&Path> {
        self.path
            .strip_prefix(ancestor)
            .map_err(|_| TocError::InvalidRelativePath {
                path: self.path.clone(),
                ancestor: ancestor.to_path_buf(),
            })
    }

    /// Renders the outline of this directory's descendants, one line per entry, joined by
    /// newlines with none trailing.
    ///
    /// Each line reads `<indent>* [<title>](<relative/path>)`. Entries come in path order;
    /// files other than Markdown documents and index documents are skipped, and entries with
    /// no resolvable title fall back to their name.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::InvalidOperand`] if this is not a directory, or any traversal or
    /// read error other than a missing title.
    pub fn generate_toc(&self, options: &TocOptions) -> Result<String> {
        self.require_dir("table of contents requires a directory")?;

        let mut lines = Vec::new();
        for entry in tree::descendants(&self.path, options.max_depth, options.ignore_hidden)? {
            let node = ContentPath::new(entry.path);
            let relative = ContentPath::new(node.relative_to(&self.path)?);
            let depth = node.depth_from(&self.path)?;
            if !entry.is_dir && !markdown::is_leaf_document(&node.path) {
                continue;
            }

            let title = node.title_or_name(entry.is_dir)?;
            lines.push(format!(
                "{}{BULLET} [{title}]({})",
                INDENT.repeat(depth - 1),
                posix(relative.path()),
            ));
        }

        Ok(lines.join("\n"))
    }

    fn title_or_name(&self, is_dir: bool) -> Result<String> {
        match self.title() {
            Ok(title) => Ok(title),
            Err(e) if e.is_title_fallback() => {
                debug!("falling back to name for {}: {e}", self.path.display());
                let name = if is_dir {
                    self.path.file_name()
                } else {
                    self.path.file_stem()
                };
                Ok(name.map_or_else(String::new, |n| n.to_string_lossy().into_owned()))
            }
            Err(e) => Err(e),
        }
    }

    /// Creates this directory's `README.md` holding a level-one heading with the directory
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::InvalidOperand`] for a non-directory and
    /// [`TocError::AlreadyExists`] if the index document is already present; an existing file
    /// is never overwritten.
    pub fn create_index_doc(&self) -> Result<()> {
        self.require_dir("index documents belong to directories")?;

        let doc = self.path.join(INDEX_DOC_NAME);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&doc)
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => TocError::AlreadyExists(doc.clone()),
                _ => TocError::Io {
                    path: doc.clone(),
                    source,
                },
            })?;
        file.write_all(self.index_doc_text().as_bytes())
            .map_err(|source| TocError::Io { path: doc, source })
    }

    #[must_use]
    /// Contents [`Self::create_index_doc`] writes: a level-one heading naming the directory.
    pub fn index_doc_text(&self) -> String {
        markdown::index_doc_text(&self.dir_name())
    }

    fn dir_name(&self) -> String {
        if let Some(name) = self.path.file_name() {
            return name.to_string_lossy().into_owned();
        }
        // `.` and `..` only have a name once resolved.
        fs::canonicalize(&self.path)
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Whether the document already contains a generated block.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read.
    pub fn has_toc(&self) -> Result<bool> {
        Ok(toc::contains_block(&read_doc(&self.doc_path())?))
    }

    /// Inserts a freshly rendered block below the document's first line and rewrites it.
    ///
    /// Meant for documents without a block; see [`Self::update_toc`] for the others.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOC cannot be rendered or the document read or written.
    pub fn insert_toc(&self, options: &TocOptions) -> Result<()> {
        self.plan_insert(options)?.apply()
    }

    /// Replaces the document's existing block with a freshly rendered one and rewrites it.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::UpdateToc`], leaving the file untouched, if the document holds no
    /// block; otherwise any render, read or write error.
    pub fn update_toc(&self, options: &TocOptions) -> Result<()> {
        self.plan_update(options)?.apply()
    }

    /// Computes what [`Self::insert_toc`] would write without writing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOC cannot be rendered or the document read.
    pub fn plan_insert(&self, options: &TocOptions) -> Result<DocEdit> {
        let doc = self.doc_path();
        let before = read_doc(&doc)?;
        self.plan_insert_into(doc, before, options)
    }

    /// Computes the result of inserting a block into `before`, the contents `doc` has or will
    /// have.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOC cannot be rendered.
    pub fn plan_insert_into(
        &self,
        doc: PathBuf,
        before: String,
        options: &TocOptions,
    ) -> Result<DocEdit> {
        let block = toc::render_block(&self.generate_toc(options)?);
        let rope = Rope::from_str(&before);
        let patch = toc::insert_patch(doc.display().to_string(), &rope, &block);
        DocEdit::patched(doc, before, &patch)
    }

    /// Computes what [`Self::update_toc`] would write without writing it.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::UpdateToc`] if the document holds no block, or any render or read
    /// error.
    pub fn plan_update(&self, options: &TocOptions) -> Result<DocEdit> {
        let doc = self.doc_path();
        let before = read_doc(&doc)?;
        let block = toc::render_block(&self.generate_toc(options)?);
        let rope = Rope::from_str(&before);
        let Some(patch) = toc::replace_patch(doc.display().to_string(), &rope, &block) else {
            return Err(TocError::UpdateToc(doc));
        };
        DocEdit::patched(doc, before, &patch)
    }

    fn require_dir(&self, reason: &'static str) -> Result<()> {
        if self.path.is_dir() {
            Ok(())
        } else {
            Err(TocError::InvalidOperand {
                path: self.path.clone(),
                reason,
            })
        }
    }
}

fn read_doc(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| TocError::from_io(path, e))
}

/// Joins a relative path with forward slashes whatever the platform separator.
fn posix(path: &Path) -> Cow<'_, str> {
    if std::path::MAIN_SEPARATOR == '/' {
        return path.to_string_lossy();
    }
    let parts: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Cow::Owned(parts.join("/"))
}

#[cfg(test)]
#[path = "tests/content_path.rs"]
mod tests;
