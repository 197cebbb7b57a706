//! Bringing a whole documentation tree up to date in one pass.
//!
//! The root is handled first, then every non-hidden directory below it in path order. Each
//! directory gets an index document if it lacks one, then a table of contents: inserted when
//! the document has no block yet, updated otherwise. Any failure stops the run.

use crate::content_path::{ContentPath, TocOptions};
use crate::edit::DocEdit;
use crate::error::{Result, TocError};
use crate::tree;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Parameters of a run.
pub struct Settings {
    /// Depth limit for the root directory's table of contents.
    pub root_toc_max_depth: Option<usize>,
    /// Depth limit applied by every other directory to its own subtree.
    pub toc_max_depth: Option<usize>,
    /// List hidden entries in the rendered tables of contents.
    pub include_hidden: bool,
    /// Work out every action without writing anything.
    pub dry_run: bool,
}

impl Settings {
    fn toc_options(&self, is_root: bool) -> TocOptions {
        let max_depth = if is_root {
            self.root_toc_max_depth
        } else {
            self.toc_max_depth
        };
        TocOptions::default()
            .with_max_depth(max_depth)
            .with_ignore_hidden(!self.include_hidden)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// What was done to a document.
pub enum ActionKind {
    /// An index document was created.
    Created,
    /// A table of contents was inserted into a document lacking one.
    Inserted,
    /// An existing table of contents was regenerated.
    Updated,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// One step of a run, in the order performed.
pub struct Action {
    /// Kind of step.
    pub kind: ActionKind,
    /// Document affected.
    pub path: PathBuf,
    /// Whether the document's bytes differ from before the step.
    pub changed: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Serialisable account of a run.
pub struct Report {
    /// Root directory the run started from.
    pub root: PathBuf,
    /// Whether files were left untouched.
    pub dry_run: bool,
    /// Steps in the order performed.
    pub actions: Vec<Action>,
}

impl Report {
    #[must_use]
    /// Actions of the given kind.
    pub fn count(&self, kind: ActionKind) -> usize {
        self.actions.iter().filter(|a| a.kind == kind).count()
    }

    #[must_use]
    /// Whether any document was, or in a dry run would be, modified.
    pub fn has_changes(&self) -> bool {
        self.actions.iter().any(|a| a.changed)
    }
}

/// Creates missing index documents and inserts or updates the table of contents of `root`
/// and every non-hidden directory below it.
///
/// # Errors
///
/// Returns [`TocError::InvalidOperand`] if `root` is not a directory, or the first error any
/// directory raises.
pub fn run(root: &Path, settings: &Settings) -> Result<Report> {
    if !root.is_dir() {
        return Err(TocError::InvalidOperand {
            path: root.to_path_buf(),
            reason: "root must be a directory",
        });
    }

    let mut report = Report {
        root: root.to_path_buf(),
        dry_run: settings.dry_run,
        actions: Vec::new(),
    };

    let root_options = settings.toc_options(true);
    sync_directory(&ContentPath::new(root), &root_options, settings, &mut report)?;

    let options = settings.toc_options(false);
    // Hidden directories are never synced, whatever the TOC lists
    for entry in tree::descendants(root, None, true)? {
        if entry.is_dir {
            sync_directory(&ContentPath::new(entry.path), &options, settings, &mut report)?;
        }
    }

    Ok(report)
}

fn sync_directory(
    dir: &ContentPath,
    options: &TocOptions,
    settings: &Settings,
    report: &mut Report,
) -> Result<()> {
    let doc = dir.doc_path();

    if !doc.exists() {
        if settings.dry_run {
            report.actions.push(Action {
                kind: ActionKind::Created,
                path: doc.clone(),
                changed: true,
            });
            let edit = dir.plan_insert_into(doc, dir.index_doc_text(), options)?;
            record(report, ActionKind::Inserted, &edit);
            return Ok(());
        }
        dir.create_index_doc()?;
        info!("create index doc: {}", doc.display());
        report.actions.push(Action {
            kind: ActionKind::Created,
            path: doc.clone(),
            changed: true,
        });
    }

    let (kind, edit) = if dir.has_toc()? {
        (ActionKind::Updated, dir.plan_update(options)?)
    } else {
        (ActionKind::Inserted, dir.plan_insert(options)?)
    };

    if !settings.dry_run {
        edit.apply()?;
        if kind == ActionKind::Updated {
            info!("update toc: {}", dir.path().display());
        } else {
            info!("insert toc: {}", dir.path().display());
        }
    }
    record(report, kind, &edit);
    Ok(())
}

fn record(report: &mut Report, kind: ActionKind, edit: &DocEdit) {
    report.actions.push(Action {
        kind,
        path: edit.path.clone(),
        changed: edit.is_change(),
    });
}

#[cfg(test)]
#[path = "tests/usecase.rs"]
mod tests;
