use super::DocEdit;
use crate::error::TocError;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use textum::{Boundary, BoundaryMode, Patch, Snippet, Target};

fn line_patch(line: usize, replacement: &str) -> Patch {
    Patch {
        file: "README.md".to_string(),
        snippet: Snippet::At(Boundary::new(Target::Line(line), BoundaryMode::Include)),
        replacement: replacement.to_string(),
    }
}

#[test]
fn test_patched_keeps_before() {
    let edit = DocEdit::patched(
        PathBuf::from("README.md"),
        "# T\nold\n".to_string(),
        &line_patch(1, "new\n"),
    )
    .unwrap();
    assert_eq!(edit.before, "# T\nold\n");
    assert_eq!(edit.after, "# T\nnew\n");
    assert!(edit.is_change());
}

#[test]
fn test_patched_no_change() {
    let edit = DocEdit::patched(
        PathBuf::from("README.md"),
        "# T\nsame\n".to_string(),
        &line_patch(1, "same\n"),
    )
    .unwrap();
    assert!(!edit.is_change());
}

#[test]
fn test_patched_unresolvable() {
    let err = DocEdit::patched(
        PathBuf::from("README.md"),
        "# T\n".to_string(),
        &line_patch(9, ""),
    )
    .unwrap_err();
    assert!(matches!(err, TocError::Splice { ref path, .. } if path == &PathBuf::from("README.md")));
}

#[test]
fn test_apply_writes_after() {
    let file = NamedTempFile::new().unwrap();
    let edit = DocEdit::patched(
        file.path().to_path_buf(),
        "# T\nold\n".to_string(),
        &line_patch(1, "new\n"),
    )
    .unwrap();
    edit.apply().unwrap();
    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "# T\nnew\n");
}
