use super::TocError;
use std::io;
use std::path::PathBuf;

#[test]
fn test_from_io_not_found() {
    let err = TocError::from_io("docs/README.md", io::Error::from(io::ErrorKind::NotFound));
    assert!(matches!(err, TocError::FileNotFound(ref p) if p == &PathBuf::from("docs/README.md")));
    assert!(err.is_title_fallback());
}

#[test]
fn test_from_io_other() {
    let err = TocError::from_io("docs", io::Error::from(io::ErrorKind::PermissionDenied));
    assert!(matches!(err, TocError::Io { .. }));
    assert!(!err.is_title_fallback());
}

#[test]
fn test_title_not_found_is_fallback() {
    assert!(TocError::TitleNotFound(PathBuf::from("a.md")).is_title_fallback());
    assert!(!TocError::UpdateToc(PathBuf::from("README.md")).is_title_fallback());
}

#[test]
fn test_messages() {
    assert_eq!(
        TocError::UpdateToc(PathBuf::from("README.md")).to_string(),
        "no toc block to update in README.md"
    );
    assert_eq!(
        TocError::InvalidRelativePath {
            path: PathBuf::from("/a"),
            ancestor: PathBuf::from("/b"),
        }
        .to_string(),
        "/a is not /b or one of its descendants"
    );
    assert_eq!(
        TocError::InvalidOperand {
            path: PathBuf::from("doc.md"),
            reason: "table of contents requires a directory",
        }
        .to_string(),
        "invalid operand doc.md: table of contents requires a directory"
    );
}
