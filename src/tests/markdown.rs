use super::{heading_title, index_doc_text, is_leaf_document};
use std::path::Path;

#[test]
fn test_heading_title_levels() {
    assert_eq!(heading_title("# Title"), Some("Title"));
    assert_eq!(heading_title("### Lower level header is OK\n"), Some("Lower level header is OK"));
    assert_eq!(heading_title("#\t\tTabs"), Some("Tabs"));
}

#[test]
fn test_heading_title_strips_line_ending() {
    assert_eq!(heading_title("# Windows\r\n"), Some("Windows"));
    assert_eq!(heading_title("# Unix\n"), Some("Unix"));
}

#[test]
fn test_heading_title_keeps_trailing_markup() {
    // Only the leading hashes are markup; the rest of the line is kept as written
    assert_eq!(heading_title("## Closing hashes ##"), Some("Closing hashes ##"));
}

#[test]
fn test_heading_title_requires_whitespace() {
    assert_eq!(heading_title("#NoSpace"), None);
    assert_eq!(heading_title("This is not a markdown header"), None);
    assert_eq!(heading_title(" # indented"), None);
    assert_eq!(heading_title(""), None);
}

#[test]
fn test_heading_title_empty_heading() {
    assert_eq!(heading_title("# "), Some(""));
    assert_eq!(heading_title("#\n"), Some(""));
}

#[test]
fn test_index_doc_text() {
    assert_eq!(index_doc_text("dir1"), "# dir1\n");
}

#[test]
fn test_is_leaf_document() {
    assert!(is_leaf_document(Path::new("docs/doc.md")));
    assert!(!is_leaf_document(Path::new("docs/README.md")));
    assert!(!is_leaf_document(Path::new("docs/dummy.txt")));
    assert!(!is_leaf_document(Path::new("docs/md")));
    assert!(is_leaf_document(Path::new("docs/readme.md")));
}
