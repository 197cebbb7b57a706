//! dirtocgen: keep a generated table of contents in every directory's README.md.
//!
//! Each directory of a documentation tree is represented by its index document. The library
//! renders an indented, linked outline of a directory's Markdown descendants and splices it
//! between two marker comments in that document, leaving the surrounding text alone.
//!
//! [`content_path::ContentPath`] holds the per-entry operations; [`usecase::run`] applies
//! them across a whole tree.

pub mod config;
pub mod content_path;
pub mod edit;
pub mod error;
pub mod markdown;
pub mod toc;
pub mod tree;
pub mod usecase;

pub use content_path::{ContentPath, TocOptions};
pub use error::{Result, TocError};
