//! Splicing the generated block into document text with textum patches.
//!
//! Nothing here touches the filesystem; the patches are applied to a rope of the document by
//! [`DocEdit::patched`](crate::edit::DocEdit::patched). A block is recognised structurally as
//! the first start marker followed (anywhere later) by an end marker, so its inner content is
//! never validated.

use crate::markdown::{TOC_END, TOC_START};
use ropey::Rope;
use textum::{Boundary, BoundaryMode, Patch, Snippet, Target};

#[must_use]
/// Wraps rendered outline lines in the canonical block shape.
///
/// Start marker, blank line, outline, blank line, end marker. No trailing newline.
pub fn render_block(toc: &str) -> String {
    format!("{TOC_START}\n\n{toc}\n\n{TOC_END}")
}

#[must_use]
/// Snippet spanning the first marker block of `rope`, end marker included.
///
/// Markers are found with `Target::resolve`, which scans characters across rope chunks, then
/// pinned by char index: the range lookup behind literal boundaries stops at chunk edges.
pub fn locate_block(rope: &Rope) -> Option<Snippet> {
    let start = Target::Literal(TOC_START.to_string()).resolve(rope).ok()?;
    let after_start = start + TOC_START.chars().count();
    let tail = Rope::from(rope.slice(after_start..));
    let end = after_start + Target::Literal(TOC_END.to_string()).resolve(&tail).ok()?;
    let last = end + TOC_END.chars().count() - 1;

    Some(Snippet::Between {
        start: Boundary::new(Target::Char(start), BoundaryMode::Include),
        end: Boundary::new(Target::Char(last), BoundaryMode::Include),
    })
}

#[must_use]
/// Whether `text` holds a start marker followed by an end marker.
pub fn contains_block(text: &str) -> bool {
    locate_block(&Rope::from_str(text)).is_some()
}

#[must_use]
/// Patch inserting `block` directly below the first line of `rope`, preceded by a blank line.
///
/// The first line is assumed to be the document's heading. An unterminated first line is
/// terminated before the block goes in.
pub fn insert_patch(file: String, rope: &Rope, block: &str) -> Patch {
    let unterminated = rope.len_lines() == 1 && rope.len_chars() > 0;
    let lead = if unterminated { "\n\n" } else { "\n" };

    Patch {
        file,
        snippet: Snippet::At(Boundary::new(Target::Line(0), BoundaryMode::Exclude)),
        replacement: format!("{lead}{block}\n"),
    }
}

#[must_use]
/// Patch replacing the first marker block of `rope` with `block`.
///
/// Returns `None` when `rope` holds no block. Text before the start marker and after the end
/// marker is kept verbatim.
pub fn replace_patch(file: String, rope: &Rope, block: &str) -> Option<Patch> {
    Some(Patch {
        file,
        snippet: locate_block(rope)?,
        replacement: block.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
