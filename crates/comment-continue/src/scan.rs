//! Forward closure scan.
//!
//! Decides whether the comment opened on the caret line already has a
//! matching closer ahead of the caret. This is a textual heuristic, not a
//! parser: delimiter-like substrings inside string or regex literals
//! elsewhere in the document can fool it. That imprecision is inherited
//! behavior and is kept as-is.

use crate::document::{Document, Position};

/// Block comment opening delimiter.
pub const BLOCK_OPEN: &str = "/*";
/// Block comment closing delimiter.
pub const BLOCK_CLOSE: &str = "*/";

/// Returns `true` when the comment open at `from` has no matching closer
/// ahead in the document.
///
/// The comment is unclosed iff no `*/` occurs at all in the rest of the
/// document, or another `/*` occurs strictly before the first `*/` (in
/// which case that closer belongs to the later comment, not this one).
pub fn is_unclosed(doc: &Document, from: Position) -> bool {
    let rest = doc.text_from(from);
    let first_close = rest.find(BLOCK_CLOSE);
    let first_open = rest.find(BLOCK_OPEN);

    match (first_close, first_open) {
        (None, _) => true,
        (Some(close), Some(open)) => open < close,
        (Some(_), None) => false,
    }
}
