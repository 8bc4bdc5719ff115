//! Rope-based document with line access and atomic insertion.
//!
//! The kernel only needs a small slice of a real editor buffer: line count,
//! line reads, "everything from here to end of document", and a single
//! atomic insertion at a position. Rope provides O(log N) access for all of
//! them, so the closure scan stays cheap even on large documents.

use ropey::Rope;
use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A text document backed by a Rope.
///
/// Positions handed to accessors are clamped to the document rather than
/// rejected; the kernel never treats an out-of-range position as an error.
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a document from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get total line count.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get text of the specified line (excluding newline).
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }

        Some(text)
    }

    /// Get character offset from a position, clamping both coordinates.
    fn position_to_char(&self, position: Position) -> usize {
        if position.line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start = self.rope.line_to_char(position.line);
        let line_len = if position.line + 1 < self.rope.len_lines() {
            // -1 for the newline
            self.rope.line_to_char(position.line + 1) - line_start - 1
        } else {
            self.rope.len_chars() - line_start
        };

        line_start + position.column.min(line_len)
    }

    /// Get the text from `from` through end of document.
    pub fn text_from(&self, from: Position) -> String {
        let start = self.position_to_char(from);
        self.rope.slice(start..).to_string()
    }

    /// Get complete text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Insert `text` at `from` as a single atomic edit.
    pub fn insert(&mut self, from: Position, text: &str) {
        let at = self.position_to_char(from);
        self.rope.insert(at, text);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
        assert_eq!(Position::new(1, 1), Position::new(1, 1));
    }

    #[test]
    fn test_line_text() {
        let doc = Document::from_text("Line 1\nLine 2\nLine 3");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_text(0).as_deref(), Some("Line 1"));
        assert_eq!(doc.line_text(2).as_deref(), Some("Line 3"));
        assert_eq!(doc.line_text(3), None);
    }

    #[test]
    fn test_text_from_mid_line() {
        let doc = Document::from_text("abc\ndef\nghi");
        assert_eq!(doc.text_from(Position::new(1, 1)), "ef\nghi");
        assert_eq!(doc.text_from(Position::new(0, 0)), "abc\ndef\nghi");
        assert_eq!(doc.text_from(Position::new(2, 3)), "");
    }

    #[test]
    fn test_text_from_clamps_out_of_range() {
        let doc = Document::from_text("abc\ndef");
        assert_eq!(doc.text_from(Position::new(9, 0)), "");
        assert_eq!(doc.text_from(Position::new(0, 99)), "\ndef");
    }

    #[test]
    fn test_insert_splits_line() {
        let mut doc = Document::from_text("/* here is text\n */");
        doc.insert(Position::new(0, 15), "\n * ");
        assert_eq!(doc.text(), "/* here is text\n * \n */");
    }

    #[test]
    fn test_insert_at_end_of_document() {
        let mut doc = Document::from_text("/*");
        doc.insert(Position::new(0, 2), "\n * \n */");
        assert_eq!(doc.text(), "/*\n * \n */");
    }

    #[test]
    fn test_utf8_columns_are_chars() {
        let doc = Document::from_text("你好 world\nnext");
        assert_eq!(doc.text_from(Position::new(0, 2)), " world\nnext");
    }
}
