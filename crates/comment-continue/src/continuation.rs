//! The continuation planner and the editor-level entry point.
//!
//! This is where the one-shot decision is made: combine the host's token
//! classification, the caret line's prefix shape, and (for opening lines)
//! the forward closure scan into either "not handled" or a single precise
//! edit plus the resulting caret position.

use crate::document::{Document, Position};
use crate::prefix::{PrefixShape, resolve_prefix};
use crate::scan::{BLOCK_CLOSE, is_unclosed};
use crate::token::{Token, TokenClassifier, TokenKind};

/// The edit a handled continuation applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationPlan {
    /// Text to insert at the original caret position.
    pub inserted_text: String,
    /// Caret position after the insertion.
    pub caret: Position,
}

/// Outcome of a continuation attempt.
///
/// An explicit tagged result rather than a bare boolean, so "handled with an
/// empty-looking edit" can never be confused with "not handled".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    /// The key press is not ours; the host applies its default line break.
    NotHandled,
    /// The key press was consumed; this edit was applied.
    Handled(ContinuationPlan),
}

impl Continuation {
    /// Returns `true` when a plan was produced and applied.
    pub fn is_handled(&self) -> bool {
        matches!(self, Continuation::Handled(_))
    }
}

/// Compute the continuation plan for a line break at `caret`, or `None` when
/// the situation is not continuable.
///
/// The decision sequence:
///
/// 1. The token under the caret must be classified as a comment.
/// 2. The caret line must match one of the two continuable shapes.
/// 3. If the token text already ends with `*/`, the caret must sit strictly
///    before the token's end. Splitting mid-comment inside a fully formed
///    `/* ... */` still works; pressing the key just after `*/` does nothing.
/// 4. On an opening line, the closure scan decides whether to also
///    synthesize the missing closing line.
pub fn plan(doc: &Document, caret: Position, token: &Token) -> Option<ContinuationPlan> {
    if token.kind != TokenKind::Comment {
        return None;
    }

    let line = doc.line_text(caret.line)?;
    let prefix = resolve_prefix(&line)?;

    if token.text.ends_with(BLOCK_CLOSE) && caret >= token.end {
        return None;
    }

    let reused = prefix.reusable();
    let inserted_text = match prefix.shape() {
        PrefixShape::Opening if is_unclosed(doc, caret) => {
            // Continuation line plus a synthesized closing line; the reused
            // whitespace keeps the closer's asterisk column aligned.
            format!("\n{reused} \n{reused}/")
        }
        _ => format!("\n{reused} "),
    };

    Some(ContinuationPlan {
        inserted_text,
        caret: Position::new(caret.line + 1, prefix.char_len() + 1),
    })
}

/// The editor handle the kernel mutates: a document plus a caret.
pub struct Editor {
    document: Document,
    cursor: Position,
}

impl Editor {
    /// Create an editor over `text` with the caret at the origin.
    pub fn new(text: &str) -> Self {
        Self {
            document: Document::from_text(text),
            cursor: Position::new(0, 0),
        }
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get complete text.
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// Get caret position.
    pub fn cursor_position(&self) -> Position {
        self.cursor
    }

    /// Move the caret, clamping to the document.
    pub fn set_cursor(&mut self, position: Position) {
        let line = position
            .line
            .min(self.document.line_count().saturating_sub(1));
        let column = match self.document.line_text(line) {
            Some(text) => position.column.min(text.chars().count()),
            None => 0,
        };
        self.cursor = Position::new(line, column);
    }
}

/// Handle a line-break key press at the editor's caret.
///
/// On [`Continuation::Handled`] the inserted text and the caret move have
/// both been applied as one operation; on [`Continuation::NotHandled`] the
/// editor is left byte-identical to its input state.
pub fn handle_continuation(
    editor: &mut Editor,
    classifier: &impl TokenClassifier,
) -> Continuation {
    let caret = editor.cursor_position();
    let token = classifier.classify(&editor.document, caret);

    match plan(&editor.document, caret, &token) {
        Some(plan) => {
            editor.document.insert(caret, &plan.inserted_text);
            editor.cursor = plan.caret;
            Continuation::Handled(plan)
        }
        None => Continuation::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_token(text: &str, end: Position) -> Token {
        Token {
            kind: TokenKind::Comment,
            text: text.to_string(),
            end,
        }
    }

    #[test]
    fn test_plan_rejects_non_comment_token() {
        let doc = Document::from_text("/*\n */");
        let token = Token {
            kind: TokenKind::Other,
            text: "/*".to_string(),
            end: Position::new(0, 2),
        };
        assert_eq!(plan(&doc, Position::new(0, 2), &token), None);
    }

    #[test]
    fn test_plan_rejects_unrecognizable_line() {
        // Comment token, but the physical line has no continuable prefix
        // (caret inside commented-out code).
        let doc = Document::from_text("/*\nfoo();\n*/");
        let token = comment_token("foo();", Position::new(1, 6));
        assert_eq!(plan(&doc, Position::new(1, 6), &token), None);
    }

    #[test]
    fn test_plan_rejects_caret_at_end_of_closed_token() {
        let doc = Document::from_text("/*\n * foo\n */\nbar();");
        let token = comment_token(" */", Position::new(2, 3));
        assert_eq!(plan(&doc, Position::new(2, 3), &token), None);
    }

    #[test]
    fn test_plan_splits_before_closer_of_closed_token() {
        let doc = Document::from_text("/**/");
        let token = comment_token("/**/", Position::new(0, 4));
        let plan = plan(&doc, Position::new(0, 2), &token).unwrap();
        assert_eq!(plan.inserted_text, "\n * ");
        assert_eq!(plan.caret, Position::new(1, 3));
    }

    #[test]
    fn test_plan_synthesizes_closer_when_unclosed() {
        let doc = Document::from_text("    /*");
        let token = comment_token("/*", Position::new(0, 6));
        let plan = plan(&doc, Position::new(0, 6), &token).unwrap();
        assert_eq!(plan.inserted_text, "\n     * \n     */");
        assert_eq!(plan.caret, Position::new(1, 7));
    }

    #[test]
    fn test_continuation_line_never_scans_for_closure() {
        // Continuation shape always inserts a single line, even with no
        // closer anywhere ahead.
        let doc = Document::from_text("/*\n * text");
        let token = comment_token(" * text", Position::new(1, 7));
        let plan = plan(&doc, Position::new(1, 7), &token).unwrap();
        assert_eq!(plan.inserted_text, "\n * ");
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut editor = Editor::new("ab\ncd");
        editor.set_cursor(Position::new(7, 9));
        assert_eq!(editor.cursor_position(), Position::new(1, 2));
        editor.set_cursor(Position::new(0, 99));
        assert_eq!(editor.cursor_position(), Position::new(0, 2));
    }
}
