//! `comment-continue-classify` - Simple (scan-based) token classification for
//! `comment-continue`.
//!
//! This crate is intended for hosts that have no real syntax engine wired up:
//! it implements the kernel's [`TokenClassifier`] contract with a plain
//! delimiter state machine over `/*` / `*/`. It is *not* a parser; string
//! literals containing delimiter-like substrings will fool it, which matches
//! the heuristic the kernel itself uses for the closure scan.
//!
//! # Quick Start
//!
//! ```rust
//! use comment_continue::{Editor, Position, handle_continuation};
//! use comment_continue_classify::LineTokenizer;
//!
//! let mut editor = Editor::new("    /*\n     */");
//! editor.set_cursor(Position::new(0, 6));
//!
//! let result = handle_continuation(&mut editor, &LineTokenizer::new());
//! assert!(result.is_handled());
//! assert_eq!(editor.text(), "    /*\n     * \n     */");
//! ```

use comment_continue::{BLOCK_CLOSE, BLOCK_OPEN, Document, Position, Token, TokenClassifier, TokenKind};

/// A maximal same-kind run of characters on a single line, in char columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    start: usize,
    end: usize,
    kind: TokenKind,
}

/// A line-scoped tokenizer for `/* ... */` block comments.
///
/// Tokens are runs on the caret's line, the way per-line host tokenizers
/// report them: a comment spanning several lines yields one comment run per
/// line. Whether the caret line *starts* inside a comment is decided by a
/// linear delimiter scan of the preceding lines.
#[derive(Debug, Clone, Default)]
pub struct LineTokenizer;

impl LineTokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl TokenClassifier for LineTokenizer {
    /// Classify the run whose text ends at or after `position` on its line.
    ///
    /// A position sitting in no run (column 0, or an empty line) yields an
    /// empty [`TokenKind::Other`] token, which the kernel treats as
    /// "not ours".
    fn classify(&self, doc: &Document, position: Position) -> Token {
        let no_token = Token {
            kind: TokenKind::Other,
            text: String::new(),
            end: position,
        };

        let Some(line_text) = doc.line_text(position.line) else {
            return no_token;
        };

        let mut in_comment = false;
        for line in 0..position.line {
            if let Some(text) = doc.line_text(line) {
                in_comment = scan_line(in_comment, &text);
            }
        }

        let column = position.column.min(line_text.chars().count());
        let runs = line_runs(in_comment, &line_text);
        let Some(run) = runs.iter().find(|r| r.start < column && column <= r.end) else {
            return no_token;
        };

        Token {
            kind: run.kind,
            text: char_slice(&line_text, run.start, run.end),
            end: Position::new(position.line, run.end),
        }
    }
}

/// Advance the open-comment state across one line of text.
fn scan_line(mut in_comment: bool, text: &str) -> bool {
    let mut rest = text;
    loop {
        let needle = if in_comment { BLOCK_CLOSE } else { BLOCK_OPEN };
        match rest.find(needle) {
            Some(at) => {
                in_comment = !in_comment;
                rest = &rest[at + needle.len()..];
            }
            None => return in_comment,
        }
    }
}

/// Split one line into alternating comment/other runs.
///
/// A comment run ends just after its `*/`; an other run ends just before the
/// next `/*`.
fn line_runs(mut in_comment: bool, text: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut col = 0usize;
    let mut run_start = 0usize;
    let mut rest = text;

    loop {
        let needle = if in_comment { BLOCK_CLOSE } else { BLOCK_OPEN };
        let Some(at) = rest.find(needle) else { break };

        let consumed = at + needle.len();
        col += rest[..consumed].chars().count();

        if in_comment {
            runs.push(Run {
                start: run_start,
                end: col,
                kind: TokenKind::Comment,
            });
            run_start = col;
        } else {
            // The needle here is "/*", two ASCII chars.
            let open_col = col - 2;
            if open_col > run_start {
                runs.push(Run {
                    start: run_start,
                    end: open_col,
                    kind: TokenKind::Other,
                });
            }
            run_start = open_col;
        }

        in_comment = !in_comment;
        rest = &rest[consumed..];
    }

    let total = col + rest.chars().count();
    if total > run_start {
        runs.push(Run {
            start: run_start,
            end: total,
            kind: if in_comment {
                TokenKind::Comment
            } else {
                TokenKind::Other
            },
        });
    }

    runs
}

fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_line_state() {
        assert!(scan_line(false, "/* open"));
        assert!(!scan_line(false, "/* open */ closed"));
        assert!(!scan_line(true, "still */ done"));
        assert!(scan_line(true, "still inside"));
        assert!(scan_line(false, "/* a */ then /* b"));
    }

    #[test]
    fn test_runs_on_mixed_line() {
        let runs = line_runs(false, "foo(); /* bar */ baz");
        assert_eq!(
            runs,
            vec![
                Run { start: 0, end: 7, kind: TokenKind::Other },
                Run { start: 7, end: 16, kind: TokenKind::Comment },
                Run { start: 16, end: 20, kind: TokenKind::Other },
            ]
        );
    }

    #[test]
    fn test_runs_inside_open_comment() {
        let runs = line_runs(true, " * body");
        assert_eq!(
            runs,
            vec![Run { start: 0, end: 7, kind: TokenKind::Comment }]
        );
    }

    #[test]
    fn test_runs_closing_line() {
        let runs = line_runs(true, "*/ code();");
        assert_eq!(
            runs,
            vec![
                Run { start: 0, end: 2, kind: TokenKind::Comment },
                Run { start: 2, end: 10, kind: TokenKind::Other },
            ]
        );
    }

    #[test]
    fn test_classify_comment_opener() {
        let doc = Document::from_text("/* here is text\n */");
        let token = LineTokenizer::new().classify(&doc, Position::new(0, 15));
        assert_eq!(token.kind, TokenKind::Comment);
        assert_eq!(token.text, "/* here is text");
        assert_eq!(token.end, Position::new(0, 15));
    }

    #[test]
    fn test_classify_interior_line_uses_preceding_state() {
        let doc = Document::from_text("/*\nfoo();\n*/");
        let token = LineTokenizer::new().classify(&doc, Position::new(1, 6));
        assert_eq!(token.kind, TokenKind::Comment);
        assert_eq!(token.text, "foo();");
    }

    #[test]
    fn test_classify_column_zero_is_no_token() {
        let doc = Document::from_text("/*\nfoo();\n*/");
        let token = LineTokenizer::new().classify(&doc, Position::new(1, 0));
        assert_eq!(token.kind, TokenKind::Other);
        assert_eq!(token.text, "");
    }

    #[test]
    fn test_classify_code_before_trailing_comment() {
        let doc = Document::from_text("foo(); /* bar */");
        let token = LineTokenizer::new().classify(&doc, Position::new(0, 6));
        assert_eq!(token.kind, TokenKind::Other);
        assert_eq!(token.text, "foo(); ");
    }

    #[test]
    fn test_classify_just_after_closer() {
        let doc = Document::from_text("/*\n * foo\n */\nbar();");
        let token = LineTokenizer::new().classify(&doc, Position::new(2, 3));
        assert_eq!(token.kind, TokenKind::Comment);
        assert_eq!(token.text, " */");
        assert_eq!(token.end, Position::new(2, 3));
    }
}
