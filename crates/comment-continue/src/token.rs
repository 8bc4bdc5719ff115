//! Token data model and the classifier contract.
//!
//! The kernel performs no tokenization of its own: the host's syntax engine
//! tells it what lexical run the caret sits in, and the kernel trusts that
//! classification as ground truth.

use crate::document::{Document, Position};

/// Lexical classification of the run under the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The run is part of a comment.
    Comment,
    /// Anything else (code, strings, whitespace, no token at all).
    Other,
}

/// The lexical run the caret currently sits in or immediately follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Classification of the run.
    pub kind: TokenKind,
    /// Literal source text of the run.
    pub text: String,
    /// Position immediately after the run in the document.
    pub end: Position,
}

/// Host-provided tokenizer contract.
///
/// `classify` must return the run whose text ends at or after `position`
/// on the caret's line, with `Token.text` being its literal source text and
/// `Token.end` the position immediately after it. A position that sits in no
/// run (for example column 0) is reported as an empty [`TokenKind::Other`]
/// token.
pub trait TokenClassifier {
    /// Classify the lexical run at `position`.
    fn classify(&self, doc: &Document, position: Position) -> Token;
}
