#![warn(missing_docs)]
//! Comment Continue - Headless Block-Comment Continuation Kernel
//!
//! # Overview
//!
//! `comment-continue` decides what should happen when the line-break key is
//! pressed while the caret sits inside an open `/* ... */` block comment: it
//! inserts a new line continuing the comment with a correctly indented `*`
//! prefix, and, when the comment appears to have no matching closer anywhere
//! ahead in the document, also synthesizes the missing closing delimiter on a
//! following line.
//!
//! The crate is headless: it knows nothing about key events, focused editors,
//! or rendering. The host is expected to detect the line-break key, confirm
//! the active language uses exactly `/*` / `*/` as block-comment delimiters
//! (see the `comment-continue-lang` companion crate), call
//! [`handle_continuation`], and suppress its default line-break insertion when
//! the result is [`Continuation::Handled`].
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Editor Entry Point (handle_continuation)   │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Continuation Planner (decision + edit)     │  ← Produces the plan
//! ├─────────────────────────────────────────────┤
//! │  Prefix Resolver & Closure Scanner          │  ← Line/document analysis
//! ├─────────────────────────────────────────────┤
//! │  Token Contract (TokenClassifier trait)     │  ← Host-provided lexing
//! ├─────────────────────────────────────────────┤
//! │  Document (Rope-based)                      │  ← Line access & insertion
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use comment_continue::{
//!     Document, Editor, Position, Token, TokenClassifier, TokenKind, handle_continuation,
//! };
//!
//! // A stand-in for the host's real tokenizer.
//! struct CommentEverywhere;
//!
//! impl TokenClassifier for CommentEverywhere {
//!     fn classify(&self, _doc: &Document, position: Position) -> Token {
//!         Token {
//!             kind: TokenKind::Comment,
//!             text: "/*".to_string(),
//!             end: position,
//!         }
//!     }
//! }
//!
//! let mut editor = Editor::new("/*\n */");
//! editor.set_cursor(Position::new(0, 2));
//!
//! let result = handle_continuation(&mut editor, &CommentEverywhere);
//! assert!(result.is_handled());
//! assert_eq!(editor.text(), "/*\n * \n */");
//! assert_eq!(editor.cursor_position(), Position::new(1, 3));
//! ```
//!
//! # Module Description
//!
//! - [`document`] - Rope-based document with line access and atomic insertion
//! - [`token`] - Token data model and the [`TokenClassifier`] contract
//! - [`prefix`] - Leading-text analysis of the caret line
//! - [`scan`] - Forward closure scan (is the comment already closed ahead?)
//! - [`continuation`] - The planner and the editor-level entry point

pub mod continuation;
pub mod document;
pub mod prefix;
pub mod scan;
pub mod token;

pub use continuation::{Continuation, ContinuationPlan, Editor, handle_continuation, plan};
pub use document::{Document, Position};
pub use prefix::{LinePrefix, PrefixShape, resolve_prefix};
pub use scan::{BLOCK_CLOSE, BLOCK_OPEN, is_unclosed};
pub use token::{Token, TokenClassifier, TokenKind};
