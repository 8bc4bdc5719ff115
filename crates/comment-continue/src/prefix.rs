//! Leading-text analysis of the caret line.
//!
//! A line is continuable when its leading text is either a continuation line
//! (`{whitespace}*`) or an opening line (`{whitespace}/*`). The match is a
//! plain structural scan over the leading characters; only the physical text
//! of the line matters, never the token classification.

/// Which of the two recognizable line shapes matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixShape {
    /// `{whitespace}*` - a line continuing an already-open comment.
    Continuation,
    /// `{whitespace}/*` - the line carrying the comment opener.
    Opening,
}

/// The matched leading prefix of a continuable line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePrefix {
    shape: PrefixShape,
    text: String,
}

impl LinePrefix {
    /// Which shape matched.
    pub fn shape(&self) -> PrefixShape {
        self.shape
    }

    /// The literal matched prefix (leading whitespace plus marker).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The prefix to reproduce on the next line.
    ///
    /// A continuation prefix is reused as-is. An opening prefix has its `/`
    /// replaced by a single space so the asterisk column stays aligned
    /// without re-emitting a second comment opener (`"  /*"` -> `"   *"`).
    pub fn reusable(&self) -> String {
        match self.shape {
            PrefixShape::Continuation => self.text.clone(),
            PrefixShape::Opening => self.text.replacen('/', " ", 1),
        }
    }

    /// Character length of the reusable prefix.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Match a line's leading text against the two continuable shapes.
///
/// Tries `{whitespace}*` first, then `{whitespace}/*`. Returns `None` when
/// neither matches, which makes the whole continuation a no-op.
pub fn resolve_prefix(line_text: &str) -> Option<LinePrefix> {
    let ws_len = line_text
        .char_indices()
        .find(|(_, ch)| !ch.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(line_text.len());
    let (ws, rest) = line_text.split_at(ws_len);

    if rest.starts_with('*') {
        return Some(LinePrefix {
            shape: PrefixShape::Continuation,
            text: format!("{ws}*"),
        });
    }
    if rest.starts_with("/*") {
        return Some(LinePrefix {
            shape: PrefixShape::Opening,
            text: format!("{ws}/*"),
        });
    }
    None
}
