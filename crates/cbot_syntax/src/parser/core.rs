// Cursor core type.
//
// This chunk defines `TokenCursor`, the movable position every other chunk operates on.
// It is `include!`'d into `crate::parser` to keep all cursor methods in a single module
// while avoiding a single “god file”.

/// Forward-only position in a [`crate::tokens::TokenStream`].
///
/// ## Notes
/// - The cursor is `Copy`: saving a position is `let saved = cursor;`, restoring it is
///   `cursor = saved;`. Classifiers do *not* restore on their own.
/// - The backing slice always ends with a [`TokenKind::Eof`] sentinel and the cursor never
///   moves past it, so `peek()` is always valid.
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Create a cursor at the start of `tokens`.
    ///
    /// `tokens` must end with the sentinel; [`crate::tokens::TokenStream`] guarantees that.
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token slice must end with the Eof sentinel"
        );
        Self { tokens, pos: 0 }
    }

    /// Copy of this cursor moved to `pos` (clamped to the sentinel).
    pub(crate) fn at(&self, pos: usize) -> Self {
        Self {
            tokens: self.tokens,
            pos: pos.min(self.tokens.len() - 1),
        }
    }
}

impl PartialEq for TokenCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tokens, other.tokens) && self.pos == other.pos
    }
}

impl Eq for TokenCursor<'_> {}
