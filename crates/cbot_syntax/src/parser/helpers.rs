/// Token-stream navigation helpers.
///
/// This chunk contains the low-level primitives used by every other chunk:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Position bookkeeping (`position`, `prev_token`, `tokens_between`)
/// - Non-destructive probing (`lookahead`)
impl<'a> TokenCursor<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    pub fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    pub fn peek(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    /// Kind of the current token; `Eof` at the sentinel.
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Return the most recently consumed token, if any.
    pub fn prev_token(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).map(|i| &self.tokens[i])
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// At end-of-stream this is a no-op that returns the sentinel.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Index of the current token in the stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Return `true` if the current token has kind `kind`.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Tokens in `start..end` (clamped to the stream).
    pub fn tokens_between(&self, start: usize, end: usize) -> &'a [Token] {
        let end = end.min(self.tokens.len());
        &self.tokens[start.min(end)..end]
    }

    /// Run `probe` on a copy of this cursor and return its verdict.
    ///
    /// The caller's cursor never moves, which turns any classifier into a pure predicate.
    pub fn lookahead(&self, probe: impl FnOnce(&mut TokenCursor<'a>) -> bool) -> bool {
        let mut copy = *self;
        probe(&mut copy)
    }
}
