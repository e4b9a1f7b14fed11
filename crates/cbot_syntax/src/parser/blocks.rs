/// Required tokens, block validation and recovery skipping.
///
/// `require_type` and `validate_block` report into an [`ErrorContext`]. The skip helpers only
/// move the cursor; they always make forward progress and always stop at the sentinel.
impl<'a> TokenCursor<'a> {
    // ========================================================================
    // Required tokens / blocks
    // ========================================================================

    /// Require a token of kind `kind`.
    ///
    /// ## Returns
    /// - `false` when the token matched (and was consumed).
    /// - `true` when it did not: `code` is recorded in `ctx` at the current token, which is
    ///   left unconsumed. The return value answers “did an error occur?”.
    pub fn require_type(&mut self, kind: TokenKind, code: ErrorCode, ctx: &mut ErrorContext) -> bool {
        if self.is_of_type(kind) {
            false
        } else {
            ctx.set_error(code, self);
            true
        }
    }

    /// Require `{`, then skip to its matching `}`.
    ///
    /// ## Returns
    /// - `true` when the block is present and balanced; the cursor is just past its `}`.
    /// - `false` with [`ErrorCode::OpenBlock`] at the current token when `{` is missing.
    /// - `false` with [`ErrorCode::CloseBlock`] at the *opening* brace when the stream ends
    ///   before the block closes.
    pub fn validate_block(&mut self, ctx: &mut ErrorContext) -> bool {
        let open_block = *self;

        if self.require_type(TokenKind::Punctuation(PunctuationId::LBrace), ErrorCode::OpenBlock, ctx) {
            return false;
        }

        if !self.try_skip_to_exit_block() {
            ctx.set_error(ErrorCode::CloseBlock, &open_block);
            return false;
        }
        true
    }

    /// Skip to just past the `}` closing the block the cursor is inside.
    ///
    /// The cursor must already be past the opening `{` (depth starts at 1). Returns `true`
    /// when the depth reached zero, `false` when the stream ended first (the cursor is then at
    /// the sentinel).
    pub fn try_skip_to_exit_block(&mut self) -> bool {
        let mut level = 1usize;
        while level > 0 && !self.is_at_end() {
            let kind = self.peek_kind();
            if kind.opens_block() {
                level += 1;
            }
            if kind.closes_block() {
                level -= 1;
            }
            self.advance();
        }

        if level > 0 {
            tracing::trace!(unclosed = level, "stream ended inside a block");
        }
        level == 0
    }

    /// Best-effort resynchronization after a class or function header failed to parse.
    ///
    /// Advances to the first `{`, steps past it and skips the whole block. When the stream has
    /// no further `{` the cursor stops at the sentinel. Whether the block balanced is not
    /// reported: there is nothing more specific to say at this point.
    pub fn skip_class_or_function(&mut self) {
        let from = self.pos;
        while !self.is_at_end() && !self.peek_kind().opens_block() {
            self.advance();
        }

        if self.is_at_end() {
            tracing::debug!(from, "no block to skip before end of program");
            return;
        }

        self.advance(); // skip '{'
        let balanced = self.try_skip_to_exit_block();
        tracing::debug!(from, to = self.pos, balanced, "skipped class or function");
    }
}
