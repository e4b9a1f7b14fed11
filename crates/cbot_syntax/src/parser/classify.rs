/// Lookahead classifiers.
///
/// Decide which declaration production starts at the cursor. They never report diagnostics
/// and they are heuristics, not a backtracking parser: a `false` answer may leave the cursor
/// partway through the probed tokens. Use [`TokenCursor::lookahead`] to probe without moving.
impl<'a> TokenCursor<'a> {
    // ========================================================================
    // Classifiers
    // ========================================================================

    /// `[modifiers] class`
    ///
    /// On success the cursor is just past `class`. Skipped modifiers stay skipped either way.
    pub fn is_class(&mut self) -> bool {
        self.skip_all_modifiers();
        self.is_of_type(TokenKind::Keyword(KeywordId::Class))
    }

    /// `[modifiers] [type/scope run] ( [param run] ) {`
    ///
    /// On success the cursor is just past the opening brace of the body.
    pub fn is_function_definition(&mut self) -> bool {
        self.skip_all_modifiers();
        self.skip_tokens(&TYPE_PATH_KINDS);

        if !self.is_of_type(TokenKind::Punctuation(PunctuationId::LParen)) {
            return false;
        }

        self.skip_tokens(&PARAM_LIST_KINDS);

        self.is_of_type(TokenKind::Punctuation(PunctuationId::RParen))
            && self.is_of_type(TokenKind::Punctuation(PunctuationId::LBrace))
    }

    /// `name (`
    ///
    /// Consumes both tokens on success and nothing on failure.
    pub fn is_function_call(&mut self) -> bool {
        let saved = *self;
        if self.is_of_type(TokenKind::Ident) && self.is_of_type(TokenKind::Punctuation(PunctuationId::LParen)) {
            true
        } else {
            *self = saved;
            false
        }
    }
}
