/// Token-kind matchers.
///
/// Single-token lookahead-with-commit (`is_of_type`) and the skip-while-in-set automaton
/// (`skip_tokens`) every classifier is built from. None of these report diagnostics.
impl<'a> TokenCursor<'a> {
    // ========================================================================
    // Matchers
    // ========================================================================

    /// If the current token has kind `kind`, consume it and return `true`.
    ///
    /// On a mismatch the cursor is left where it was.
    pub fn is_of_type(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip every token whose kind occurs in `kinds`, returning how many were skipped.
    ///
    /// ## Notes
    /// - Driven by a [`SkipSchedule`]: each step tries the next kind in the list and a match
    ///   restarts from the first one. It stops once the whole list misses at the current
    ///   token, or at end-of-stream.
    pub fn skip_tokens(&mut self, kinds: &[TokenKind]) -> usize {
        let start = self.pos;
        let mut schedule = SkipSchedule::new(kinds);
        while schedule.step(self) != SkipStep::Done {}
        self.pos - start
    }

    /// Skip any run of declaration modifiers (`public`, `protected`, `private`, `extern`,
    /// `synchronized`, `static`), in any order and with repetition.
    pub fn skip_all_modifiers(&mut self) -> usize {
        self.skip_tokens(&MODIFIER_KINDS)
    }
}

/// Modifier keywords, in the order [`TokenCursor::skip_all_modifiers`] tries them.
pub const MODIFIER_KINDS: [TokenKind; 6] = [
    TokenKind::Keyword(KeywordId::Public),
    TokenKind::Keyword(KeywordId::Protected),
    TokenKind::Keyword(KeywordId::Private),
    TokenKind::Keyword(KeywordId::Extern),
    TokenKind::Keyword(KeywordId::Synchronized),
    TokenKind::Keyword(KeywordId::Static),
];

/// A return type or scope qualifier run: `void Robot :: move`.
pub const TYPE_PATH_KINDS: [TokenKind; 2] = [TokenKind::Ident, TokenKind::Punctuation(PunctuationId::ColonColon)];

/// A loose parameter run: `int a , float b`.
pub const PARAM_LIST_KINDS: [TokenKind; 2] = [TokenKind::Ident, TokenKind::Punctuation(PunctuationId::Comma)];

/// Result of one [`SkipSchedule::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipStep {
    /// The scheduled kind matched and was consumed; the schedule restarts at index 0.
    Matched,
    /// The scheduled kind did not match; the schedule moves to the next index.
    Missed,
    /// Every kind missed at the current token, or the stream ended.
    Done,
}

/// State machine behind [`TokenCursor::skip_tokens`].
///
/// The only state is the index of the kind to try next. A match resets it to 0, a miss bumps
/// it, and reaching the end of the list terminates the skip.
#[derive(Debug, Clone)]
pub struct SkipSchedule<'k> {
    kinds: &'k [TokenKind],
    next: usize,
}

impl<'k> SkipSchedule<'k> {
    /// Start a schedule that expects `kinds[0]` next.
    pub fn new(kinds: &'k [TokenKind]) -> Self {
        Self { kinds, next: 0 }
    }

    /// Index into the kind list that the next step will try.
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// `true` once every kind has been tried.
    pub fn is_done(&self) -> bool {
        self.next >= self.kinds.len()
    }

    /// Try the scheduled kind against the current token.
    pub fn step(&mut self, cursor: &mut TokenCursor<'_>) -> SkipStep {
        // The sentinel never matches a skippable kind, and must never be consumed.
        if self.is_done() || cursor.is_at_end() {
            self.next = self.kinds.len();
            return SkipStep::Done;
        }
        if cursor.is_of_type(self.kinds[self.next]) {
            self.next = 0;
            SkipStep::Matched
        } else {
            self.next += 1;
            SkipStep::Missed
        }
    }
}
