//! Token types consumed by the CBot front-end.
//!
//! Tokens are produced by an external lexer (or read back from a dump, see [`crate::dump`])
//! and are immutable once a [`TokenStream`] owns them. The stream is an arena: cursors hold an
//! index into it, never a reference to an individual token.
//!
//! ## Notes
//! - Keyword/operator/punctuation tokens carry stable IDs from `cbot_core::lang`.
//! - [`TokenKind`] is a plain `Copy` tag. The spelling of identifiers and literals lives in
//!   [`Token::text`], so matching on kind never has to look at payloads.

use cbot_core::lang::keywords::{self, KeywordId};
use cbot_core::lang::operators::{self, OperatorId};
use cbot_core::lang::punctuation::{self, PunctuationId};

use crate::parser::TokenCursor;

/// Byte range of a token in the text it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of a token.
///
/// ## Notes
/// - `Ident` covers every name, including primitive type names such as `int` or `void`.
/// - `Eof` is the end-of-stream sentinel. Every [`TokenStream`] ends with exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Names and literals ==========
    Ident,
    Number,
    String,

    // ========== Special ==========
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "`{}`", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "`{}`", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "`{}`", punctuation::as_str(*id)),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Eof => write!(f, "end of program"),
        }
    }
}

/// A token with its kind, spelling and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Construct the end-of-stream sentinel at byte `offset`.
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::new(offset, offset))
    }

    /// Human-facing description used in diagnostics (`` `foo` `` or `end of program`).
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of program".to_string(),
            _ => format!("`{}`", self.text),
        }
    }
}

// ============================================================================
// TOKEN STREAM
// ============================================================================

/// Owned, immutable token sequence for one compilation unit.
///
/// ## Notes
/// - Construction normalizes the tail: anything after the first [`TokenKind::Eof`] is dropped,
///   and a sentinel is appended when the input has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        match tokens.iter().position(|t| t.kind == TokenKind::Eof) {
            Some(eof) => tokens.truncate(eof + 1),
            None => {
                let end = tokens.last().map_or(0, |t| t.span.end);
                tokens.push(Token::eof(end));
            }
        }
        Self { tokens }
    }

    /// Cursor positioned at the first token.
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor::new(&self.tokens)
    }

    /// All tokens, sentinel included.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Number of tokens, sentinel included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` when the stream holds nothing but the sentinel.
    pub fn is_empty(&self) -> bool {
        self.tokens.len() == 1
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
