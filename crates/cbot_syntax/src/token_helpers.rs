//! Kind predicates used by the cursor helpers.
//!
//! Block matching and modifier skipping only ever ask a handful of questions about a token, so
//! they live here instead of as `matches!(...)` at every call site.

use crate::tokens::{Token, TokenKind};
use cbot_core::lang::keywords::{self, KeywordId};
use cbot_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// The keyword this kind stands for, if it is one.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// `true` for the declaration modifiers (`public`, `static`, ...), per the keyword registry.
    pub fn is_modifier(&self) -> bool {
        self.keyword_id().is_some_and(keywords::is_modifier)
    }

    /// `true` for exactly the punctuation `id`.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// `{`
    pub fn opens_block(&self) -> bool {
        self.is_punctuation(PunctuationId::LBrace)
    }

    /// `}`
    pub fn closes_block(&self) -> bool {
        self.is_punctuation(PunctuationId::RBrace)
    }
}

impl Token {
    /// `true` for a name token.
    pub fn is_ident(&self) -> bool {
        self.kind == TokenKind::Ident
    }
}
