//! Reader for whitespace-delimited token dumps.
//!
//! A dump is what a CBot lexer hands over, written out one token per word:
//!
//! ```text
//! # comment lines start with '#'
//! public class Robot extends Bot {
//!     int speed = 3 ;
//! }
//! ```
//!
//! Every word is one token. Registry spellings (keywords, punctuation, operators) map to their
//! IDs, words starting with a digit are numbers, `"..."` words are strings and everything else
//! is an identifier. Spans are byte offsets into the dump text, so diagnostics can be rendered
//! against it directly.
//!
//! ## Notes
//! - This is not the CBot lexer: no character-level rules apply, `{x}` is a single identifier.
//! - Strings cannot contain whitespace.

use cbot_core::lang::{keywords, operators, punctuation};

use crate::tokens::{Span, Token, TokenKind, TokenStream};

/// Errors produced while reading a dump.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DumpError {
    #[error("unterminated string token `{word}` at byte {offset}")]
    UnterminatedString { word: String, offset: usize },
}

impl miette::Diagnostic for DumpError {
    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        match self {
            DumpError::UnterminatedString { word, offset } => Some(Box::new(std::iter::once(
                miette::LabeledSpan::at(*offset..*offset + word.len(), "missing closing quote"),
            ))),
        }
    }
}

/// Read a token dump into a [`TokenStream`].
///
/// ## Errors
/// Returns [`DumpError::UnterminatedString`] for a word that opens a string without closing it.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn read(source: &str) -> Result<TokenStream, DumpError> {
    let mut tokens = Vec::new();

    for line in source.lines() {
        for word in line.split_whitespace() {
            if word.starts_with('#') {
                break;
            }
            let start = offset_in(source, word);
            let kind = classify_word(word).ok_or_else(|| DumpError::UnterminatedString {
                word: word.to_string(),
                offset: start,
            })?;
            tokens.push(Token::new(kind, word, Span::new(start, start + word.len())));
        }
    }

    tracing::debug!(token_count = tokens.len(), "read token dump");
    tokens.push(Token::eof(source.len()));
    Ok(TokenStream::new(tokens))
}

/// Kind of a single dump word, or `None` for an unterminated string.
pub fn classify_word(word: &str) -> Option<TokenKind> {
    if let Some(id) = keywords::from_str(word) {
        return Some(TokenKind::Keyword(id));
    }
    if let Some(id) = punctuation::from_str(word) {
        return Some(TokenKind::Punctuation(id));
    }
    if let Some(id) = operators::from_str(word) {
        return Some(TokenKind::Operator(id));
    }
    if word.starts_with('"') {
        return (word.len() >= 2 && word.ends_with('"')).then_some(TokenKind::String);
    }
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        return Some(TokenKind::Number);
    }
    Some(TokenKind::Ident)
}

/// Byte offset of `word` inside `source`; `word` must be a subslice of `source`.
fn offset_in(source: &str, word: &str) -> usize {
    word.as_ptr() as usize - source.as_ptr() as usize
}
