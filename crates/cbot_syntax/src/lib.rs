//! Shared syntax front-end for CBot: token stream, lookahead classification, block recovery
//! and diagnostics.
//!
//! This crate is dependency-light and sits between the CBot lexer and the grammar builder. It
//! never builds AST nodes: it decides *what* starts at a position, validates or skips `{ }`
//! blocks, and records structural diagnostics.
//!
//! ## Notes
//! - Vocabulary identity (keywords/operators/punctuation/error codes) comes from
//!   `cbot_core::lang` registries.
//! - A [`parser::TokenCursor`] is a `Copy` index into a [`tokens::TokenStream`]; classifiers
//!   advance it, so callers that only want to *probe* use [`parser::TokenCursor::lookahead`].
//!
//! ## Examples
//! ```rust
//! use cbot_syntax::{dump, outline};
//!
//! let tokens = dump::read("public class Robot { }  void main ( ) { Robot ( ) ; }").unwrap();
//! let result = outline::outline(&tokens, &outline::OutlineConfig::default());
//! assert!(result.is_ok());
//! assert_eq!(result.items.len(), 2);
//! ```

pub mod diagnostics;
pub mod dump;
pub mod outline;
pub mod parser;
pub mod token_helpers;
pub mod tokens;
