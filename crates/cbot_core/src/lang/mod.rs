//! CBot language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords,
//! punctuation, operators and diagnostic codes.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The parser helpers enforce syntax; registries provide spellings and metadata for shared use
//!   (diagnostics, token dumps, tooling).
//!
//! ## Examples
//! ```rust
//! use cbot_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("class"), Some(KeywordId::Class));
//! assert_eq!(keywords::as_str(KeywordId::Class), "class");
//! ```

pub mod errors;
pub mod keywords;
pub mod operators;
pub mod punctuation;
