//! Lookahead classification and block recovery for the CBot parser.
//!
//! The grammar builder holds a [`TokenCursor`] and an [`ErrorContext`]. It asks the
//! classifiers which production starts at the cursor, reads access modifiers for member
//! declarations, and uses the block helpers both to consume `{ ... }` bodies and to
//! resynchronize after a failed declaration.
//!
//! ## Examples
//!
//! ```rust
//! use cbot_syntax::{dump, parser::TokenCursor};
//!
//! let tokens = dump::read("public static void run ( int speed ) { }").unwrap();
//! let cursor = tokens.cursor();
//! assert!(!cursor.lookahead(TokenCursor::is_class));
//! assert!(cursor.lookahead(TokenCursor::is_function_definition));
//! ```

use crate::diagnostics::ErrorContext;
use crate::tokens::{Token, TokenKind};
use cbot_core::lang::errors::ErrorCode;
use cbot_core::lang::keywords::KeywordId;
use cbot_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all cursor
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/matchers.rs");
include!("parser/classify.rs");
include!("parser/access.rs");
include!("parser/blocks.rs");
include!("parser/tests.rs");
