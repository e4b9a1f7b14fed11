#![forbid(unsafe_code)]
//! CBot declaration front-end
//!
//! This crate bundles the CBot syntax front-end crates behind one library and ships the `cbot`
//! command-line tool, which outlines token dumps: it lists the classes and functions a program
//! declares, reports structural diagnostics, and shows what the lookahead classifiers see.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Registry lookups of their own IDs use `.expect("... info missing")`; a miss is a
//!   registry bug, and the guardrail tests pin them down.

pub mod cli;

pub use cbot_core::lang;
pub use cbot_syntax::{diagnostics, dump, outline, parser, tokens};

pub use cbot_syntax::diagnostics::{DiagnosticPolicy, ErrorContext, ParseDiagnostic};
pub use cbot_syntax::outline::{Outline, OutlineConfig};
pub use cbot_syntax::parser::TokenCursor;
pub use cbot_syntax::tokens::{Token, TokenKind, TokenStream};
