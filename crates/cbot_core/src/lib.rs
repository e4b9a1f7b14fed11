//! Canonical language vocabulary for the CBot front-end.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that the
//! token stream, the parser helpers and the tooling all agree on: reserved keywords,
//! punctuation, operators and the stable diagnostic codes.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, no parser types.
//! - Callers work with stable ids (`KeywordId`, `PunctuationId`, ...) and look up spellings and
//!   metadata through the registry tables.

pub mod lang;
