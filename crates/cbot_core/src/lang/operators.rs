//! Operator vocabulary.
//!
//! This module defines the canonical operator set. The declaration helpers only need to tell
//! operators apart from punctuation (an `=` ends a field declarator), so there is no precedence.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//!
//! ## Examples
//! ```rust
//! use cbot_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("&&"), Some(OperatorId::AndAnd));
//! assert_eq!(operators::as_str(OperatorId::PlusAssign), "+=");
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Assign,
    PlusAssign,
    MinusAssign,

    // Logic
    Question,
    OrOr,
    AndAnd,
    Not,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Increment / decrement
    PlusPlus,
    MinusMinus,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Assign, "="),
    op(OperatorId::PlusAssign, "+="),
    op(OperatorId::MinusAssign, "-="),
    op(OperatorId::Question, "?"),
    op(OperatorId::OrOr, "||"),
    op(OperatorId::AndAnd, "&&"),
    op(OperatorId::EqEq, "=="),
    op(OperatorId::NotEq, "!="),
    op(OperatorId::Lt, "<"),
    op(OperatorId::LtEq, "<="),
    op(OperatorId::Gt, ">"),
    op(OperatorId::GtEq, ">="),
    op(OperatorId::Plus, "+"),
    op(OperatorId::Minus, "-"),
    op(OperatorId::Star, "*"),
    op(OperatorId::Slash, "/"),
    op(OperatorId::Percent, "%"),
    op(OperatorId::Not, "!"),
    op(OperatorId::PlusPlus, "++"),
    op(OperatorId::MinusMinus, "--"),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == s).map(|o| o.id)
}

const fn op(id: OperatorId, canonical: &'static str) -> OperatorInfo {
    OperatorInfo { id, canonical }
}
