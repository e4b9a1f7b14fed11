//! Define the reserved keyword vocabulary for CBot.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Primitive type names (`int`, `float`, `string`, `void`, ...) are *not* reserved here. The
//!   declaration helpers treat them as identifiers, so `void Foo::bar()` and `Foo bar()` share
//!   one lookahead rule.
//!
//! ## Examples
//! ```rust
//! use cbot_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("synchronized"), Some(KeywordId::Synchronized));
//! assert!(keywords::is_modifier(KeywordId::Static));
//! assert!(!keywords::is_modifier(KeywordId::Class));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Class,
    Extends,

    // Modifiers
    Public,
    Protected,
    Private,
    Extern,
    Synchronized,
    Static,

    // Control flow
    If,
    Else,
    While,
    Do,
    For,
    Repeat,
    Break,
    Continue,
    Switch,
    Case,
    Default,
    Try,
    Catch,
    Throw,
    Finally,
    Return,

    // Expressions
    New,
    This,
    Super,

    // Literals
    True,
    False,
    Null,
    Nan,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Modifier,
    ControlFlow,
    Expression,
    Literal,
}

impl KeywordCategory {
    /// Lowercase name shown by the token listing.
    pub const fn label(self) -> &'static str {
        match self {
            KeywordCategory::Declaration => "declaration",
            KeywordCategory::Modifier => "modifier",
            KeywordCategory::ControlFlow => "control-flow",
            KeywordCategory::Expression => "expression",
            KeywordCategory::Literal => "literal",
        }
    }
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Class, "class", KeywordCategory::Declaration),
    info(KeywordId::Extends, "extends", KeywordCategory::Declaration),
    // Modifiers
    info(KeywordId::Public, "public", KeywordCategory::Modifier),
    info(KeywordId::Protected, "protected", KeywordCategory::Modifier),
    info(KeywordId::Private, "private", KeywordCategory::Modifier),
    info(KeywordId::Extern, "extern", KeywordCategory::Modifier),
    info(KeywordId::Synchronized, "synchronized", KeywordCategory::Modifier),
    info(KeywordId::Static, "static", KeywordCategory::Modifier),
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Repeat, "repeat", KeywordCategory::ControlFlow),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    info(KeywordId::Try, "try", KeywordCategory::ControlFlow),
    info(KeywordId::Catch, "catch", KeywordCategory::ControlFlow),
    info(KeywordId::Throw, "throw", KeywordCategory::ControlFlow),
    info(KeywordId::Finally, "finally", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    // Expressions
    info(KeywordId::New, "new", KeywordCategory::Expression),
    info(KeywordId::This, "this", KeywordCategory::Expression),
    info(KeywordId::Super, "super", KeywordCategory::Expression),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
    info(KeywordId::Null, "null", KeywordCategory::Literal),
    info(KeywordId::Nan, "nan", KeywordCategory::Literal),
];

/// Keywords that may prefix a declaration without changing what kind of declaration it is.
///
/// The order is the order the lookahead helpers try them in.
pub const MODIFIERS: &[KeywordId] = &[
    KeywordId::Public,
    KeywordId::Protected,
    KeywordId::Private,
    KeywordId::Extern,
    KeywordId::Synchronized,
    KeywordId::Static,
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if `id` is one of the declaration [`MODIFIERS`].
pub fn is_modifier(id: KeywordId) -> bool {
    MODIFIERS.contains(&id)
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
