//! Compile-time diagnostic codes.
//!
//! Every structural check in the front-end reports one of these codes. The numeric value is
//! stable and is what tooling displays (`cbot::E5010`); the message is the short human-facing
//! text shared by the CLI and any embedding host.
//!
//! ## Examples
//! ```rust
//! use cbot_core::lang::errors::{self, ErrorCode};
//!
//! assert_eq!(ErrorCode::OpenBlock.number(), 5010);
//! assert_eq!(errors::from_number(5008), Some(ErrorCode::CloseBlock));
//! ```

/// Stable identifier for every front-end diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    OpenPar,
    ClosePar,
    NoTerminator,
    CloseBlock,
    OpenBlock,
    NoType,
    NoVar,
    NoFunc,
    NoClassName,
    NoDeclaration,
}

/// Metadata for a diagnostic code.
#[derive(Debug, Clone, Copy)]
pub struct ErrorInfo {
    pub id: ErrorCode,
    pub number: u16,
    pub message: &'static str,
    /// Optional one-line hint rendered under the diagnostic.
    pub help: Option<&'static str>,
}

/// Registry of all diagnostic codes.
pub const ERRORS: &[ErrorInfo] = &[
    info(ErrorCode::OpenPar, 5000, "opening parenthesis missing", None),
    info(ErrorCode::ClosePar, 5001, "closing parenthesis missing", None),
    info(ErrorCode::NoTerminator, 5005, "semicolon missing", None),
    info(
        ErrorCode::CloseBlock,
        5008,
        "closing brace missing",
        Some("this block is never closed before the end of the program"),
    ),
    info(ErrorCode::OpenBlock, 5010, "opening brace missing", None),
    info(ErrorCode::NoType, 5014, "type declaration missing", None),
    info(ErrorCode::NoVar, 5015, "variable name missing", None),
    info(ErrorCode::NoFunc, 5016, "function name missing", None),
    info(ErrorCode::NoClassName, 5017, "class name missing", None),
    info(
        ErrorCode::NoDeclaration,
        5018,
        "class or function declaration expected",
        Some("only classes and functions may appear at the top level"),
    ),
];

impl ErrorCode {
    /// Stable numeric code.
    pub fn number(self) -> u16 {
        info_for(self).number
    }

    /// Short human-facing message.
    pub fn message(self) -> &'static str {
        info_for(self).message
    }

    pub fn help(self) -> Option<&'static str> {
        info_for(self).help
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.number())
    }
}

/// Return the full metadata entry for a diagnostic code.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ErrorCode) -> &'static ErrorInfo {
    ERRORS.iter().find(|e| e.id == id).expect("error info missing")
}

/// Resolve a numeric code back to its identifier.
pub fn from_number(number: u16) -> Option<ErrorCode> {
    ERRORS.iter().find(|e| e.number == number).map(|e| e.id)
}

const fn info(id: ErrorCode, number: u16, message: &'static str, help: Option<&'static str>) -> ErrorInfo {
    ErrorInfo {
        id,
        number,
        message,
        help,
    }
}
