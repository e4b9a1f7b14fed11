//! Structural diagnostics and the single-slot error context.
//!
//! A parse attempt owns one [`ErrorContext`]. Validators record a [`ParseDiagnostic`] into it,
//! tagged with the token a human should look at; classifiers never touch it.
//!
//! ## Notes
//! - The context is passed explicitly. There is no global error state, so independent units
//!   can be parsed side by side, each with its own context.
//! - [`ParseDiagnostic`] implements [`miette::Diagnostic`] so hosts can render it against the
//!   source text with labels and help.

use cbot_core::lang::errors::ErrorCode;

use crate::parser::TokenCursor;
use crate::tokens::Span;

/// A structural diagnostic: what went wrong and at which token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (found {found})", message = .code.message())]
pub struct ParseDiagnostic {
    pub code: ErrorCode,
    /// Index of the offending token in its stream.
    pub token_index: usize,
    pub span: Span,
    /// Description of the offending token (`` `foo` `` or `end of program`).
    pub found: String,
}

impl ParseDiagnostic {
    /// Diagnostic for the token under `at`.
    pub fn at(code: ErrorCode, at: &TokenCursor<'_>) -> Self {
        let token = at.peek();
        Self {
            code,
            token_index: at.position(),
            span: token.span,
            found: token.describe(),
        }
    }

    fn label(&self) -> &'static str {
        match self.code {
            ErrorCode::CloseBlock => "this block is never closed",
            ErrorCode::OpenBlock => "expected `{` here",
            ErrorCode::OpenPar => "expected `(` here",
            ErrorCode::ClosePar => "expected `)` here",
            ErrorCode::NoTerminator => "expected `;` before this",
            _ => "here",
        }
    }
}

impl miette::Diagnostic for ParseDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(format!("cbot::{}", self.code)))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.code
            .help()
            .map(|help| Box::new(help) as Box<dyn std::fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(miette::LabeledSpan::at(
            self.span,
            self.label(),
        ))))
    }
}

/// What [`ErrorContext::set_error`] does when a diagnostic is already pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticPolicy {
    /// The newest diagnostic replaces the pending one.
    #[default]
    Overwrite,
    /// The pending diagnostic is kept and later ones are dropped.
    FirstWins,
}

/// Holds zero or one pending diagnostic for the current parse attempt.
///
/// ## Notes
/// - Callers clear (or [`take`](Self::take)) between independent attempts.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pending: Option<ParseDiagnostic>,
    policy: DiagnosticPolicy,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DiagnosticPolicy) -> Self {
        Self { pending: None, policy }
    }

    pub fn policy(&self) -> DiagnosticPolicy {
        self.policy
    }

    /// Record `code` at the token under `at`, subject to the context's policy.
    pub fn set_error(&mut self, code: ErrorCode, at: &TokenCursor<'_>) {
        if let Some(pending) = &self.pending {
            match self.policy {
                DiagnosticPolicy::FirstWins => {
                    tracing::debug!(kept = %pending.code, dropped = %code, "diagnostic already pending");
                    return;
                }
                DiagnosticPolicy::Overwrite => {
                    tracing::debug!(replaced = %pending.code, with = %code, "replacing pending diagnostic");
                }
            }
        }

        let diagnostic = ParseDiagnostic::at(code, at);
        tracing::debug!(code = %code, token = diagnostic.token_index, "recorded diagnostic");
        self.pending = Some(diagnostic);
    }

    /// The pending diagnostic, if any.
    pub fn error(&self) -> Option<&ParseDiagnostic> {
        self.pending.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.pending.is_none()
    }

    /// Remove and return the pending diagnostic.
    pub fn take(&mut self) -> Option<ParseDiagnostic> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
