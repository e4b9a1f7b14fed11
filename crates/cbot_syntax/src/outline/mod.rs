//! Declaration outline pass.
//!
//! This is the first pass over a CBot program: it walks the top level with the lookahead
//! classifiers, records every class and function header, skips their bodies with the block
//! helpers, and resynchronizes after a malformed declaration. The grammar builder can then
//! compile each body on its own, knowing every class and function name up front.
//!
//! ## Notes
//! - Each declaration (and each class member) gets its own [`ErrorContext`], so one failure
//!   never leaks into the next.
//! - Recovery always makes forward progress: the pass terminates on any token sequence.
//!
//! ## Examples
//! ```rust
//! use cbot_syntax::{dump, outline::{self, OutlineConfig}};
//!
//! let tokens = dump::read("extern void object :: Patrol ( float dist ) { move ( dist ) ; }").unwrap();
//! let result = outline::outline(&tokens, &OutlineConfig::default());
//! assert_eq!(result.to_string(), "extern function void object::Patrol(float dist)\n  call move\n");
//! ```

mod config;
mod render;
#[cfg(test)]
mod tests;

pub use config::OutlineConfig;

use std::ops::Range;

use cbot_core::lang::errors::ErrorCode;
use cbot_core::lang::keywords::KeywordId;
use cbot_core::lang::operators::OperatorId;
use cbot_core::lang::punctuation::PunctuationId;

use crate::diagnostics::{ErrorContext, ParseDiagnostic};
use crate::parser::{PARAM_LIST_KINDS, ProtectionLevel, TYPE_PATH_KINDS, TokenCursor};
use crate::tokens::{Span, Token, TokenKind, TokenStream};

// ============================================================================
// Outline types
// ============================================================================

/// Modifier keywords written in front of a declaration or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub protection: ProtectionLevel,
    pub is_extern: bool,
    pub is_static: bool,
    pub is_synchronized: bool,
}

impl Modifiers {
    /// The written modifiers in canonical order: access level first, then `extern`, `static`
    /// and `synchronized`.
    pub fn keywords(&self) -> impl Iterator<Item = KeywordId> {
        let flags = [
            (self.is_extern, KeywordId::Extern),
            (self.is_static, KeywordId::Static),
            (self.is_synchronized, KeywordId::Synchronized),
        ];
        self.protection
            .keyword_id()
            .into_iter()
            .chain(flags.into_iter().filter_map(|(set, id)| set.then_some(id)))
    }
}

/// One `type name` group of a parameter list. The type is absent for a bare `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: Option<String>,
    pub name: String,
}

/// Header of a function or method: `[return type] [Owner ::] name ( params )`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub return_type: Option<String>,
    /// Class named by a `Owner :: name` qualifier.
    pub owner: Option<String>,
    pub name: String,
    pub params: Vec<Param>,
}

/// A `name (` occurrence inside a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub name: String,
    pub span: Span,
    /// Preceded by `.` (`robot.move(...)`).
    pub is_method: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    Field { ty: String },
    Method { signature: Signature, calls: Vec<Call> },
}

/// A field or method declared in a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub modifiers: Modifiers,
    pub kind: MemberKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Class {
        name: String,
        extends: Option<String>,
        members: Vec<Member>,
    },
    Function {
        signature: Signature,
        calls: Vec<Call>,
    },
}

/// A top-level class or function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineItem {
    pub kind: ItemKind,
    pub modifiers: Modifiers,
    /// From the first modifier (or keyword) to the closing brace.
    pub span: Span,
    /// Token indices of the body, braces included.
    pub body: Range<usize>,
}

impl OutlineItem {
    pub fn name(&self) -> &str {
        match &self.kind {
            ItemKind::Class { name, .. } => name,
            ItemKind::Function { signature, .. } => &signature.name,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, ItemKind::Class { .. })
    }
}

/// Result of the outline pass: what was recognized, and what went wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub items: Vec<OutlineItem>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl Outline {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// First item called `name`.
    pub fn find(&self, name: &str) -> Option<&OutlineItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// ## Errors
    /// Returns the diagnostics when there are any, dropping the partial outline.
    pub fn into_result(self) -> Result<Vec<OutlineItem>, Vec<ParseDiagnostic>> {
        if self.diagnostics.is_empty() {
            Ok(self.items)
        } else {
            Err(self.diagnostics)
        }
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Outline every top-level declaration of `tokens`.
///
/// This never fails outright: diagnostics are collected in [`Outline::diagnostics`] and,
/// unless `config.recover` is off, the pass resynchronizes and keeps going.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn outline(tokens: &TokenStream, config: &OutlineConfig) -> Outline {
    Outliner::new(tokens.cursor(), config).run()
}

struct Outliner<'a, 'c> {
    cursor: TokenCursor<'a>,
    config: &'c OutlineConfig,
    diagnostics: Vec<ParseDiagnostic>,
}

impl<'a, 'c> Outliner<'a, 'c> {
    fn new(cursor: TokenCursor<'a>, config: &'c OutlineConfig) -> Self {
        Self {
            cursor,
            config,
            diagnostics: Vec::new(),
        }
    }

    fn run(mut self) -> Outline {
        let mut items = Vec::new();

        while !self.cursor.is_at_end() {
            let start = self.cursor;
            let mut ctx = ErrorContext::with_policy(self.config.policy);
            let item = self.declaration(&mut ctx);

            let failed = match ctx.take() {
                Some(diagnostic) => {
                    self.diagnostics.push(diagnostic);
                    true
                }
                None => {
                    items.extend(item);
                    false
                }
            };

            if (!self.config.recover && !self.diagnostics.is_empty()) || self.limit_reached() {
                break;
            }
            if failed {
                self.cursor = start;
                self.cursor.skip_class_or_function();
            }
            if self.cursor.position() == start.position() {
                self.cursor.advance();
            }
        }

        self.diagnostics.truncate(self.config.error_limit());
        tracing::debug!(
            items = items.len(),
            diagnostics = self.diagnostics.len(),
            "outline complete"
        );
        Outline {
            items,
            diagnostics: self.diagnostics,
        }
    }

    fn limit_reached(&self) -> bool {
        self.diagnostics.len() >= self.config.error_limit()
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn declaration(&mut self, ctx: &mut ErrorContext) -> Option<OutlineItem> {
        let start = self.cursor;
        let modifiers = read_modifiers(&mut self.cursor);

        if self.cursor.lookahead(TokenCursor::is_class) {
            return self.class(start, modifiers, ctx);
        }

        // A header the lookahead rejects still goes through `function`, so its diagnostic
        // names the exact token that broke it.
        let is_function = self.cursor.lookahead(TokenCursor::is_function_definition)
            || self.cursor.lookahead(starts_function_header);
        if is_function {
            return self.function(start, modifiers, ctx);
        }

        ctx.set_error(ErrorCode::NoDeclaration, &self.cursor);
        None
    }

    fn class(&mut self, start: TokenCursor<'a>, modifiers: Modifiers, ctx: &mut ErrorContext) -> Option<OutlineItem> {
        if !self.cursor.is_class() {
            ctx.set_error(ErrorCode::NoDeclaration, &self.cursor);
            return None;
        }
        if self.cursor.require_type(TokenKind::Ident, ErrorCode::NoClassName, ctx) {
            return None;
        }
        let name = prev_text(&self.cursor);

        let extends = if self.cursor.is_of_type(TokenKind::Keyword(KeywordId::Extends)) {
            if self.cursor.require_type(TokenKind::Ident, ErrorCode::NoClassName, ctx) {
                return None;
            }
            Some(prev_text(&self.cursor))
        } else {
            None
        };

        let body = self.block(ctx)?;
        let members = if self.config.scan_members {
            self.members(body.clone())
        } else {
            Vec::new()
        };

        Some(OutlineItem {
            kind: ItemKind::Class { name, extends, members },
            modifiers,
            span: span_between(&start, &self.cursor),
            body,
        })
    }

    fn function(&mut self, start: TokenCursor<'a>, modifiers: Modifiers, ctx: &mut ErrorContext) -> Option<OutlineItem> {
        let signature = signature(&mut self.cursor, ctx)?;
        let body = self.block(ctx)?;
        let calls = self.calls(body.clone());

        Some(OutlineItem {
            kind: ItemKind::Function { signature, calls },
            modifiers,
            span: span_between(&start, &self.cursor),
            body,
        })
    }

    /// Validate the block at the cursor and return its token range.
    fn block(&mut self, ctx: &mut ErrorContext) -> Option<Range<usize>> {
        let open = self.cursor.position();
        self.cursor.validate_block(ctx).then(|| open..self.cursor.position())
    }

    // ========================================================================
    // Class members
    // ========================================================================

    fn members(&mut self, body: Range<usize>) -> Vec<Member> {
        let close = body.end - 1;
        let mut cursor = self.cursor.at(body.start + 1);
        let mut members = Vec::new();

        while cursor.position() < close {
            let start = cursor;
            let mut ctx = ErrorContext::with_policy(self.config.policy);
            let member = self.member(&mut cursor, close, &mut ctx);

            match ctx.take() {
                Some(diagnostic) => {
                    self.diagnostics.push(diagnostic);
                    if !self.config.recover || self.limit_reached() {
                        break;
                    }
                    cursor = start;
                    skip_member(&mut cursor, close);
                }
                None => members.extend(member),
            }
            if cursor.position() == start.position() {
                cursor.advance();
            }
        }
        members
    }

    fn member(&self, cursor: &mut TokenCursor<'a>, close: usize, ctx: &mut ErrorContext) -> Option<Member> {
        let start = *cursor;
        let modifiers = read_modifiers(cursor);

        if cursor.lookahead(TokenCursor::is_function_definition) {
            let signature = signature(cursor, ctx)?;
            let open = cursor.position();
            if !cursor.validate_block(ctx) {
                return None;
            }
            let calls = self.calls(open..cursor.position());
            return Some(Member {
                name: signature.name.clone(),
                modifiers,
                kind: MemberKind::Method { signature, calls },
                span: span_between(&start, cursor),
            });
        }

        // Field: `type name [= initializer] ;`
        let decl_start = cursor.position();
        let mut depth = 0usize;
        while cursor.position() < close {
            let kind = cursor.peek_kind();
            if depth == 0 && kind == TokenKind::Punctuation(PunctuationId::Semicolon) {
                break;
            }
            if kind.opens_block() {
                depth += 1;
            } else if kind.closes_block() {
                depth = depth.saturating_sub(1);
            }
            cursor.advance();
        }
        let decl = cursor.tokens_between(decl_start, cursor.position());

        if cursor.require_type(
            TokenKind::Punctuation(PunctuationId::Semicolon),
            ErrorCode::NoTerminator,
            ctx,
        ) {
            return None;
        }

        let declarator = decl
            .split(|t| t.kind == TokenKind::Operator(OperatorId::Assign))
            .next()
            .unwrap_or_default();
        let Some(name_index) = declarator.iter().rposition(Token::is_ident) else {
            ctx.set_error(ErrorCode::NoVar, &cursor.at(decl_start));
            return None;
        };
        let Some(ty) = declarator[..name_index].iter().find(|t| t.is_ident()) else {
            ctx.set_error(ErrorCode::NoType, &cursor.at(decl_start));
            return None;
        };

        Some(Member {
            name: declarator[name_index].text.clone(),
            modifiers,
            kind: MemberKind::Field { ty: ty.text.clone() },
            span: span_between(&start, cursor),
        })
    }

    // ========================================================================
    // Calls
    // ========================================================================

    fn calls(&self, body: Range<usize>) -> Vec<Call> {
        if !self.config.collect_calls {
            return Vec::new();
        }
        body.filter_map(|index| {
            let at = self.cursor.at(index);
            at.lookahead(TokenCursor::is_function_call).then(|| {
                let name = at.peek();
                Call {
                    name: name.text.clone(),
                    span: name.span,
                    is_method: at
                        .prev_token()
                        .is_some_and(|t| t.kind == TokenKind::Punctuation(PunctuationId::Dot)),
                }
            })
        })
        .collect()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Read any run of modifier keywords, remembering which ones were written.
fn read_modifiers(cursor: &mut TokenCursor<'_>) -> Modifiers {
    let mut modifiers = Modifiers::default();
    loop {
        let protection = cursor.read_access_modifier();
        if protection != ProtectionLevel::None {
            modifiers.protection = protection;
        } else if cursor.is_of_type(TokenKind::Keyword(KeywordId::Extern)) {
            modifiers.is_extern = true;
        } else if cursor.is_of_type(TokenKind::Keyword(KeywordId::Static)) {
            modifiers.is_static = true;
        } else if cursor.is_of_type(TokenKind::Keyword(KeywordId::Synchronized)) {
            modifiers.is_synchronized = true;
        } else {
            return modifiers;
        }
    }
}

/// `name (` after an optional type/scope run, with or without a well-formed tail.
fn starts_function_header(cursor: &mut TokenCursor<'_>) -> bool {
    cursor.skip_tokens(&TYPE_PATH_KINDS) > 0 && cursor.is_of_type(TokenKind::Punctuation(PunctuationId::LParen))
}

/// Parse `[return type] [Owner ::] name ( params )`, stopping before the body.
fn signature(cursor: &mut TokenCursor<'_>, ctx: &mut ErrorContext) -> Option<Signature> {
    let head_start = cursor.position();
    cursor.skip_tokens(&TYPE_PATH_KINDS);
    let head = cursor.tokens_between(head_start, cursor.position());

    let Some((name, rest)) = head.split_last().filter(|(name, _)| name.is_ident()) else {
        ctx.set_error(ErrorCode::NoFunc, cursor);
        return None;
    };
    let (owner, rest) = match rest {
        [prefix @ .., owner, sep]
            if owner.is_ident() && sep.kind == TokenKind::Punctuation(PunctuationId::ColonColon) =>
        {
            (Some(owner.text.clone()), prefix)
        }
        _ => (None, rest),
    };
    let return_type = rest.iter().find(|t| t.is_ident()).map(|t| t.text.clone());

    if cursor.require_type(TokenKind::Punctuation(PunctuationId::LParen), ErrorCode::OpenPar, ctx) {
        return None;
    }
    let params_start = cursor.position();
    cursor.skip_tokens(&PARAM_LIST_KINDS);
    let params = params(cursor.tokens_between(params_start, cursor.position()));
    if cursor.require_type(TokenKind::Punctuation(PunctuationId::RParen), ErrorCode::ClosePar, ctx) {
        return None;
    }

    Some(Signature {
        return_type,
        owner,
        name: name.text.clone(),
        params,
    })
}

/// Split a skipped parameter run into `type name` groups.
fn params(tokens: &[Token]) -> Vec<Param> {
    tokens
        .split(|t| t.kind == TokenKind::Punctuation(PunctuationId::Comma))
        .filter_map(|group| {
            let (name, rest) = group.split_last()?;
            Some(Param {
                ty: rest.first().map(|t| t.text.clone()),
                name: name.text.clone(),
            })
        })
        .collect()
}

/// Skip past the member under the cursor: up to the next `;` or balanced block at depth zero.
fn skip_member(cursor: &mut TokenCursor<'_>, close: usize) {
    let mut depth = 0usize;
    while cursor.position() < close {
        let kind = cursor.advance().kind;
        if kind.opens_block() {
            depth += 1;
        } else if kind.closes_block() {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return;
            }
        } else if depth == 0 && kind == TokenKind::Punctuation(PunctuationId::Semicolon) {
            return;
        }
    }
}

fn prev_text(cursor: &TokenCursor<'_>) -> String {
    cursor.prev_token().map(|t| t.text.clone()).unwrap_or_default()
}

/// From the token under `start` to the last token `end` consumed.
fn span_between(start: &TokenCursor<'_>, end: &TokenCursor<'_>) -> Span {
    let first = start.peek().span;
    end.prev_token().map_or(first, |last| first.merge(last.span))
}
