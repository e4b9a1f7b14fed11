//! Property-based tests for the cursor helpers and the outline pass
//!
//! Token dumps are generated from a small vocabulary that is dense in braces, parentheses and
//! modifiers, so the classifiers and recovery paths see many malformed shapes.

use cbot::diagnostics::ErrorContext;
use cbot::dump;
use cbot::outline::{self, OutlineConfig};
use cbot::parser::{MODIFIER_KINDS, TYPE_PATH_KINDS, TokenCursor};
use cbot::tokens::{TokenKind, TokenStream};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "class", "extends", "public", "private", "static", "extern", "void", "int", "Robot", "foo", "bar", "(", ")",
    "{", "}", ";", ",", "::", ".", "=", "1", "\"s\"",
];

fn dump_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..40).prop_map(|words| words.join(" "))
}

fn read(source: &str) -> TokenStream {
    dump::read(source).expect("generated dumps only use terminated strings")
}

/// Every cursor position of `tokens`, sentinel included.
fn positions(tokens: &TokenStream) -> Vec<TokenCursor<'_>> {
    let mut cursor = tokens.cursor();
    let mut all = vec![cursor];
    while !cursor.is_at_end() {
        cursor.advance();
        all.push(cursor);
    }
    all
}

/// Two probes from the same start agree on the answer and on where they leave the cursor.
fn answers_twice_alike<'a>(start: TokenCursor<'a>, probe: impl Fn(&mut TokenCursor<'a>) -> bool) -> bool {
    let (mut a, mut b) = (start, start);
    probe(&mut a) == probe(&mut b) && a == b
}

fn brace_depth(cursor: &TokenCursor<'_>, from: usize, to: usize) -> isize {
    cursor
        .tokens_between(from, to)
        .iter()
        .map(|t| match t.kind {
            k if k.opens_block() => 1,
            k if k.closes_block() => -1,
            _ => 0,
        })
        .sum()
}

proptest! {
    /// Property: the sentinel is never passed, whatever helper runs
    #[test]
    fn helpers_stay_on_the_stream(source in dump_strategy()) {
        let tokens = read(&source);
        let last = tokens.len() - 1;

        for start in positions(&tokens) {
            let mut c = start;
            c.skip_tokens(&TYPE_PATH_KINDS);
            prop_assert!(c.position() <= last);

            let mut c = start;
            c.is_function_definition();
            prop_assert!(c.position() <= last);

            let mut c = start;
            c.try_skip_to_exit_block();
            prop_assert!(c.position() <= last);

            let mut c = start;
            c.skip_class_or_function();
            prop_assert!(c.position() <= last);
        }
    }

    /// Property: skip_tokens only skips tokens from the set and stops at one outside it
    #[test]
    fn skip_tokens_skips_exactly_the_set(source in dump_strategy()) {
        let tokens = read(&source);
        for start in positions(&tokens) {
            let mut c = start;
            let skipped = c.skip_all_modifiers();

            prop_assert_eq!(skipped, c.position() - start.position());
            let run = c.tokens_between(start.position(), c.position());
            prop_assert!(run.iter().all(|t| MODIFIER_KINDS.contains(&t.kind)));
            prop_assert!(!MODIFIER_KINDS.contains(&c.peek_kind()));
        }
    }

    /// Property: classifiers are deterministic and probing through lookahead never moves
    #[test]
    fn classifiers_are_idempotent(source in dump_strategy()) {
        let tokens = read(&source);
        for start in positions(&tokens) {
            prop_assert!(answers_twice_alike(start, TokenCursor::is_class));
            prop_assert!(answers_twice_alike(start, TokenCursor::is_function_definition));
            prop_assert!(answers_twice_alike(start, TokenCursor::is_function_call));
            let copy = start;
            let _ = start.lookahead(TokenCursor::is_function_definition);
            prop_assert_eq!(copy, start);
        }
    }

    /// Property: a function call probe consumes two tokens or none
    #[test]
    fn function_call_consumes_all_or_nothing(source in dump_strategy()) {
        let tokens = read(&source);
        for start in positions(&tokens) {
            let mut c = start;
            let consumed = if c.is_function_call() { 2 } else { 0 };
            prop_assert_eq!(c.position() - start.position(), consumed);
        }
    }

    /// Property: a successful exit-block skip consumed one more closer than openers
    #[test]
    fn exit_block_skip_balances(source in dump_strategy()) {
        let tokens = read(&source);
        for start in positions(&tokens) {
            let mut c = start;
            if c.try_skip_to_exit_block() {
                prop_assert_eq!(brace_depth(&c, start.position(), c.position()), -1);
                prop_assert!(c.prev_token().is_some_and(|t| t.kind.closes_block()));
            } else {
                prop_assert!(c.is_at_end());
            }
        }
    }

    /// Property: validate_block reports exactly when it fails
    #[test]
    fn validate_block_agrees_with_context(source in dump_strategy()) {
        let tokens = read(&source);
        for start in positions(&tokens) {
            let mut c = start;
            let mut ctx = ErrorContext::new();
            let ok = c.validate_block(&mut ctx);
            prop_assert_eq!(ok, ctx.is_ok());
            if ok {
                prop_assert_eq!(brace_depth(&c, start.position(), c.position()), 0);
            }
        }
    }

    /// Property: recovery always moves forward unless already at the end
    #[test]
    fn skip_class_or_function_makes_progress(source in dump_strategy()) {
        let tokens = read(&source);
        for start in positions(&tokens) {
            let mut c = start;
            c.skip_class_or_function();
            prop_assert!(c.position() > start.position() || start.is_at_end());
        }
    }

    /// Property: the outline pass terminates, respects the error cap and reports real tokens
    #[test]
    fn outline_is_total(source in dump_strategy(), max_errors in 0usize..5, recover in any::<bool>()) {
        let tokens = read(&source);
        let config = OutlineConfig::new().with_max_errors(max_errors).with_recover(recover);
        let result = outline::outline(&tokens, &config);

        prop_assert!(result.diagnostics.len() <= max_errors.max(1));
        for diagnostic in &result.diagnostics {
            prop_assert!(diagnostic.token_index < tokens.len());
        }
        for item in &result.items {
            let body = tokens.tokens().get(item.body.clone()).expect("body range is in bounds");
            prop_assert!(body.first().is_some_and(|t| t.kind.opens_block()));
            prop_assert!(body.last().is_some_and(|t| t.kind.closes_block()));
        }
    }
}

/// Property: the empty stream is stable under every helper
#[test]
fn empty_stream_is_inert() {
    let tokens = read("");
    let mut cursor = tokens.cursor();
    assert!(!cursor.is_class());
    assert!(!cursor.is_function_definition());
    assert!(!cursor.is_function_call());
    assert!(!cursor.try_skip_to_exit_block());
    cursor.skip_class_or_function();
    assert_eq!(cursor.peek_kind(), TokenKind::Eof);
    assert_eq!(cursor.position(), 0);
}
