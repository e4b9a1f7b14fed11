//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use serde_json::{Value, json};

use cbot_core::lang::{keywords, punctuation};

use cbot_syntax::diagnostics::ParseDiagnostic;
use cbot_syntax::dump;
use cbot_syntax::outline::{
    self, Call, ItemKind, Member, MemberKind, Modifiers, Outline, OutlineConfig, OutlineItem, Signature,
};
use cbot_syntax::parser::{ProtectionLevel, TokenCursor};
use cbot_syntax::tokens::{TokenKind, TokenStream};

use super::{CliError, CliResult, ExitCode};

/// Maximum dump file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// while reading tokens.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Read a dump into tokens, rendering a read error against the source.
pub fn read_tokens(file_path: &str, source: &str) -> CliResult<TokenStream> {
    dump::read(source).map_err(|err| CliError::failure(render_report(file_path, source, err)))
}

/// Render a diagnostic with miette's graphical handler, labels pointing into `source`.
pub fn render_report(
    file_path: &str,
    source: &str,
    diagnostic: impl miette::Diagnostic + Send + Sync + 'static,
) -> String {
    let report =
        miette::Report::new(diagnostic).with_source_code(miette::NamedSource::new(file_path, source.to_string()));
    format!("{report:?}")
}

// ============================================================================
// outline
// ============================================================================

/// Outline a dump: print its declarations, report diagnostics on stderr.
///
/// Exits with failure when any diagnostic was reported, even if items were recovered.
#[tracing::instrument(skip(config))]
pub fn outline_file(file_path: &str, config: &OutlineConfig, json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = read_tokens(file_path, &source)?;
    let result = outline::outline(&tokens, config);

    if json {
        let rendered = serde_json::to_string_pretty(&outline_json(&result))
            .map_err(|e| CliError::failure(format!("Error encoding JSON: {}", e)))?;
        println!("{rendered}");
    } else {
        for item in &result.items {
            print!("{item}");
        }
        for diagnostic in &result.diagnostics {
            eprintln!("{}", render_report(file_path, &source, diagnostic.clone()));
        }
    }

    if result.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::info!(errors = result.diagnostics.len(), "outline reported errors");
        Ok(ExitCode::FAILURE)
    }
}

/// JSON form of an outline: `{ "items": [...], "diagnostics": [...] }`.
pub fn outline_json(outline: &Outline) -> Value {
    json!({
        "items": outline.items.iter().map(item_json).collect::<Vec<_>>(),
        "diagnostics": outline.diagnostics.iter().map(diagnostic_json).collect::<Vec<_>>(),
    })
}

fn item_json(item: &OutlineItem) -> Value {
    let mut value = match &item.kind {
        ItemKind::Class { name, extends, members } => json!({
            "kind": "class",
            "name": name,
            "extends": extends,
            "members": members.iter().map(member_json).collect::<Vec<_>>(),
        }),
        ItemKind::Function { signature, calls } => json!({
            "kind": "function",
            "signature": signature_json(signature),
            "calls": calls.iter().map(call_json).collect::<Vec<_>>(),
        }),
    };
    value["modifiers"] = modifiers_json(&item.modifiers);
    value["span"] = json!([item.span.start, item.span.end]);
    value
}

fn member_json(member: &Member) -> Value {
    let mut value = match &member.kind {
        MemberKind::Field { ty } => json!({ "kind": "field", "name": member.name, "type": ty }),
        MemberKind::Method { signature, calls } => json!({
            "kind": "method",
            "signature": signature_json(signature),
            "calls": calls.iter().map(call_json).collect::<Vec<_>>(),
        }),
    };
    value["modifiers"] = modifiers_json(&member.modifiers);
    value
}

fn modifiers_json(modifiers: &Modifiers) -> Value {
    json!(modifiers.keywords().map(keywords::as_str).collect::<Vec<_>>())
}

fn signature_json(signature: &Signature) -> Value {
    json!({
        "name": signature.name,
        "owner": signature.owner,
        "return_type": signature.return_type,
        "params": signature
            .params
            .iter()
            .map(|p| json!({ "type": p.ty, "name": p.name }))
            .collect::<Vec<_>>(),
    })
}

fn call_json(call: &Call) -> Value {
    json!({ "name": call.name, "method": call.is_method, "span": [call.span.start, call.span.end] })
}

fn diagnostic_json(diagnostic: &ParseDiagnostic) -> Value {
    json!({
        "code": diagnostic.code.to_string(),
        "message": diagnostic.code.message(),
        "found": diagnostic.found,
        "token": diagnostic.token_index,
        "span": [diagnostic.span.start, diagnostic.span.end],
    })
}

// ============================================================================
// tokens / classify (debug)
// ============================================================================

/// Print every token with its index, kind, registry category and span.
pub fn tokens_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = read_tokens(file_path, &source)?;

    for (index, token) in tokens.tokens().iter().enumerate() {
        println!(
            "{index:>5}  {:<16} {:<12} {:<13} {}..{}",
            token.kind.to_string(),
            token.text,
            token_category(token.kind),
            token.span.start,
            token.span.end
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Registry category of a token kind, as listed by `tokens`.
pub fn token_category(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword(id) => keywords::category(id).label(),
        TokenKind::Punctuation(id) => punctuation::category(id).label(),
        TokenKind::Operator(_) => "operator",
        TokenKind::Ident => "identifier",
        TokenKind::Number | TokenKind::String => "literal",
        TokenKind::Eof => "end",
    }
}

/// Print the tokens at which at least one lookahead classifier answers `true`.
pub fn classify_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = read_tokens(file_path, &source)?;

    let mut cursor = tokens.cursor();
    while !cursor.is_at_end() {
        let labels = classify_at(&cursor);
        if !labels.is_empty() {
            println!("{:>5}  {:<12} {}", cursor.position(), cursor.peek().text, labels.join(" "));
        }
        cursor.advance();
    }
    Ok(ExitCode::SUCCESS)
}

/// Names of the classifiers that fire at `cursor`.
pub fn classify_at(cursor: &TokenCursor<'_>) -> Vec<&'static str> {
    let mut labels = Vec::new();
    if cursor.lookahead(|c| c.read_access_modifier() != ProtectionLevel::None) {
        labels.push("access");
    }
    if cursor.lookahead(TokenCursor::is_class) {
        labels.push("class");
    }
    if cursor.lookahead(TokenCursor::is_function_definition) {
        labels.push("function");
    }
    if cursor.lookahead(TokenCursor::is_function_call) {
        labels.push("call");
    }
    labels
}
