//! Guardrail against stringly-typed vocabulary checks.
//!
//! Keyword and punctuation identity goes through `TokenKind` and the `cbot_core::lang` registries. This scan looks
//! for `== "class"` comparisons and `"{" =>` match arms in Rust sources outside the registries and tests. It is a
//! coarse net for the obvious regressions, not a lint.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use cbot_core::lang::{keywords, punctuation};

struct Offender {
    path: PathBuf,
    line_no: usize,
    text: String,
}

#[test]
fn sources_compare_token_kinds_not_spellings() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let spellings = registry_spellings();

    let mut offenders = Vec::new();
    for dir in ["src", "crates"] {
        collect_offenders(&root, &root.join(dir), &spellings, &mut offenders);
    }

    let report: Vec<String> = offenders
        .iter()
        .take(80)
        .map(|o| {
            let rel = o.path.strip_prefix(&root).unwrap_or(&o.path);
            format!("- {}:{}: {}", rel.display(), o.line_no, o.text.trim())
        })
        .collect();
    assert!(
        report.is_empty(),
        "Found stringly-typed vocabulary checks; match on TokenKind or use cbot_core registries:\n{}",
        report.join("\n")
    );
}

#[test]
fn detector_flags_equality_and_match_arms() {
    let spellings = vec!["class", "{"];
    assert!(compares_spelling(r#"if word == "class" {"#, &spellings));
    assert!(compares_spelling(r#"    "{" => depth += 1,"#, &spellings));
    assert!(!compares_spelling(r#"// word == "class""#, &spellings));
    assert!(!compares_spelling(r#"let name = "Robot";"#, &spellings));
}

/// Keywords and punctuation: the spellings the classifiers dispatch on.
fn registry_spellings() -> Vec<&'static str> {
    let keywords = keywords::KEYWORDS.iter().map(|k| k.canonical);
    let punctuation = punctuation::PUNCTUATION.iter().map(|p| p.canonical);
    keywords.chain(punctuation).collect::<BTreeSet<_>>().into_iter().collect()
}

/// Registries define the spellings and tests may use them freely.
fn is_exempt(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy().replace('\\', "/");
    !rel.ends_with(".rs")
        || rel.starts_with("crates/cbot_core/src/lang/")
        || rel.contains("/tests/")
        || rel.ends_with("/tests.rs")
}

fn collect_offenders(root: &Path, dir: &Path, spellings: &[&str], offenders: &mut Vec<Offender>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect_offenders(root, &path, spellings, offenders);
        } else if !is_exempt(root, &path) {
            let Ok(contents) = fs::read_to_string(&path) else { continue };
            offenders.extend(
                contents
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| compares_spelling(line, spellings))
                    .map(|(idx, line)| Offender {
                        path: path.clone(),
                        line_no: idx + 1,
                        text: line.to_string(),
                    }),
            );
        }
    }
}

fn compares_spelling(line: &str, spellings: &[&str]) -> bool {
    if line.trim_start().starts_with("//") {
        return false;
    }
    spellings
        .iter()
        .any(|s| line.contains(&format!("== \"{s}\"")) || line.contains(&format!("\"{s}\" =>")))
}
