//! Layering guardrails for the workspace crates.
//!
//! `cbot_core` is pure vocabulary and carries no dependencies. `cbot_syntax` is a library front-end and must not
//! pull in the CLI stack (`clap`, `serde_json`, `tracing-subscriber`); those belong to the `cbot` binary crate.

/// Dependency names listed in the `[dependencies]` table of `manifest`.
fn main_dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let deps = main_dependencies(include_str!("../crates/cbot_core/Cargo.toml"));
    assert!(deps.is_empty(), "`cbot_core` must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_does_not_depend_on_cli_stack() {
    let deps = main_dependencies(include_str!("../crates/cbot_syntax/Cargo.toml"));
    for forbidden in ["clap", "serde_json", "tracing-subscriber", "cbot"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in cbot_syntax [dependencies]"
        );
    }
    assert!(deps.iter().any(|d| d == "cbot_core"));
}
