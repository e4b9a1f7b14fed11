//! CLI module for the CBot front-end
//!
//! ## Commands
//!
//! - `outline <file>` - List the declarations of a token dump and report structural errors
//! - `tokens <file>` - Print the token stream read from a dump
//! - `classify <file>` - Show which lookahead classifiers fire at each token
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use cbot_syntax::diagnostics::DiagnosticPolicy;
use cbot_syntax::outline::OutlineConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Declaration outliner for CBot token dumps
#[derive(Parser, Debug)]
#[command(name = "cbot")]
#[command(version = VERSION)]
#[command(about = "Declaration outliner for CBot token dumps", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List classes, functions and members, and report structural errors
    Outline {
        /// Token dump to outline
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print the outline and diagnostics as JSON
        #[arg(long)]
        json: bool,
        /// Stop at the first diagnostic instead of resynchronizing
        #[arg(long)]
        no_recover: bool,
        /// Keep the first diagnostic of a declaration instead of the last one
        #[arg(long)]
        first_error_wins: bool,
        /// Do not break class bodies down into members
        #[arg(long)]
        no_members: bool,
        /// Do not list calls made in bodies
        #[arg(long)]
        no_calls: bool,
        /// Stop after this many diagnostics
        #[arg(long, value_name = "N", default_value_t = 20)]
        max_errors: usize,
    },

    /// Print the token stream read from a dump
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show which lookahead classifiers fire at each token
    Classify {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Command {
    /// Outline configuration selected by the `outline` flags, if this is that command.
    pub fn outline_config(&self) -> Option<OutlineConfig> {
        let Command::Outline {
            no_recover,
            first_error_wins,
            no_members,
            no_calls,
            max_errors,
            ..
        } = self
        else {
            return None;
        };

        let policy = if *first_error_wins {
            DiagnosticPolicy::FirstWins
        } else {
            DiagnosticPolicy::Overwrite
        };
        Some(
            OutlineConfig::new()
                .with_recover(!no_recover)
                .with_policy(policy)
                .with_scan_members(!no_members)
                .with_collect_calls(!no_calls)
                .with_max_errors(*max_errors),
        )
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.command.outline_config();
    match cli.command {
        Command::Outline { file, json, .. } => {
            let config = config.unwrap_or_default();
            commands::outline_file(&file.to_string_lossy(), &config, json)
        }
        Command::Tokens { file } => commands::tokens_file(&file.to_string_lossy()),
        Command::Classify { file } => commands::classify_file(&file.to_string_lossy()),
    }
}

// ============================================================================
// Tests
// ============================================================================
