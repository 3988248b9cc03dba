//! CLI module for the Scriptic frontend
//!
//! This module provides the command-line interface for the tokenizer/parser.
//!
//! ## Commands
//!
//! - `tokens <file>` - Tokenize and list significant tokens
//! - `parse <file>` - Parse and display the AST
//! - `check <file>` - Report syntax errors (default when only a file is given)
//! - `grammar [rule]` - Show the grammar rule table
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

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

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
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
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

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Tokenizer and parser for a C-family scripting language
#[derive(Parser, Debug)]
#[command(name = "scriptic")]
#[command(version = VERSION)]
#[command(about = "Tokenizer and parser for a C-family scripting language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check for syntax errors (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize a file and list the significant tokens
    Tokens {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a file and display the AST
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Check a file for syntax errors
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show the grammar rule table
    Grammar {
        /// Show only the named rule
        #[arg(value_name = "RULE")]
        rule: Option<String>,
    },
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
    match cli.command {
        Some(Command::Tokens { file }) => commands::tokens_file(&file.to_string_lossy()),
        Some(Command::Parse { file }) => commands::parse_file(&file.to_string_lossy()),
        Some(Command::Check { file }) => commands::check_file(&file.to_string_lossy()),
        Some(Command::Grammar { rule }) => commands::show_grammar(rule.as_deref()),
        None => {
            // Default: syntax-check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file.to_string_lossy())
            } else {
                Err(CliError::failure(
                    "Usage: scriptic <FILE> or a subcommand (see --help)",
                ))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::try_parse_from(["scriptic", "tokens", "demo.scr"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Tokens { .. })));
    }

    #[test]
    fn test_cli_parse_parse() {
        let cli = Cli::try_parse_from(["scriptic", "parse", "demo.scr"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Parse { .. })));
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["scriptic", "check", "demo.scr"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check { .. })));
    }

    #[test]
    fn test_cli_parse_grammar_with_rule() {
        let cli = Cli::try_parse_from(["scriptic", "grammar", "Statement"]).unwrap();
        if let Some(Command::Grammar { rule }) = cli.command {
            assert_eq!(rule.as_deref(), Some("Statement"));
        } else {
            panic!("Expected Grammar command");
        }
    }

    #[test]
    fn test_cli_bare_file_defaults_to_check() {
        let cli = Cli::try_parse_from(["scriptic", "demo.scr"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.file.is_some());
    }
}
