//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::fs;

use scriptic_core::lang::grammar;
use scriptic_syntax::diagnostics::ParseResult;
use scriptic_syntax::lexer::{self, Token, TokenKind};
use scriptic_syntax::parser;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, enforcing the size limit.
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
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

    tracing::debug!(file = file_path, bytes = metadata.len(), "reading source file");
    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

// ============================================================================
// Commands
// ============================================================================

/// Tokenize a file and list the significant tokens.
pub fn tokens_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source);
    print!("{}", render_token_listing(&tokens));
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and display the AST.
///
/// The tree is printed even when the parse had errors (recovery always
/// produces one); the errors then decide the exit status.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let result = parser::parse(&lexer::lex(&source));

    println!("{:#?}", result.ast);

    if result.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(render_errors(file_path, &source, &result)))
    }
}

/// Check a file for syntax errors.
pub fn check_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let result = parser::parse(&lexer::lex(&source));

    if result.success {
        println!("✓ No syntax errors");
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(render_errors(file_path, &source, &result)))
    }
}

/// Show the grammar rule table, or a single named rule.
pub fn show_grammar(rule: Option<&str>) -> CliResult<ExitCode> {
    match rule {
        Some(name) => {
            let Some(rule) = grammar::rule_named(name) else {
                return Err(CliError::failure(format!("Unknown grammar rule '{}'", name)));
            };
            print!("{}", render_rule(rule));
        }
        None => {
            for rule in grammar::GRAMMAR {
                print!("{}", render_rule(rule));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Rendering
// ============================================================================

/// One line per significant token (whitespace skipped, comments kept), plus a
/// count summary.
fn render_token_listing(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut significant = 0usize;
    for tok in tokens {
        if tok.kind == TokenKind::Whitespace {
            continue;
        }
        significant += 1;
        let _ = writeln!(
            out,
            "{:<12} {:?} @ {}:{}",
            tok.kind.to_string(),
            tok.value,
            tok.line,
            tok.column
        );
    }
    let _ = writeln!(out, "{significant} significant tokens");
    out
}

/// Fancy reports for every recorded error, followed by a count summary.
fn render_errors(file_path: &str, source: &str, result: &ParseResult) -> String {
    let mut msg = String::new();
    for err in &result.errors {
        let report = err.to_report(file_path, source);
        let _ = write!(msg, "{report:?}");
    }
    let _ = write!(msg, "{} syntax error(s)", result.errors.len());
    msg
}

fn render_rule(rule: &grammar::GrammarRule) -> String {
    let mut out = format!("{}:\n", rule.name);
    for production in rule.productions {
        let _ = writeln!(out, "  | {}", production);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_token_listing_format() {
        let listing = render_token_listing(&lexer::lex("let x = 1;"));
        insta::assert_snapshot!(listing.trim_end(), @r#"
        KEYWORD      "let" @ 1:1
        IDENTIFIER   "x" @ 1:5
        OPERATOR     "=" @ 1:7
        NUMBER       "1" @ 1:9
        PUNCTUATION  ";" @ 1:10
        5 significant tokens
        "#);
    }

    #[test]
    fn test_rule_rendering() {
        let rule = grammar::rule_named("Program").unwrap();
        insta::assert_snapshot!(render_rule(rule).trim_end(), @r"
        Program:
          | Statement*
        ");
    }

    #[test]
    fn test_error_rendering_includes_count() {
        let source = "let ;";
        let result = parser::parse(&lexer::lex(source));
        assert!(!result.success);
        let rendered = render_errors("broken.scr", source, &result);
        assert!(rendered.contains("syntax error(s)"));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("definitely/not/here.scr").unwrap_err();
        assert!(err.message.contains("Cannot access file"));
    }
}
