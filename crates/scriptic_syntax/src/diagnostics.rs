//! Parse diagnostics and the parse result envelope.
//!
//! Errors are data, not control flow: the parser accumulates [`ParseError`]
//! values and always returns a [`ParseResult`] with whatever tree it managed
//! to build. The only "throwing" path is the crate-internal statement abort,
//! which the statement loop catches to drive recovery.

use std::fmt;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::Program;
use crate::lexer::Token;

// ============================================================================
// ERROR KINDS
// ============================================================================

/// Classification of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A checked consume saw a token of the wrong kind (and consumed it).
    UnexpectedToken,
    /// A checked consume ran out of tokens.
    UnexpectedEof,
    /// A statement was abandoned; recovery skipped one token and resumed.
    StatementError,
    /// The outer catch-all around the whole parse.
    ParseError,
}

impl ParseErrorKind {
    /// Stable machine-readable code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedToken => "UNEXPECTED_TOKEN",
            ParseErrorKind::UnexpectedEof => "UNEXPECTED_EOF",
            ParseErrorKind::StatementError => "STATEMENT_ERROR",
            ParseErrorKind::ParseError => "PARSE_ERROR",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// PARSE ERROR
// ============================================================================

/// A recorded parse error.
///
/// `line`/`column` come from the offending token when one is attached and are
/// both `0` otherwise (end of input, or the outer catch-all).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{kind}] {message} (line {line}, column {column})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub token: Option<Token>,
}

impl ParseError {
    fn at(kind: ParseErrorKind, message: impl Into<String>, token: Option<&Token>) -> Self {
        let (line, column) = token.map(|t| (t.line, t.column)).unwrap_or((0, 0));
        Self {
            kind,
            message: message.into(),
            line,
            column,
            token: token.cloned(),
        }
    }

    pub fn unexpected_token(message: impl Into<String>, token: &Token) -> Self {
        Self::at(ParseErrorKind::UnexpectedToken, message, Some(token))
    }

    pub fn unexpected_eof(message: impl Into<String>) -> Self {
        Self::at(ParseErrorKind::UnexpectedEof, message, None)
    }

    pub fn statement_error(message: impl Into<String>, token: Option<&Token>) -> Self {
        Self::at(ParseErrorKind::StatementError, message, token)
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::at(ParseErrorKind::ParseError, message, None)
    }

    /// Render this error as a fancy [`miette::Report`] against the source it
    /// was produced from. Errors without a token are labeled at end of input.
    pub fn to_report(&self, name: &str, source: &str) -> miette::Report {
        let span: SourceSpan = match &self.token {
            Some(token) => (token.start, token.len()).into(),
            None => (source.len(), 0).into(),
        };
        LabeledParseError {
            message: self.message.clone(),
            label: self.kind.code().to_string(),
            src: NamedSource::new(name, source.to_string()),
            span,
        }
        .into()
    }
}

/// Owned, source-attached rendition of a [`ParseError`] for terminal output.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
struct LabeledParseError {
    message: String,
    label: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: SourceSpan,
}

// ============================================================================
// STATEMENT ABORT (crate-internal control flow)
// ============================================================================

/// Raised (as an `Err`) when a statement cannot continue: checked consume at
/// end of input, or no primary-expression rule applies. The statement loop
/// catches it, records a `STATEMENT_ERROR`, and skips one token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StatementAbort {
    pub(crate) message: String,
}

impl StatementAbort {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// PARSE RESULT
// ============================================================================

/// What a parse run produced: the (possibly partial) tree, every recorded
/// error in encounter order, and a success flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub ast: Program,
    pub errors: Vec<ParseError>,
    /// `true` exactly when `errors` is empty.
    pub success: bool,
}

impl ParseResult {
    pub fn new(ast: Program, errors: Vec<ParseError>) -> Self {
        let success = errors.is_empty();
        Self {
            ast,
            errors,
            success,
        }
    }
}
