//! Token types for the lexer.
//!
//! Tokens carry their exact matched text: concatenating `value` over a token
//! stream, in order, reconstructs the source byte for byte. That invariant is
//! what lets downstream consumers (highlighting, error labeling) trust token
//! offsets without re-scanning the source.

use std::fmt;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
///
/// ## Notes
/// - `Whitespace` and `Comment` are real tokens (the stream has total
///   coverage); the parser filters them out up front.
/// - `Unknown` is the single-character fallback for input no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Comment,
    Keyword,
    Identifier,
    Number,
    String,
    Operator,
    Punctuation,
    Unknown,
}

impl TokenKind {
    /// Return `true` for tokens the parser never sees.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// Prints the classic uppercase class name (`KEYWORD`, `NUMBER`, ...), used
/// in token listings and in parser error messages.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// A classified, positioned substring of the source.
///
/// `start`/`end` are 0-based byte offsets with `end` **inclusive**
/// (`end = start + value.len() - 1`). `line`/`column` are 1-based, counted in
/// characters, and refer to the token's first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// Construct a token; `end` is derived from `start` and the value length.
    pub fn new(kind: TokenKind, value: String, start: usize, line: usize, column: usize) -> Self {
        let end = start + value.len().saturating_sub(1);
        Self {
            kind,
            value,
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the matched text in bytes.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// A token always covers at least one byte.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
