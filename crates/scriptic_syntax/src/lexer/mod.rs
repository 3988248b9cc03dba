//! Lexer for the C-family scripting grammar.
//!
//! Handles tokenization including:
//! - Reserved words and identifiers
//! - Numeric literals (hex, binary, octal, decimal with exponent)
//! - String literals (template, double-, and single-quoted)
//! - Operators (multi-character before single-character) and punctuation
//! - Whitespace and comments as first-class tokens
//!
//! ## First match wins
//!
//! The scanner tries a **fixed, ordered** list of rules at the cursor and
//! takes the first one that matches — not the longest match. The ordering is
//! a correctness mechanism: reserved words are tested before the generic
//! identifier rule, number bases before the decimal rule, and multi-character
//! operators (in the exact order of `scriptic_core::lang::operators::MULTI_CHAR`)
//! before single-character ones. When nothing matches, a one-character
//! `UNKNOWN` token is emitted, so the scanner can never get stuck and the
//! token stream always covers the source exactly.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `rules` - The anchored per-rule matchers

mod rules;
pub mod tokens;

pub use tokens::{Token, TokenKind};

use scriptic_core::lang::keywords;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer over a source string.
///
/// Maintains a byte cursor into the source plus running 1-based line/column
/// counters. Position counters advance by walking each emitted value
/// character by character, so tokens whose text embeds newlines (block
/// comments, multi-line strings) keep the counters correct.
pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// Total: never fails, always terminates, and the concatenated token
    /// values reproduce the source exactly.
    pub fn tokenize(mut self) -> Vec<Token> {
        while self.offset < self.source.len() {
            let len = self.scan_token();
            debug_assert!(len > 0, "every rule must consume at least one byte");
        }
        self.tokens
    }

    /// Classify the text at the cursor and emit one token. Returns the
    /// number of bytes consumed.
    fn scan_token(&mut self) -> usize {
        let rest = &self.source[self.offset..];
        let (kind, len) = classify(rest);
        self.push_token(kind, len);
        len
    }

    fn push_token(&mut self, kind: TokenKind, len: usize) {
        let value = &self.source[self.offset..self.offset + len];
        let token = Token::new(kind, value.to_string(), self.offset, self.line, self.column);

        for c in value.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += len;
        self.tokens.push(token);
    }
}

/// The ordered rule list. Returns the token kind and matched byte length for
/// the text at the cursor; falls back to a one-character `Unknown` token.
fn classify(rest: &str) -> (TokenKind, usize) {
    if let Some(len) = rules::whitespace(rest) {
        return (TokenKind::Whitespace, len);
    }
    if let Some(len) = rules::line_comment(rest) {
        return (TokenKind::Comment, len);
    }
    if let Some(len) = rules::block_comment(rest) {
        return (TokenKind::Comment, len);
    }
    // Reserved words are word-boundary matched: the full identifier-shaped
    // lexeme is scanned first, then tested for registry membership, so `lets`
    // stays an identifier.
    if let Some(len) = rules::word(rest) {
        let kind = if keywords::is_reserved(&rest[..len]) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        return (kind, len);
    }
    if let Some(len) = rules::number(rest) {
        return (TokenKind::Number, len);
    }
    if let Some(len) = rules::string(rest) {
        return (TokenKind::String, len);
    }
    if let Some(len) = rules::multi_char_operator(rest) {
        return (TokenKind::Operator, len);
    }
    if let Some(len) = rules::single_char_operator(rest) {
        return (TokenKind::Operator, len);
    }
    if let Some(len) = rules::punctuation(rest) {
        return (TokenKind::Punctuation, len);
    }

    // Fallback: one character of kind UNKNOWN (guaranteed forward progress).
    let len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
    (TokenKind::Unknown, len)
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
