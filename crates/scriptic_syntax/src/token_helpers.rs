//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive kind/value comparisons at parser
//! call sites. The grammar frequently dispatches on the token *value* (the
//! original text), so value-based checks get first-class helpers.

use crate::lexer::{Token, TokenKind};

impl Token {
    /// Return `true` if this token has the given kind.
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Return `true` if this token's text is exactly `value`, regardless of
    /// kind.
    pub fn is_value(&self, value: &str) -> bool {
        self.value == value
    }

    /// Return `true` if this token is the given reserved word.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value == word
    }

    /// Return `true` if this token is the given operator spelling.
    pub fn is_operator(&self, spelling: &str) -> bool {
        self.kind == TokenKind::Operator && self.value == spelling
    }

    /// Return `true` if this token is the given punctuation mark.
    pub fn is_punctuation(&self, mark: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.value == mark
    }
}
