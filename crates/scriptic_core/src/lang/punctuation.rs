//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation marks:
//! delimiters, separators, and the member-access dot. Every punctuation mark
//! is a single character; the tokenizer tests membership in [`CHARS`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - `:` is punctuation here (ternary arms, object literals, switch clauses),
//!   while `?` is an operator spelling; the two halves of `?:` live in
//!   different token classes.
//!
//! ## Examples
//! ```rust
//! use scriptic_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_str(PunctuationId::LBrace), "{");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets, braces, parens.
    Delimiter,
    /// Separators like `,`, `:`, `;`.
    Separator,
    /// Member access (`.`).
    Access,
}

/// Stable identifier for punctuation marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Delimiters
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,

    // Separators
    Colon,
    Comma,
    Semicolon,

    // Access
    Dot,
}

/// Metadata for a punctuation mark.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation marks.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Delimiters
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    // Separators
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    // Access
    info(PunctuationId::Dot, ".", PunctuationCategory::Access),
];

/// The punctuation character set, for single-character membership tests.
pub const CHARS: &[char] = &['{', '}', '(', ')', '[', ']', ':', '.', ',', ';'];

/// Return the canonical spelling for a punctuation mark.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation mark.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation mark.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a
///   programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Return `true` if `c` is a punctuation character.
pub fn is_punctuation_char(c: char) -> bool {
    CHARS.contains(&c)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
