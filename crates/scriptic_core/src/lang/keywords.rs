//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable
//! identifier ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that
//! records canonical spellings and categories.
//!
//! The set covers every word the tokenizer classifies as `KEYWORD`, including
//! words that are reserved but never parsed into any construct (the
//! `Reserved` category). Reservation happens at the lexical level: an
//! identifier-shaped lexeme that appears in this registry tokenizes as a
//! keyword everywhere, so `lets` is an identifier while `let` never is.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use scriptic_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Let));
//! assert_eq!(keywords::from_str("lets"), None);
//! assert_eq!(keywords::as_str(KeywordId::Let), "let");
//! ```
//!
//! ## See also
//! - [`crate::lang::operators`] for operator spellings and precedence metadata.

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    Break,
    Case,
    Catch,
    Continue,
    Debugger,
    Default,
    Do,
    Else,
    Finally,
    For,
    Goto,
    If,
    Return,
    Switch,
    Throw,
    Try,
    While,
    With,

    // Definitions / declarations
    Async,
    Class,
    Const,
    Enum,
    Export,
    Extends,
    Function,
    Import,
    Interface,
    Let,
    Var,

    // Literals
    False,
    Null,
    True,

    // Word operators
    Await,
    Delete,
    In,
    Instanceof,
    New,
    Of,
    Typeof,
    Void,
    Yield,

    // Expression-position words
    Arguments,
    Eval,
    Super,
    This,

    // Reserved, never parsed into any construct
    Abstract,
    Boolean,
    Byte,
    Char,
    Double,
    Final,
    Float,
    Implements,
    Int,
    Long,
    Native,
    Package,
    Private,
    Protected,
    Public,
    Short,
    Static,
    Synchronized,
    Throws,
    Transient,
    Volatile,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Declaration,
    Literal,
    Operator,
    Expression,
    /// Reserved for compatibility; recognized by the tokenizer but parsed
    /// nowhere.
    Reserved,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved words.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for
///   readability. Reservation is a membership test, not a first-match scan.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    info(KeywordId::Catch, "catch", KeywordCategory::ControlFlow),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    info(KeywordId::Debugger, "debugger", KeywordCategory::ControlFlow),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::Finally, "finally", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Goto, "goto", KeywordCategory::ControlFlow),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
    info(KeywordId::Throw, "throw", KeywordCategory::ControlFlow),
    info(KeywordId::Try, "try", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::With, "with", KeywordCategory::ControlFlow),
    // Definitions / declarations
    info(KeywordId::Async, "async", KeywordCategory::Declaration),
    info(KeywordId::Class, "class", KeywordCategory::Declaration),
    info(KeywordId::Const, "const", KeywordCategory::Declaration),
    info(KeywordId::Enum, "enum", KeywordCategory::Declaration),
    info(KeywordId::Export, "export", KeywordCategory::Declaration),
    info(KeywordId::Extends, "extends", KeywordCategory::Declaration),
    info(KeywordId::Function, "function", KeywordCategory::Declaration),
    info(KeywordId::Import, "import", KeywordCategory::Declaration),
    info(KeywordId::Interface, "interface", KeywordCategory::Declaration),
    info(KeywordId::Let, "let", KeywordCategory::Declaration),
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
    // Literals
    info(KeywordId::False, "false", KeywordCategory::Literal),
    info(KeywordId::Null, "null", KeywordCategory::Literal),
    info(KeywordId::True, "true", KeywordCategory::Literal),
    // Word operators
    info(KeywordId::Await, "await", KeywordCategory::Operator),
    info(KeywordId::Delete, "delete", KeywordCategory::Operator),
    info(KeywordId::In, "in", KeywordCategory::Operator),
    info(KeywordId::Instanceof, "instanceof", KeywordCategory::Operator),
    info(KeywordId::New, "new", KeywordCategory::Operator),
    info(KeywordId::Of, "of", KeywordCategory::Operator),
    info(KeywordId::Typeof, "typeof", KeywordCategory::Operator),
    info(KeywordId::Void, "void", KeywordCategory::Operator),
    info(KeywordId::Yield, "yield", KeywordCategory::Operator),
    // Expression-position words
    info(KeywordId::Arguments, "arguments", KeywordCategory::Expression),
    info(KeywordId::Eval, "eval", KeywordCategory::Expression),
    info(KeywordId::Super, "super", KeywordCategory::Expression),
    info(KeywordId::This, "this", KeywordCategory::Expression),
    // Reserved, never parsed
    info(KeywordId::Abstract, "abstract", KeywordCategory::Reserved),
    info(KeywordId::Boolean, "boolean", KeywordCategory::Reserved),
    info(KeywordId::Byte, "byte", KeywordCategory::Reserved),
    info(KeywordId::Char, "char", KeywordCategory::Reserved),
    info(KeywordId::Double, "double", KeywordCategory::Reserved),
    info(KeywordId::Final, "final", KeywordCategory::Reserved),
    info(KeywordId::Float, "float", KeywordCategory::Reserved),
    info(KeywordId::Implements, "implements", KeywordCategory::Reserved),
    info(KeywordId::Int, "int", KeywordCategory::Reserved),
    info(KeywordId::Long, "long", KeywordCategory::Reserved),
    info(KeywordId::Native, "native", KeywordCategory::Reserved),
    info(KeywordId::Package, "package", KeywordCategory::Reserved),
    info(KeywordId::Private, "private", KeywordCategory::Reserved),
    info(KeywordId::Protected, "protected", KeywordCategory::Reserved),
    info(KeywordId::Public, "public", KeywordCategory::Reserved),
    info(KeywordId::Short, "short", KeywordCategory::Reserved),
    info(KeywordId::Static, "static", KeywordCategory::Reserved),
    info(KeywordId::Synchronized, "synchronized", KeywordCategory::Reserved),
    info(KeywordId::Throws, "throws", KeywordCategory::Reserved),
    info(KeywordId::Transient, "transient", KeywordCategory::Reserved),
    info(KeywordId::Volatile, "volatile", KeywordCategory::Reserved),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a
///   programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Resolve a spelling to its keyword id.
///
/// ## Notes
/// - Matching is **case-sensitive**: `"If"` is an identifier, not a keyword.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Return `true` if `s` is a reserved word.
pub fn is_reserved(s: &str) -> bool {
    from_str(s).is_some()
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_all_sixty_six_words() {
        assert_eq!(KEYWORDS.len(), 66);
    }

    #[test]
    fn spellings_are_unique() {
        for (i, a) in KEYWORDS.iter().enumerate() {
            for b in &KEYWORDS[i + 1..] {
                assert_ne!(a.canonical, b.canonical, "duplicate spelling {:?}", a.canonical);
            }
        }
    }

    #[test]
    fn lookup_roundtrips() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn lookup_is_case_sensitive_and_whole_word() {
        assert_eq!(from_str("If"), None);
        assert_eq!(from_str("lets"), None);
        assert_eq!(from_str("constant"), None);
        assert!(is_reserved("of"));
        assert!(is_reserved("async"));
    }
}
