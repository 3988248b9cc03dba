//! Operator vocabulary.
//!
//! This module defines the operator spellings the tokenizer recognizes and a
//! metadata table ([`OPERATORS`]) recording precedence, associativity, and
//! fixity for the operators the parser gives semantics to.
//!
//! ## Ordering is load-bearing
//!
//! The tokenizer scans [`MULTI_CHAR`] front to back and takes the **first**
//! spelling that matches at the cursor, not the longest. The order below is
//! therefore part of the lexical contract and must not be "tidied up":
//!
//! - `>>` is listed before `>>>`, so the input `>>>` tokenizes as `>>`
//!   followed by `>`.
//! - `<<`, `>>`, `||`, and `&&` shadow their compound-assignment spellings:
//!   `<<=`, `>>=`, `>>>=`, `||=`, and `&&=` are listed but unreachable, and
//!   lex as the shorter operator followed by `=` (or `>=`).
//! - `??=` is listed before `??` and does win.
//!
//! ## Notes
//! - Precedence in [`OPERATORS`] is a relative ordering where higher binds
//!   tighter. The absolute scale is an implementation detail, but must be
//!   consistent with the parser's cascade.
//! - Assignment is recognized structurally by the parser (any `OPERATOR`
//!   token whose spelling contains `=`, checked after the equality and
//!   relational spellings are ruled out by position in the cascade); the
//!   `Assign` entry records the canonical spellings.
//!
//! ## Examples
//! ```rust
//! use scriptic_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("*"), Some(OperatorId::Star));
//! assert!(operators::info_for(OperatorId::Star).precedence
//!     > operators::info_for(OperatorId::Plus).precedence);
//! ```

/// Multi-character operator spellings in scan order (first match wins).
pub const MULTI_CHAR: &[&str] = &[
    "++", "--", "===", "!==", "==", "!=", "<=", ">=", "<<", ">>", ">>>", "&&", "||", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "**=", "<<=", ">>=", ">>>=", "??=", "||=", "&&=", "**", "??", "?.", "=>",
];

/// Single-character operator spellings, tried after every multi-character one.
pub const SINGLE_CHAR: &[char] = &['+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~', '?', '@'];

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// Define where an operator sits relative to its operand(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
    Postfix,
}

/// Stable identifier for every operator the parser has semantics for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment (simple + compound)
    Assign,

    // Logical
    OrOr,
    AndAnd,

    // Equality
    EqEq,
    NotEq,
    EqEqEq,
    NotEqEq,

    // Relational
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Additive
    Plus,
    Minus,

    // Multiplicative
    Star,
    Slash,
    Percent,

    // Prefix-only
    Bang,

    // Update (prefix and postfix)
    Increment,
    Decrement,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `spellings` may contain multiple accepted spellings for the same
///   operator id (the compound assignments all behave as `Assign`).
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spellings: &'static [&'static str],
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
}

/// Registry of parsed operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op(
        OperatorId::Assign,
        &["=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "**="],
        10,
        Associativity::Right,
        Fixity::Infix,
    ),
    // Logical
    op(OperatorId::OrOr, &["||"], 20, Associativity::Left, Fixity::Infix),
    op(OperatorId::AndAnd, &["&&"], 25, Associativity::Left, Fixity::Infix),
    // Equality
    op(OperatorId::EqEq, &["=="], 30, Associativity::Left, Fixity::Infix),
    op(OperatorId::NotEq, &["!="], 30, Associativity::Left, Fixity::Infix),
    op(OperatorId::EqEqEq, &["==="], 30, Associativity::Left, Fixity::Infix),
    op(OperatorId::NotEqEq, &["!=="], 30, Associativity::Left, Fixity::Infix),
    // Relational
    op(OperatorId::Lt, &["<"], 35, Associativity::Left, Fixity::Infix),
    op(OperatorId::Gt, &[">"], 35, Associativity::Left, Fixity::Infix),
    op(OperatorId::LtEq, &["<="], 35, Associativity::Left, Fixity::Infix),
    op(OperatorId::GtEq, &[">="], 35, Associativity::Left, Fixity::Infix),
    // Additive
    op(OperatorId::Plus, &["+"], 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::Minus, &["-"], 40, Associativity::Left, Fixity::Infix),
    // Multiplicative
    op(OperatorId::Star, &["*"], 45, Associativity::Left, Fixity::Infix),
    op(OperatorId::Slash, &["/"], 45, Associativity::Left, Fixity::Infix),
    op(OperatorId::Percent, &["%"], 45, Associativity::Left, Fixity::Infix),
    // Prefix-only (`+`, `-`, `++`, `--` also appear in prefix position; their
    // infix/update entries carry their table identity)
    op(OperatorId::Bang, &["!"], 50, Associativity::Right, Fixity::Prefix),
    // Update
    op(OperatorId::Increment, &["++"], 55, Associativity::None, Fixity::Postfix),
    op(OperatorId::Decrement, &["--"], 55, Associativity::None, Fixity::Postfix),
];

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a
///   programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve a spelling to its operator id, if the parser has semantics for it.
///
/// ## Notes
/// - Spellings the tokenizer accepts but the parser never interprets (e.g.
///   `?.`, `~`, `@`) resolve to `None`.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| {
            let spellings: &[&str] = o.spellings;
            spellings.contains(&s)
        })
        .map(|o| o.id)
}

/// Infix binding strength for a spelling, if it has one.
pub fn precedence_of(spelling: &str) -> Option<u8> {
    from_str(spelling).map(|id| info_for(id).precedence)
}

const fn op(
    id: OperatorId,
    spellings: &'static [&'static str],
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        precedence,
        associativity,
        fixity,
    }
}
