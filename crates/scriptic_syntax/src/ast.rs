//! Abstract Syntax Tree definitions.
//!
//! The tree is owned and span-free: nodes record the text that matters to
//! them (identifier names, operator spellings, literal values) and nothing
//! else. Error positions live in the diagnostics produced alongside the
//! tree, not in the tree itself.
//!
//! Because the parser recovers from errors by consuming mismatched tokens,
//! a tree produced from broken input can contain garbage strings (e.g. a
//! `VariableDeclaration` whose `kind` is `";"`); consumers that care must
//! check the accompanying error list before trusting node contents.

/// An identifier occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A program is a sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// Statement forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `let|const|var x (= init)? ;?`
    VariableDeclaration {
        /// The declaring keyword as written (`let`, `const`, `var`).
        kind: String,
        id: Ident,
        init: Option<Expr>,
    },
    /// `function f(a, b) { ... }`
    FunctionDeclaration {
        id: Ident,
        params: Vec<Ident>,
        /// Always a `Stmt::Block` for well-formed input.
        body: Box<Stmt>,
    },
    If {
        test: Expr,
        consequent: Box<Stmt>,
        alternate: Option<Box<Stmt>>,
    },
    While {
        test: Expr,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        test: Expr,
    },
    For {
        init: Option<ForInit>,
        test: Option<Expr>,
        update: Option<Expr>,
        body: Box<Stmt>,
    },
    Block {
        body: Vec<Stmt>,
    },
    Expression {
        expression: Expr,
    },
    Try {
        /// Always a `Stmt::Block` for well-formed input.
        block: Box<Stmt>,
        handler: CatchClause,
    },
    Return {
        argument: Option<Expr>,
    },
    Break,
    Switch {
        discriminant: Expr,
        cases: Vec<SwitchCase>,
    },
}

/// The init slot of a `for` header: either a full variable declaration or a
/// bare expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Declaration(Box<Stmt>),
    Expression(Expr),
}

/// `catch (param) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub param: Ident,
    pub body: Box<Stmt>,
}

/// One `case expr:` or `default:` clause; `test` is `None` for `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub test: Option<Expr>,
    pub consequent: Vec<Stmt>,
}

/// Expression forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `left op= right`, right-associative; `operator` is the spelling as
    /// written (`=`, `+=`, ...).
    Assignment {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `test ? consequent : alternate`, right-associative in the alternate.
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    /// `||` / `&&`, left-associative.
    Logical {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Equality, relational, additive, multiplicative; left-associative.
    Binary {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Prefix `! - + ++ --`; `prefix` is always `true`.
    Unary {
        operator: String,
        argument: Box<Expr>,
        prefix: bool,
    },
    /// Postfix `++` / `--`; `prefix` is always `false`.
    Update {
        operator: String,
        argument: Box<Expr>,
        prefix: bool,
    },
    Identifier(Ident),
    Literal(LiteralValue),
    This,
    Array {
        elements: Vec<Expr>,
    },
    Object {
        properties: Vec<Property>,
    },
    /// `object.property`
    Member {
        object: Box<Expr>,
        property: Ident,
    },
    /// `callee(arguments...)`
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

/// A `key: value` pair in an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: Ident,
    pub value: Expr,
}

/// Literal values.
///
/// String literals keep their quotes exactly as written; numbers are decoded
/// by radix for the `0x`/`0b`/`0o` forms and as floating point otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
}
