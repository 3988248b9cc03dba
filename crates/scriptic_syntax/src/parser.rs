//! Parser for the C-family scripting grammar.
//!
//! A recursive-descent parser over the lexer's token stream: one function per
//! statement form, plus a precedence cascade for expressions. Parsing is
//! total — syntax errors are recorded in the returned
//! [`ParseResult`](crate::diagnostics::ParseResult) and the parser recovers at
//! statement boundaries by skipping one token, so every input yields a
//! (possibly partial) tree.
//!
//! ## Examples
//!
//! ```rust
//! use scriptic_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("let answer = 42;");
//! let result = parser::parse(&tokens);
//! assert!(result.success);
//! assert_eq!(result.ast.body.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{ParseError, ParseResult, StatementAbort};
use crate::lexer::{Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
