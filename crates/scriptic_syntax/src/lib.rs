//! Shared syntax frontend: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the CLI and
//! future interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not do name
//!   resolution, evaluation, or any semantic analysis.
//! - Vocabulary identity (keywords/operators/punctuation) comes from
//!   `scriptic_core::lang` registries.
//! - Both stages are total: `lexer::lex` classifies arbitrary input without
//!   failing, and `parser::parse` reports syntax errors in the
//!   [`diagnostics::ParseResult`] it returns instead of raising them.
//!
//! ## Examples
//! ```rust
//! use scriptic_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("let x = 1;");
//! let result = parser::parse(&tokens);
//! assert!(result.success);
//! assert_eq!(result.ast.body.len(), 1);
//! ```
//!
//! ## See also
//! - `scriptic_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
