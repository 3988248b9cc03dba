#![forbid(unsafe_code)]
//! Scriptic: tokenizer and parser for a C-family scripting language.
//!
//! The heavy lifting lives in the workspace member crates:
//!
//! - `scriptic_core` - language vocabulary registries (keywords, operators,
//!   punctuation) and the documentation-only grammar table
//! - `scriptic_syntax` - the lexer, parser, AST, and diagnostics
//!
//! This crate wires them into a command-line tool. Both pipeline stages are
//! total: the lexer classifies arbitrary input without failing, and the
//! parser reports syntax errors in its result instead of raising them, so
//! every command has output for broken input too.
//!
//! ## Panic Policy
//!
//! Production code uses `Result` or `Option` with `?` / `ok_or` / `map_err`;
//! the `cli` module enforces `#![deny(clippy::unwrap_used)]`. `.unwrap()` and
//! `.expect()` are acceptable in tests.

pub mod cli;

pub use scriptic_syntax::ast;
pub use scriptic_syntax::diagnostics;
pub use scriptic_syntax::lexer;
pub use scriptic_syntax::parser;
