//! Provide the canonical language vocabulary for the scriptic frontend.
//!
//! This crate is intentionally small and dependency-free. It is the single
//! source of truth for reserved words, operator spellings (and their ordering,
//! which the tokenizer depends on), punctuation, and the descriptive grammar
//! table exposed for documentation.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no tokenization, no AST types.
//! - The lexer/parser in `scriptic_syntax` enforce syntax; this crate only
//!   provides spellings and metadata for shared use (diagnostics, docs,
//!   introspection).

pub mod lang;
