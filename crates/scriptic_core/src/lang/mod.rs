//! Language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved
//! keywords, operator spellings, punctuation, and the descriptive grammar
//! table.
//!
//! The design goal is to avoid stringly-typed checks scattered across the
//! tokenizer/parser/tooling. Callers work with **stable IDs** (e.g.
//! [`keywords::KeywordId`]) and look up spellings/metadata via registry
//! tables. The one place where raw ordering matters (the tokenizer's
//! first-match operator scan) reads its ordered spelling lists from
//! [`operators`] so the ordering lives in exactly one place.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side
//!   effects.
//!
//! ## Examples
//! ```rust
//! use scriptic_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! ```

pub mod grammar;
pub mod keywords;
pub mod operators;
pub mod punctuation;
