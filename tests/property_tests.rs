//! Property-based tests for the Scriptic frontend
//!
//! These tests use proptest to verify the pipeline's totality invariants
//! across many randomly generated inputs, catching edge cases that
//! hand-written tests might miss.

use proptest::prelude::*;
use scriptic::{lexer, parser};
use scriptic_core::lang::keywords;

// Strategy for generating identifiers that are not reserved words
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]*".prop_filter("Not a reserved word", |s| !keywords::is_reserved(s))
}

proptest! {
    /// Property: Lexing is total and the token values reconstruct the source
    #[test]
    fn lexing_reconstructs_any_input(source in "\\PC*") {
        let tokens = lexer::lex(&source);
        let joined: String = tokens.iter().map(|t| t.value.as_str()).collect();
        prop_assert_eq!(joined, source);
    }

    /// Property: Tokens are non-empty and contiguous over the byte range
    #[test]
    fn token_offsets_are_contiguous(source in "\\PC*") {
        let mut next = 0usize;
        for tok in lexer::lex(&source) {
            prop_assert_eq!(tok.start, next);
            prop_assert!(!tok.value.is_empty());
            next = tok.end + 1;
        }
        prop_assert_eq!(next, source.len());
    }

    /// Property: Parsing is total; `success` tracks the error list exactly
    #[test]
    fn parsing_any_input_is_total(source in "\\PC*") {
        let result = parser::parse(&lexer::lex(&source));
        prop_assert_eq!(result.success, result.errors.is_empty());
    }

    /// Property: Generated declarations always parse as a single clean statement
    #[test]
    fn generated_declarations_parse_cleanly(
        name in ident_strategy(),
        value in 0u32..1000,
    ) {
        let source = format!("let {} = {};", name, value);
        let result = parser::parse(&lexer::lex(&source));
        prop_assert!(result.success, "errors: {:?}", result.errors);
        prop_assert_eq!(result.ast.body.len(), 1);
    }
}
