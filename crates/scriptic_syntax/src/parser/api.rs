/// Parse a token stream into a [`ParseResult`].
///
/// This is the main public entrypoint for parsing. Pass the raw output of
/// `scriptic_syntax::lexer::lex`; whitespace and comment tokens are filtered
/// internally.
///
/// Parsing is total: syntax errors are recorded in the result's `errors`
/// list, `success` reflects whether that list is empty, and `ast` holds
/// whatever the recovery loop managed to build.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseResult {
    Parser::new(tokens).parse()
}

/// Convenience: lex and parse a source string in one call.
pub fn parse_source(source: &str) -> ParseResult {
    parse(&crate::lexer::lex(source))
}
