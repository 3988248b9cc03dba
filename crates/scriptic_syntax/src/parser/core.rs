// Parser core type and entrypoint.
//
// This chunk defines the [`Parser`] type, its top-level `parse()`, and the
// statement loop that drives error recovery.

/// Parser state.
///
/// ## Notes
/// - Trivia (whitespace and comments) is filtered out up front; `pos` indexes
///   into the significant tokens only.
/// - The parser never gives up: a statement that cannot be completed aborts to
///   the statement loop, which records the failure and skips one token.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Raw token stream produced by `scriptic_syntax::lexer`;
    ///   whitespace and comment tokens are dropped here.
    pub fn new(tokens: &[Token]) -> Self {
        Self {
            tokens: tokens
                .iter()
                .filter(|t| !t.kind.is_trivia())
                .cloned()
                .collect(),
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`ParseResult`].
    ///
    /// The outer match is the program-level safety net: an abort that escapes
    /// the statement loop is recorded as a `PARSE_ERROR` and an empty program
    /// is returned in place of the tree.
    pub fn parse(mut self) -> ParseResult {
        let ast = match self.parse_program() {
            Ok(program) => program,
            Err(abort) => {
                self.errors.push(ParseError::parse_error(abort.message));
                Program::default()
            }
        };
        ParseResult::new(ast, self.errors)
    }

    /// The statement loop. One statement per iteration; on abort, record a
    /// `STATEMENT_ERROR` at the current token and skip exactly one token so
    /// the next iteration makes progress.
    fn parse_program(&mut self) -> Result<Program, StatementAbort> {
        let mut body = Vec::new();
        while self.pos < self.tokens.len() {
            match self.parse_statement() {
                Ok(stmt) => body.push(stmt),
                Err(abort) => {
                    let at = self.current().cloned();
                    tracing::debug!(
                        message = %abort.message,
                        pos = self.pos,
                        "statement abort, skipping one token"
                    );
                    self.errors
                        .push(ParseError::statement_error(abort.message, at.as_ref()));
                    self.pos += 1;
                }
            }
        }
        Ok(Program { body })
    }
}
