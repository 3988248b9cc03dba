/// Token-stream helpers and the checked consume.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// peeking, advancing, value/kind checks, and `expect` — the checked consume
/// whose recovery behavior defines how broken input flows through the parser.
impl Parser {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token without consuming it, if any.
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the current token; `None` at end of input.
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Return `true` if the current token's text is exactly `value`.
    ///
    /// The grammar dispatches on token text for keywords, operator spellings,
    /// and punctuation marks alike; kind is not consulted here.
    fn check_value(&self, value: &str) -> bool {
        self.current().is_some_and(|t| t.is_value(value))
    }

    /// Return `true` if the current token has the given kind.
    fn check_kind(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.is_kind(kind))
    }

    /// Checked consume.
    ///
    /// Consumes the current token regardless of kind. On a kind mismatch an
    /// `UNEXPECTED_TOKEN` error is recorded and the mismatched token is still
    /// returned, so downstream nodes may carry text from the wrong token —
    /// the accompanying error list is the source of truth for validity. At
    /// end of input there is nothing to return: an `UNEXPECTED_EOF` error is
    /// recorded and the statement aborts.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, StatementAbort> {
        let Some(token) = self.advance() else {
            let message = format!("Expected {kind}, but reached end of input");
            self.errors.push(ParseError::unexpected_eof(message.clone()));
            return Err(StatementAbort::new(message));
        };
        if token.kind != kind {
            self.errors.push(ParseError::unexpected_token(
                format!("Expected {kind}, but got {} \"{}\"", token.kind, token.value),
                &token,
            ));
        }
        Ok(token)
    }
}
