/// Expression parsing: the precedence cascade.
///
/// Each tier parses its operands at the next-tighter tier and loops (or
/// recurses, for the right-associative tiers) on its own operators. From
/// loosest to tightest: assignment → conditional → `||` → `&&` → equality →
/// relational → additive → multiplicative → unary → postfix → primary.
impl Parser {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn parse_expression(&mut self) -> Result<Expr, StatementAbort> {
        self.parse_assignment()
    }

    /// Right-associative. Any operator token whose text contains `=` counts
    /// as an assignment operator here; the genuine comparison spellings never
    /// reach this check because the tiers below have already consumed them.
    fn parse_assignment(&mut self) -> Result<Expr, StatementAbort> {
        let left = self.parse_conditional()?;

        if self.check_kind(TokenKind::Operator) && self.current().is_some_and(|t| t.value.contains('=')) {
            let operator = self.expect(TokenKind::Operator)?;
            let right = self.parse_assignment()?;
            return Ok(Expr::Assignment {
                operator: operator.value,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    /// `test ? consequent : alternate`, right-associative via the recursive
    /// alternate. `?` is an operator token, `:` is punctuation.
    fn parse_conditional(&mut self) -> Result<Expr, StatementAbort> {
        let test = self.parse_logical_or()?;

        if self.check_value("?") {
            self.expect(TokenKind::Operator)?;
            let consequent = self.parse_expression()?;
            self.expect(TokenKind::Punctuation)?; // :
            let alternate = self.parse_conditional()?;
            return Ok(Expr::Conditional {
                test: Box::new(test),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
            });
        }

        Ok(test)
    }

    fn parse_logical_or(&mut self) -> Result<Expr, StatementAbort> {
        let mut left = self.parse_logical_and()?;

        while self.check_value("||") {
            let operator = self.expect(TokenKind::Operator)?;
            let right = self.parse_logical_and()?;
            left = Expr::Logical {
                operator: operator.value,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_logical_and(&mut self) -> Result<Expr, StatementAbort> {
        let mut left = self.parse_equality()?;

        while self.check_value("&&") {
            let operator = self.expect(TokenKind::Operator)?;
            let right = self.parse_equality()?;
            left = Expr::Logical {
                operator: operator.value,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, StatementAbort> {
        let mut left = self.parse_relational()?;

        while self.check_value("==")
            || self.check_value("!=")
            || self.check_value("===")
            || self.check_value("!==")
        {
            let operator = self.expect(TokenKind::Operator)?;
            let right = self.parse_relational()?;
            left = Expr::Binary {
                operator: operator.value,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<Expr, StatementAbort> {
        let mut left = self.parse_additive()?;

        while self.check_value("<")
            || self.check_value(">")
            || self.check_value("<=")
            || self.check_value(">=")
        {
            let operator = self.expect(TokenKind::Operator)?;
            let right = self.parse_additive()?;
            left = Expr::Binary {
                operator: operator.value,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, StatementAbort> {
        let mut left = self.parse_multiplicative()?;

        while self.check_value("+") || self.check_value("-") {
            let operator = self.expect(TokenKind::Operator)?;
            let right = self.parse_multiplicative()?;
            left = Expr::Binary {
                operator: operator.value,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, StatementAbort> {
        let mut left = self.parse_unary()?;

        while self.check_value("*") || self.check_value("/") || self.check_value("%") {
            let operator = self.expect(TokenKind::Operator)?;
            let right = self.parse_unary()?;
            left = Expr::Binary {
                operator: operator.value,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Prefix operators, right-recursive so `!-a` nests naturally.
    fn parse_unary(&mut self) -> Result<Expr, StatementAbort> {
        if self.check_value("!")
            || self.check_value("-")
            || self.check_value("+")
            || self.check_value("++")
            || self.check_value("--")
        {
            let operator = self.expect(TokenKind::Operator)?;
            let argument = self.parse_unary()?;
            return Ok(Expr::Unary {
                operator: operator.value,
                argument: Box::new(argument),
                prefix: true,
            });
        }

        self.parse_postfix()
    }

    /// Postfix `++`/`--`, checked once — `a++++` leaves the second `++` for
    /// the enclosing tier.
    fn parse_postfix(&mut self) -> Result<Expr, StatementAbort> {
        let left = self.parse_primary()?;

        if self.check_value("++") || self.check_value("--") {
            let operator = self.expect(TokenKind::Operator)?;
            return Ok(Expr::Update {
                operator: operator.value,
                argument: Box::new(left),
                prefix: false,
            });
        }

        Ok(left)
    }

    /// Primary expressions, then the `.`/`(` member-call chain.
    fn parse_primary(&mut self) -> Result<Expr, StatementAbort> {
        let Some(token) = self.current().cloned() else {
            return Err(StatementAbort::new("Unexpected end of input"));
        };

        let mut expr = if token.kind == TokenKind::Identifier {
            self.advance();
            Expr::Identifier(Ident::new(token.value))
        } else if token.is_keyword("this") {
            self.advance();
            Expr::This
        } else if token.is_value("(") {
            self.expect(TokenKind::Punctuation)?; // (
            let inner = self.parse_expression()?;
            self.expect(TokenKind::Punctuation)?; // )
            inner
        } else if token.kind == TokenKind::String {
            self.advance();
            Expr::Literal(LiteralValue::String(token.value))
        } else if token.kind == TokenKind::Number {
            self.advance();
            Expr::Literal(LiteralValue::Number(number_value(&token.value)))
        } else if token.is_keyword("true") || token.is_keyword("false") || token.is_keyword("null") {
            self.advance();
            Expr::Literal(match token.value.as_str() {
                "true" => LiteralValue::Bool(true),
                "false" => LiteralValue::Bool(false),
                _ => LiteralValue::Null,
            })
        } else if token.is_value("[") {
            self.parse_array_literal()?
        } else if token.is_value("{") {
            self.parse_object_literal()?
        } else {
            return Err(StatementAbort::new(format!(
                "Unexpected token in primary expression: {}",
                token.value
            )));
        };

        // Member/call chain: `.name` and `(args)` bind tighter than any
        // operator tier and may interleave freely.
        loop {
            if self.check_value(".") {
                self.expect(TokenKind::Punctuation)?; // .
                let property = self.expect(TokenKind::Identifier)?;
                expr = Expr::Member {
                    object: Box::new(expr),
                    property: Ident::new(property.value),
                };
            } else if self.check_value("(") {
                self.expect(TokenKind::Punctuation)?; // (
                let mut arguments = Vec::new();
                while !self.check_value(")") && self.current().is_some() {
                    arguments.push(self.parse_expression()?);
                    if self.check_value(",") {
                        self.expect(TokenKind::Punctuation)?;
                    } else {
                        break;
                    }
                }
                self.expect(TokenKind::Punctuation)?; // )
                expr = Expr::Call {
                    callee: Box::new(expr),
                    arguments,
                };
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// `[a, b, c]` — a missing comma ends the element list.
    fn parse_array_literal(&mut self) -> Result<Expr, StatementAbort> {
        self.expect(TokenKind::Punctuation)?; // [

        let mut elements = Vec::new();
        while !self.check_value("]") && self.current().is_some() {
            elements.push(self.parse_expression()?);
            if self.check_value(",") {
                self.expect(TokenKind::Punctuation)?;
            } else {
                break;
            }
        }

        self.expect(TokenKind::Punctuation)?; // ]
        Ok(Expr::Array { elements })
    }

    /// `{ key: value, ... }` — keys are bare identifiers.
    fn parse_object_literal(&mut self) -> Result<Expr, StatementAbort> {
        self.expect(TokenKind::Punctuation)?; // {

        let mut properties = Vec::new();
        while !self.check_value("}") && self.current().is_some() {
            let key = self.expect(TokenKind::Identifier)?;
            self.expect(TokenKind::Punctuation)?; // :
            let value = self.parse_expression()?;

            properties.push(Property {
                key: Ident::new(key.value),
                value,
            });

            if self.check_value(",") {
                self.expect(TokenKind::Punctuation)?;
            } else {
                break;
            }
        }

        self.expect(TokenKind::Punctuation)?; // }
        Ok(Expr::Object { properties })
    }
}

/// Decode a number token's text. The base-prefixed forms parse by radix; the
/// decimal form (including `.`/exponent) parses as floating point. The lexer
/// only produces texts these paths accept, so the fallback `NAN` is for
/// garbage tokens routed here by error recovery.
fn number_value(text: &str) -> f64 {
    for (prefixes, radix) in [(["0x", "0X"], 16), (["0b", "0B"], 2), (["0o", "0O"], 8)] {
        for prefix in prefixes {
            if let Some(digits) = text.strip_prefix(prefix) {
                return i64::from_str_radix(digits, radix)
                    .map(|v| v as f64)
                    .unwrap_or(f64::NAN);
            }
        }
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}
