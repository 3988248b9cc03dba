/// Statement parsing.
///
/// One function per statement form, dispatched on the current token's text.
/// The trailing `;` is optional and consumed only by: variable declarations,
/// expression statements, `return`, `do`/`while`, `break`, and the
/// expression-init arm of `for` headers.
impl Parser {
    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_statement(&mut self) -> Result<Stmt, StatementAbort> {
        if self.current().is_none() {
            return Err(StatementAbort::new("Unexpected end of input"));
        }

        if self.check_value("let") || self.check_value("const") || self.check_value("var") {
            return self.parse_var_declaration();
        }
        if self.check_value("function") {
            return self.parse_function_declaration();
        }
        if self.check_value("if") {
            return self.parse_if_statement();
        }
        if self.check_value("while") {
            return self.parse_while_statement();
        }
        if self.check_value("for") {
            return self.parse_for_statement();
        }
        if self.check_value("{") {
            return self.parse_block_statement();
        }
        if self.check_value("try") {
            return self.parse_try_statement();
        }
        if self.check_value("return") {
            return self.parse_return_statement();
        }
        if self.check_value("switch") {
            return self.parse_switch_statement();
        }
        if self.check_value("do") {
            return self.parse_do_while_statement();
        }
        if self.check_value("break") {
            return self.parse_break_statement();
        }

        self.parse_expression_statement()
    }

    /// `let|const|var name (= expr)? ;?`
    fn parse_var_declaration(&mut self) -> Result<Stmt, StatementAbort> {
        let kind = self.expect(TokenKind::Keyword)?;
        let id = self.expect(TokenKind::Identifier)?;

        let mut init = None;
        if self.check_value("=") {
            self.expect(TokenKind::Operator)?;
            init = Some(self.parse_expression()?);
        }

        if self.check_value(";") {
            self.expect(TokenKind::Punctuation)?;
        }

        Ok(Stmt::VariableDeclaration {
            kind: kind.value,
            id: Ident::new(id.value),
            init,
        })
    }

    /// `function name(params) { ... }`
    fn parse_function_declaration(&mut self) -> Result<Stmt, StatementAbort> {
        self.expect(TokenKind::Keyword)?; // function
        let id = self.expect(TokenKind::Identifier)?;

        self.expect(TokenKind::Punctuation)?; // (

        let mut params = Vec::new();
        while !self.check_value(")") && self.current().is_some() {
            let param = self.expect(TokenKind::Identifier)?;
            params.push(Ident::new(param.value));
            if self.check_value(",") {
                self.expect(TokenKind::Punctuation)?;
            }
        }

        self.expect(TokenKind::Punctuation)?; // )
        let body = self.parse_block_statement()?;

        Ok(Stmt::FunctionDeclaration {
            id: Ident::new(id.value),
            params,
            body: Box::new(body),
        })
    }

    fn parse_if_statement(&mut self) -> Result<Stmt, StatementAbort> {
        self.expect(TokenKind::Keyword)?; // if
        self.expect(TokenKind::Punctuation)?; // (
        let test = self.parse_expression()?;
        self.expect(TokenKind::Punctuation)?; // )
        let consequent = Box::new(self.parse_statement()?);

        let mut alternate = None;
        if self.check_value("else") {
            self.expect(TokenKind::Keyword)?;
            alternate = Some(Box::new(self.parse_statement()?));
        }

        Ok(Stmt::If {
            test,
            consequent,
            alternate,
        })
    }

    fn parse_while_statement(&mut self) -> Result<Stmt, StatementAbort> {
        self.expect(TokenKind::Keyword)?; // while
        self.expect(TokenKind::Punctuation)?; // (
        let test = self.parse_expression()?;
        self.expect(TokenKind::Punctuation)?; // )
        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::While { test, body })
    }

    /// `for (init? ; test? ; update?) body`
    ///
    /// A declaration init consumes its own optional `;`; an expression init
    /// gets the same treatment here. The `;` after the test slot and the
    /// closing `)` are mandatory.
    fn parse_for_statement(&mut self) -> Result<Stmt, StatementAbort> {
        self.expect(TokenKind::Keyword)?; // for
        self.expect(TokenKind::Punctuation)?; // (

        let mut init = None;
        if !self.check_value(";") {
            if self.check_value("let") || self.check_value("const") || self.check_value("var") {
                init = Some(ForInit::Declaration(Box::new(self.parse_var_declaration()?)));
            } else {
                let expression = self.parse_expression()?;
                if self.check_value(";") {
                    self.expect(TokenKind::Punctuation)?;
                }
                init = Some(ForInit::Expression(expression));
            }
        } else {
            self.expect(TokenKind::Punctuation)?;
        }

        let mut test = None;
        if !self.check_value(";") {
            test = Some(self.parse_expression()?);
        }
        self.expect(TokenKind::Punctuation)?; // ;

        let mut update = None;
        if !self.check_value(")") {
            update = Some(self.parse_expression()?);
        }
        self.expect(TokenKind::Punctuation)?; // )

        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::For {
            init,
            test,
            update,
            body,
        })
    }

    fn parse_block_statement(&mut self) -> Result<Stmt, StatementAbort> {
        self.expect(TokenKind::Punctuation)?; // {

        let mut body = Vec::new();
        while !self.check_value("}") && self.current().is_some() {
            body.push(self.parse_statement()?);
        }

        self.expect(TokenKind::Punctuation)?; // }

        Ok(Stmt::Block { body })
    }

    /// `try { ... } catch (param) { ... }` — the handler is mandatory.
    fn parse_try_statement(&mut self) -> Result<Stmt, StatementAbort> {
        self.expect(TokenKind::Keyword)?; // try
        let block = Box::new(self.parse_block_statement()?);

        self.expect(TokenKind::Keyword)?; // catch
        self.expect(TokenKind::Punctuation)?; // (
        let param = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Punctuation)?; // )
        let body = Box::new(self.parse_block_statement()?);

        Ok(Stmt::Try {
            block,
            handler: CatchClause {
                param: Ident::new(param.value),
                body,
            },
        })
    }

    fn parse_return_statement(&mut self) -> Result<Stmt, StatementAbort> {
        self.expect(TokenKind::Keyword)?; // return

        let mut argument = None;
        if !self.check_value(";") && self.current().is_some() {
            argument = Some(self.parse_expression()?);
        }

        if self.check_value(";") {
            self.expect(TokenKind::Punctuation)?;
        }

        Ok(Stmt::Return { argument })
    }

    /// `switch (expr) { case expr: ...* | default: ...* }`
    ///
    /// A clause's statement list runs until the next `case`/`default`/`}`.
    /// Any other token at clause position is skipped unchecked, so stray
    /// tokens between clauses do not kill the whole switch.
    fn parse_switch_statement(&mut self) -> Result<Stmt, StatementAbort> {
        self.expect(TokenKind::Keyword)?; // switch
        self.expect(TokenKind::Punctuation)?; // (
        let discriminant = self.parse_expression()?;
        self.expect(TokenKind::Punctuation)?; // )

        self.expect(TokenKind::Punctuation)?; // {
        let mut cases = Vec::new();

        while !self.check_value("}") && self.current().is_some() {
            if self.check_value("case") || self.check_value("default") {
                let is_default = self.check_value("default");
                self.expect(TokenKind::Keyword)?; // case/default

                let mut test = None;
                if !is_default {
                    test = Some(self.parse_expression()?);
                }

                self.expect(TokenKind::Punctuation)?; // :

                let mut consequent = Vec::new();
                while !self.check_value("case")
                    && !self.check_value("default")
                    && !self.check_value("}")
                    && self.current().is_some()
                {
                    consequent.push(self.parse_statement()?);
                }

                cases.push(SwitchCase { test, consequent });
            } else {
                self.advance();
            }
        }

        self.expect(TokenKind::Punctuation)?; // }

        Ok(Stmt::Switch {
            discriminant,
            cases,
        })
    }

    fn parse_do_while_statement(&mut self) -> Result<Stmt, StatementAbort> {
        self.expect(TokenKind::Keyword)?; // do
        let body = Box::new(self.parse_statement()?);
        self.expect(TokenKind::Keyword)?; // while
        self.expect(TokenKind::Punctuation)?; // (
        let test = self.parse_expression()?;
        self.expect(TokenKind::Punctuation)?; // )
        if self.check_value(";") {
            self.expect(TokenKind::Punctuation)?;
        }

        Ok(Stmt::DoWhile { body, test })
    }

    fn parse_break_statement(&mut self) -> Result<Stmt, StatementAbort> {
        self.expect(TokenKind::Keyword)?; // break
        if self.check_value(";") {
            self.expect(TokenKind::Punctuation)?;
        }
        Ok(Stmt::Break)
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, StatementAbort> {
        let expression = self.parse_expression()?;
        if self.check_value(";") {
            self.expect(TokenKind::Punctuation)?;
        }
        Ok(Stmt::Expression { expression })
    }
}
