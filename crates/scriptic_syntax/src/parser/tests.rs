#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on correctness of specific syntactic forms, the shape of
/// the precedence cascade, and the parser's error recovery behavior (what
/// gets recorded, what gets skipped, and what still reaches the tree).
mod tests {
    use super::*;
    use crate::diagnostics::ParseErrorKind;

    fn parse_str(source: &str) -> ParseResult {
        parse_source(source)
    }

    fn single_expression(source: &str) -> Expr {
        let result = parse_str(source);
        assert!(result.success, "unexpected errors: {:?}", result.errors);
        assert_eq!(result.ast.body.len(), 1);
        match result.ast.body.into_iter().next() {
            Some(Stmt::Expression { expression }) => expression,
            other => panic!("Expected expression statement, got {other:?}"),
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    #[test]
    fn test_var_declaration() {
        let result = parse_str("let x = 1;");
        assert!(result.success);
        match &result.ast.body[0] {
            Stmt::VariableDeclaration { kind, id, init } => {
                assert_eq!(kind, "let");
                assert_eq!(id.name, "x");
                assert_eq!(init, &Some(Expr::Literal(LiteralValue::Number(1.0))));
            }
            other => panic!("Expected variable declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_var_declaration_without_init_or_semicolon() {
        let result = parse_str("const y");
        assert!(result.success);
        match &result.ast.body[0] {
            Stmt::VariableDeclaration { kind, init, .. } => {
                assert_eq!(kind, "const");
                assert!(init.is_none());
            }
            other => panic!("Expected variable declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_function_declaration() {
        let result = parse_str("function add(a, b) { return a + b; }");
        assert!(result.success);
        match &result.ast.body[0] {
            Stmt::FunctionDeclaration { id, params, body } => {
                assert_eq!(id.name, "add");
                assert_eq!(params.len(), 2);
                assert_eq!(params[1].name, "b");
                match body.as_ref() {
                    Stmt::Block { body } => {
                        assert!(matches!(body[0], Stmt::Return { argument: Some(_) }));
                    }
                    other => panic!("Expected block body, got {other:?}"),
                }
            }
            other => panic!("Expected function declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_if_else() {
        let result = parse_str("if (a) { b; } else c;");
        assert!(result.success);
        match &result.ast.body[0] {
            Stmt::If {
                consequent,
                alternate,
                ..
            } => {
                assert!(matches!(consequent.as_ref(), Stmt::Block { .. }));
                assert!(matches!(
                    alternate.as_deref(),
                    Some(Stmt::Expression { .. })
                ));
            }
            other => panic!("Expected if, got {other:?}"),
        }
    }

    #[test]
    fn test_do_while() {
        let result = parse_str("do { x--; } while (x > 0);");
        assert!(result.success);
        assert!(matches!(result.ast.body[0], Stmt::DoWhile { .. }));
    }

    #[test]
    fn test_for_full_header() {
        let result = parse_str("for (let i = 0; i < 10; i++) { break; }");
        assert!(result.success);
        match &result.ast.body[0] {
            Stmt::For {
                init,
                test,
                update,
                ..
            } => {
                assert!(matches!(init, Some(ForInit::Declaration(_))));
                assert!(matches!(test, Some(Expr::Binary { .. })));
                assert!(matches!(
                    update,
                    Some(Expr::Update { prefix: false, .. })
                ));
            }
            other => panic!("Expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_for_empty_header() {
        let result = parse_str("for (;;) {}");
        assert!(result.success);
        match &result.ast.body[0] {
            Stmt::For {
                init,
                test,
                update,
                ..
            } => {
                assert!(init.is_none());
                assert!(test.is_none());
                assert!(update.is_none());
            }
            other => panic!("Expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_for_expression_init() {
        let result = parse_str("for (i = 0; i < 3; i++) x = i;");
        assert!(result.success);
        match &result.ast.body[0] {
            Stmt::For { init, .. } => {
                assert!(matches!(init, Some(ForInit::Expression(Expr::Assignment { .. }))));
            }
            other => panic!("Expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_try_catch() {
        let result = parse_str("try { risky(); } catch (e) { log(e); }");
        assert!(result.success);
        match &result.ast.body[0] {
            Stmt::Try { handler, .. } => {
                assert_eq!(handler.param.name, "e");
                assert!(matches!(handler.body.as_ref(), Stmt::Block { .. }));
            }
            other => panic!("Expected try, got {other:?}"),
        }
    }

    #[test]
    fn test_switch() {
        let result = parse_str("switch (x) { case 1: break; default: y = 2; }");
        assert!(result.success);
        match &result.ast.body[0] {
            Stmt::Switch { cases, .. } => {
                assert_eq!(cases.len(), 2);
                assert_eq!(cases[0].test, Some(Expr::Literal(LiteralValue::Number(1.0))));
                assert!(matches!(cases[0].consequent[0], Stmt::Break));
                assert!(cases[1].test.is_none());
                assert_eq!(cases[1].consequent.len(), 1);
            }
            other => panic!("Expected switch, got {other:?}"),
        }
    }

    #[test]
    fn test_switch_skips_stray_tokens_between_clauses() {
        // A token at clause position that is neither case/default/} is
        // skipped without an error being recorded.
        let result = parse_str("switch (x) { ; case 1: break; }");
        assert!(result.success, "unexpected errors: {:?}", result.errors);
        match &result.ast.body[0] {
            Stmt::Switch { cases, .. } => assert_eq!(cases.len(), 1),
            other => panic!("Expected switch, got {other:?}"),
        }
    }

    #[test]
    fn test_return_without_argument() {
        let result = parse_str("function f() { return; }");
        assert!(result.success);
        match &result.ast.body[0] {
            Stmt::FunctionDeclaration { body, .. } => match body.as_ref() {
                Stmt::Block { body } => {
                    assert!(matches!(body[0], Stmt::Return { argument: None }));
                }
                other => panic!("Expected block, got {other:?}"),
            },
            other => panic!("Expected function declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_trivia_is_filtered() {
        let result = parse_str("let /* inline */ x = 1; // trailing");
        assert!(result.success);
        assert_eq!(result.ast.body.len(), 1);
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        match single_expression("1 + 2 * 3;") {
            Expr::Binary {
                operator, right, ..
            } => {
                assert_eq!(operator, "+");
                assert!(matches!(*right, Expr::Binary { ref operator, .. } if operator == "*"));
            }
            other => panic!("Expected binary, got {other:?}"),
        }
    }

    #[test]
    fn test_additive_is_left_associative() {
        match single_expression("a - b - c;") {
            Expr::Binary { left, .. } => {
                assert!(matches!(*left, Expr::Binary { ref operator, .. } if operator == "-"));
            }
            other => panic!("Expected binary, got {other:?}"),
        }
    }

    #[test]
    fn test_assignment_is_right_associative() {
        match single_expression("a = b = c;") {
            Expr::Assignment { right, .. } => {
                assert!(matches!(*right, Expr::Assignment { .. }));
            }
            other => panic!("Expected assignment, got {other:?}"),
        }
    }

    #[test]
    fn test_compound_assignment_operator_spelling() {
        match single_expression("x += 2;") {
            Expr::Assignment { operator, .. } => assert_eq!(operator, "+="),
            other => panic!("Expected assignment, got {other:?}"),
        }
    }

    #[test]
    fn test_ternary_is_right_associative() {
        match single_expression("a ? b : c ? d : e;") {
            Expr::Conditional { alternate, .. } => {
                assert!(matches!(*alternate, Expr::Conditional { .. }));
            }
            other => panic!("Expected conditional, got {other:?}"),
        }
    }

    #[test]
    fn test_logical_and_binary_node_kinds() {
        match single_expression("a && b == c || d;") {
            Expr::Logical {
                operator, left, ..
            } => {
                assert_eq!(operator, "||");
                match *left {
                    Expr::Logical {
                        ref operator,
                        ref right,
                        ..
                    } => {
                        assert_eq!(operator, "&&");
                        assert!(
                            matches!(**right, Expr::Binary { ref operator, .. } if operator == "==")
                        );
                    }
                    ref other => panic!("Expected logical, got {other:?}"),
                }
            }
            other => panic!("Expected logical, got {other:?}"),
        }
    }

    #[test]
    fn test_parenthesized_grouping() {
        match single_expression("(1 + 2) * 3;") {
            Expr::Binary { operator, left, .. } => {
                assert_eq!(operator, "*");
                assert!(matches!(*left, Expr::Binary { ref operator, .. } if operator == "+"));
            }
            other => panic!("Expected binary, got {other:?}"),
        }
    }

    #[test]
    fn test_prefix_operators_nest() {
        match single_expression("!-a;") {
            Expr::Unary {
                operator,
                argument,
                prefix,
            } => {
                assert_eq!(operator, "!");
                assert!(prefix);
                assert!(matches!(*argument, Expr::Unary { ref operator, .. } if operator == "-"));
            }
            other => panic!("Expected unary, got {other:?}"),
        }
    }

    #[test]
    fn test_postfix_update() {
        match single_expression("a++;") {
            Expr::Update {
                operator, prefix, ..
            } => {
                assert_eq!(operator, "++");
                assert!(!prefix);
            }
            other => panic!("Expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_member_call_chain() {
        match single_expression("a.b(1).c;") {
            Expr::Member { object, property } => {
                assert_eq!(property.name, "c");
                match *object {
                    Expr::Call {
                        ref callee,
                        ref arguments,
                    } => {
                        assert_eq!(arguments.len(), 1);
                        assert!(matches!(
                            **callee,
                            Expr::Member { ref property, .. } if property.name == "b"
                        ));
                    }
                    ref other => panic!("Expected call, got {other:?}"),
                }
            }
            other => panic!("Expected member, got {other:?}"),
        }
    }

    #[test]
    fn test_array_and_object_literals() {
        match single_expression("[1, 2];") {
            Expr::Array { elements } => assert_eq!(elements.len(), 2),
            other => panic!("Expected array, got {other:?}"),
        }
        let result = parse_str("let o = { a: 1, b: x };");
        assert!(result.success);
        match &result.ast.body[0] {
            Stmt::VariableDeclaration {
                init: Some(Expr::Object { properties }),
                ..
            } => {
                assert_eq!(properties.len(), 2);
                assert_eq!(properties[0].key.name, "a");
            }
            other => panic!("Expected object initializer, got {other:?}"),
        }
    }

    #[test]
    fn test_literal_values() {
        assert_eq!(
            single_expression("'hi';"),
            Expr::Literal(LiteralValue::String("'hi'".to_string()))
        );
        assert_eq!(
            single_expression("0x1F;"),
            Expr::Literal(LiteralValue::Number(31.0))
        );
        assert_eq!(
            single_expression("true;"),
            Expr::Literal(LiteralValue::Bool(true))
        );
        assert_eq!(single_expression("null;"), Expr::Literal(LiteralValue::Null));
        assert_eq!(single_expression("this;"), Expr::This);
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    #[test]
    fn test_empty_input_is_success() {
        let result = parse_str("");
        assert!(result.success);
        assert!(result.ast.body.is_empty());
    }

    #[test]
    fn test_mismatched_token_is_consumed_and_flows_into_the_tree() {
        let result = parse_str("let ; x = 1;");
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, ParseErrorKind::UnexpectedToken);
        assert!(result.errors[0].message.contains("Expected IDENTIFIER"));
        // The declaration was still built, with the wrong token as its name.
        assert_eq!(result.ast.body.len(), 2);
        match &result.ast.body[0] {
            Stmt::VariableDeclaration { id, .. } => assert_eq!(id.name, ";"),
            other => panic!("Expected variable declaration, got {other:?}"),
        }
        assert!(matches!(result.ast.body[1], Stmt::Expression { .. }));
    }

    #[test]
    fn test_statement_recovery_skips_one_token() {
        let result = parse_str("@ let x = 1;");
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, ParseErrorKind::StatementError);
        assert!(result.errors[0]
            .message
            .contains("Unexpected token in primary expression: @"));
        assert_eq!((result.errors[0].line, result.errors[0].column), (1, 1));
        // Recovery resumed on the next token and parsed the declaration.
        assert_eq!(result.ast.body.len(), 1);
    }

    #[test]
    fn test_truncated_statement_reports_eof_twice() {
        // The checked consume records UNEXPECTED_EOF and aborts; the
        // statement loop then records the abort as a STATEMENT_ERROR.
        let result = parse_str("let");
        assert!(!result.success);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].kind, ParseErrorKind::UnexpectedEof);
        assert_eq!(result.errors[1].kind, ParseErrorKind::StatementError);
        assert_eq!((result.errors[1].line, result.errors[1].column), (0, 0));
        assert!(result.ast.body.is_empty());
    }

    #[test]
    fn test_errors_accumulate_across_statements() {
        let result = parse_str("let ; 1; let ; 2;");
        assert!(!result.success);
        assert_eq!(result.errors.len(), 2);
        assert!(result
            .errors
            .iter()
            .all(|e| e.kind == ParseErrorKind::UnexpectedToken));
        assert_eq!(result.ast.body.len(), 4);
    }

    #[test]
    fn test_parse_source_matches_two_stage_pipeline() {
        let source = "let x = 1;";
        let staged = parse(&crate::lexer::lex(source));
        assert_eq!(parse_source(source), staged);
    }
}
