//! Descriptive grammar table.
//!
//! A BNF-like rendering of the statement and expression grammar, exposed for
//! documentation and introspection display. The table is **inert**: the
//! parser in `scriptic_syntax` implements each rule as a hand-written
//! routine and never consults this module, so the table must stay
//! documentation-only rather than become a second source of truth.
//!
//! ## Examples
//! ```rust
//! use scriptic_core::lang::grammar;
//!
//! let rule = grammar::rule_named("Program").unwrap();
//! assert_eq!(rule.productions[0], "Statement*");
//! ```

/// A named grammar rule with one or more production strings.
#[derive(Debug, Clone, Copy)]
pub struct GrammarRule {
    pub name: &'static str,
    pub productions: &'static [&'static str],
}

/// The complete rule table, statements first, then the expression cascade
/// from lowest to highest binding.
pub const GRAMMAR: &[GrammarRule] = &[
    rule("Program", &["Statement*"]),
    rule(
        "Statement",
        &[
            "VarDeclaration",
            "FunctionDeclaration",
            "IfStatement",
            "WhileStatement",
            "DoWhileStatement",
            "ForStatement",
            "BlockStatement",
            "TryStatement",
            "ReturnStatement",
            "BreakStatement",
            "SwitchStatement",
            "ExpressionStatement",
        ],
    ),
    rule("VarDeclaration", &["(\"let\" | \"const\" | \"var\") IDENTIFIER (\"=\" Expression)? \";\"?"]),
    rule(
        "FunctionDeclaration",
        &["\"function\" IDENTIFIER \"(\" ParameterList? \")\" BlockStatement"],
    ),
    rule("IfStatement", &["\"if\" \"(\" Expression \")\" Statement (\"else\" Statement)?"]),
    rule("WhileStatement", &["\"while\" \"(\" Expression \")\" Statement"]),
    rule("DoWhileStatement", &["\"do\" Statement \"while\" \"(\" Expression \")\" \";\"?"]),
    rule(
        "ForStatement",
        &["\"for\" \"(\" (VarDeclaration | Expression)? \";\" Expression? \";\" Expression? \")\" Statement"],
    ),
    rule("BlockStatement", &["\"{\" Statement* \"}\""]),
    rule(
        "TryStatement",
        &["\"try\" BlockStatement \"catch\" \"(\" IDENTIFIER \")\" BlockStatement"],
    ),
    rule("ReturnStatement", &["\"return\" Expression? \";\"?"]),
    rule("BreakStatement", &["\"break\" \";\"?"]),
    rule("SwitchStatement", &["\"switch\" \"(\" Expression \")\" \"{\" CaseBlock \"}\""]),
    rule("CaseBlock", &["(CaseClause)* (DefaultClause)? (CaseClause)*"]),
    rule("CaseClause", &["\"case\" Expression \":\" Statement*"]),
    rule("DefaultClause", &["\"default\" \":\" Statement*"]),
    rule("ExpressionStatement", &["Expression \";\"?"]),
    rule("Expression", &["AssignmentExpression"]),
    rule(
        "AssignmentExpression",
        &["ConditionalExpression (AssignmentOperator AssignmentExpression)?"],
    ),
    rule(
        "ConditionalExpression",
        &["LogicalORExpression (\"?\" Expression \":\" ConditionalExpression)?"],
    ),
    rule("LogicalORExpression", &["LogicalANDExpression (\"||\" LogicalANDExpression)*"]),
    rule("LogicalANDExpression", &["EqualityExpression (\"&&\" EqualityExpression)*"]),
    rule(
        "EqualityExpression",
        &["RelationalExpression ((\"==\"|\"!=\"|\"===\"|\"!==\") RelationalExpression)*"],
    ),
    rule(
        "RelationalExpression",
        &["AdditiveExpression ((\"<\"|\">\"|\"<=\"|\">=\") AdditiveExpression)*"],
    ),
    rule(
        "AdditiveExpression",
        &["MultiplicativeExpression ((\"+\"|\"-\") MultiplicativeExpression)*"],
    ),
    rule(
        "MultiplicativeExpression",
        &["UnaryExpression ((\"*\"|\"/\"|\"%\") UnaryExpression)*"],
    ),
    rule("UnaryExpression", &["(\"!\"|\"-\"|\"+\"|\"++\"|\"--\")? PostfixExpression"]),
    rule("PostfixExpression", &["PrimaryExpression (\"++\"|\"--\")?"]),
    rule(
        "PrimaryExpression",
        &[
            "IDENTIFIER",
            "NUMBER",
            "STRING",
            "true",
            "false",
            "null",
            "\"this\"",
            "\"(\" Expression \")\"",
            "ArrayExpression",
            "ObjectExpression",
        ],
    ),
    rule("ArrayExpression", &["\"[\" (Expression (\",\" Expression)*)? \"]\""]),
    rule("ObjectExpression", &["\"{\" (Property (\",\" Property)*)? \"}\""]),
    rule("Property", &["IDENTIFIER \":\" Expression"]),
];

/// Look up a rule by name.
pub fn rule_named(name: &str) -> Option<&'static GrammarRule> {
    GRAMMAR.iter().find(|r| r.name == name)
}

const fn rule(name: &'static str, productions: &'static [&'static str]) -> GrammarRule {
    GrammarRule { name, productions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_statement_alternative_has_its_own_rule() {
        let statement = rule_named("Statement").expect("Statement rule");
        for alt in statement.productions {
            assert!(rule_named(alt).is_some(), "missing rule for {alt:?}");
        }
    }

    #[test]
    fn rule_names_are_unique() {
        for (i, a) in GRAMMAR.iter().enumerate() {
            for b in &GRAMMAR[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
