//! Anchored per-rule matchers.
//!
//! Each matcher inspects the start of `rest` and returns the matched byte
//! length, or `None` when the rule does not apply at the cursor. Matchers
//! never skip ahead: a rule either matches at offset zero or not at all.
//! Ordering between the rules lives in the scan dispatch, not here.

use scriptic_core::lang::{operators, punctuation};

/// A run of one or more whitespace characters (newlines included).
pub(super) fn whitespace(rest: &str) -> Option<usize> {
    let len: usize = rest.chars().take_while(|c| c.is_whitespace()).map(char::len_utf8).sum();
    (len > 0).then_some(len)
}

/// `//` to the end of the line; the newline is not part of the comment.
pub(super) fn line_comment(rest: &str) -> Option<usize> {
    if !rest.starts_with("//") {
        return None;
    }
    Some(rest.find('\n').unwrap_or(rest.len()))
}

/// `/* ... */` with the earliest closing delimiter. An unterminated block
/// comment does not match at all; the `/` falls through to the operator rule.
pub(super) fn block_comment(rest: &str) -> Option<usize> {
    if !rest.starts_with("/*") {
        return None;
    }
    rest[2..].find("*/").map(|i| 2 + i + 2)
}

/// An identifier-shaped lexeme: `[A-Za-z_$][A-Za-z0-9_$]*`. Keyword-ness is
/// decided by the caller against the reserved-word registry.
pub(super) fn word(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !is_word_start(first) {
        return None;
    }
    let len = 1 + chars.take_while(|c| is_word_continue(*c)).count();
    Some(len)
}

/// Numeric literal; bases are tried before the decimal form.
///
/// - hex `0[xX][0-9a-fA-F]+`
/// - binary `0[bB][01]+`
/// - octal `0[oO][0-7]+`
/// - decimal `\d+\.?\d*([eE][+-]?\d+)?`
///
/// A bare base prefix (`0x`) does not match the base rule, so it lexes as
/// the decimal `0` followed by a word. Likewise an exponent marker without
/// digits is left for the next token.
pub(super) fn number(rest: &str) -> Option<usize> {
    if let Some(len) = radix_literal(rest, &['x', 'X'], |c| c.is_ascii_hexdigit()) {
        return Some(len);
    }
    if let Some(len) = radix_literal(rest, &['b', 'B'], |c| c == '0' || c == '1') {
        return Some(len);
    }
    if let Some(len) = radix_literal(rest, &['o', 'O'], |c| ('0'..='7').contains(&c)) {
        return Some(len);
    }
    decimal_literal(rest)
}

fn radix_literal(rest: &str, markers: &[char], is_digit: fn(char) -> bool) -> Option<usize> {
    let mut chars = rest.chars();
    if chars.next()? != '0' {
        return None;
    }
    let marker = chars.next()?;
    if !markers.contains(&marker) {
        return None;
    }
    let digits = chars.take_while(|c| is_digit(*c)).count();
    (digits > 0).then_some(2 + digits)
}

fn decimal_literal(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut len = 0;
    while len < bytes.len() && bytes[len].is_ascii_digit() {
        len += 1;
    }
    if len == 0 {
        return None;
    }
    if len < bytes.len() && bytes[len] == b'.' {
        len += 1;
        while len < bytes.len() && bytes[len].is_ascii_digit() {
            len += 1;
        }
    }
    // Optional exponent; only consumed when at least one digit follows.
    if len < bytes.len() && (bytes[len] == b'e' || bytes[len] == b'E') {
        let mut exp = len + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > digits_start {
            len = exp;
        }
    }
    Some(len)
}

/// String literal: template, double-, then single-quoted.
///
/// A body character is either any character other than the closing quote or
/// a backslash (newlines included, so every form may span lines), or a
/// backslash escape consuming the next character. In the quote forms the
/// escaped character must not be a line break; in the template form it may
/// be. Unterminated literals do not match, leaving the quote character to
/// the `UNKNOWN` fallback.
pub(super) fn string(rest: &str) -> Option<usize> {
    let first = rest.chars().next()?;
    let escape_may_break_line = match first {
        '`' => true,
        '"' | '\'' => false,
        _ => return None,
    };
    let mut len = first.len_utf8();
    let mut chars = rest[len..].chars();
    while let Some(c) = chars.next() {
        len += c.len_utf8();
        match c {
            c if c == first => return Some(len),
            '\\' => {
                let escaped = chars.next()?;
                if !escape_may_break_line && (escaped == '\n' || escaped == '\r') {
                    return None;
                }
                len += escaped.len_utf8();
            }
            _ => {}
        }
    }
    None
}

/// Multi-character operator: first spelling in the ordered registry list
/// that matches wins (including its deliberate quirks).
pub(super) fn multi_char_operator(rest: &str) -> Option<usize> {
    operators::MULTI_CHAR.iter().find(|op| rest.starts_with(**op)).map(|op| op.len())
}

/// Single-character operator.
pub(super) fn single_char_operator(rest: &str) -> Option<usize> {
    let c = rest.chars().next()?;
    operators::SINGLE_CHAR.contains(&c).then(|| c.len_utf8())
}

/// Punctuation mark.
pub(super) fn punctuation(rest: &str) -> Option<usize> {
    let c = rest.chars().next()?;
    punctuation::is_punctuation_char(c).then(|| c.len_utf8())
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_requires_at_least_one_char() {
        assert_eq!(whitespace("x"), None);
        assert_eq!(whitespace("  \t\n x"), Some(5));
    }

    #[test]
    fn line_comment_stops_before_newline() {
        assert_eq!(line_comment("// abc\nx"), Some(6));
        assert_eq!(line_comment("// abc"), Some(6));
        assert_eq!(line_comment("/x"), None);
    }

    #[test]
    fn block_comment_takes_earliest_close() {
        assert_eq!(block_comment("/* a */ b */"), Some(7));
        assert_eq!(block_comment("/* open"), None);
        assert_eq!(block_comment("/**/"), Some(4));
    }

    #[test]
    fn word_accepts_dollar_and_underscore() {
        assert_eq!(word("$a_1+"), Some(4));
        assert_eq!(word("_x"), Some(2));
        assert_eq!(word("1x"), None);
    }

    #[test]
    fn number_forms() {
        assert_eq!(number("0xFF;"), Some(4));
        assert_eq!(number("0b102"), Some(4));
        assert_eq!(number("0o79"), Some(3));
        assert_eq!(number("42.5e+3;"), Some(7));
        assert_eq!(number("1."), Some(2));
        assert_eq!(number("0x"), Some(1)); // decimal `0`, not a hex literal
        assert_eq!(number(".5"), None);
    }

    #[test]
    fn string_forms() {
        assert_eq!(string("`a\nb`"), Some(5));
        assert_eq!(string("\"ab\"x"), Some(4));
        assert_eq!(string("'a\\'b'"), Some(6));
        assert_eq!(string("\"open"), None);
        // A quote form cannot escape a line break; the template form can.
        assert_eq!(string("\"a\\\nb\""), None);
        assert_eq!(string("`a\\\nb`"), Some(6));
    }

    #[test]
    fn operator_first_match() {
        assert_eq!(multi_char_operator(">>>"), Some(2)); // `>>` wins
        assert_eq!(multi_char_operator("===x"), Some(3));
        assert_eq!(multi_char_operator("??= y"), Some(3));
        assert_eq!(multi_char_operator("&&= y"), Some(2)); // `&&` shadows `&&=`
        assert_eq!(multi_char_operator("~"), None);
        assert_eq!(single_char_operator("~"), Some(1));
    }
}
