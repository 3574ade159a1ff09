//! Lexical recognizers.
//!
//! Each recognizer takes the cursor and returns one raw token, or `None`
//! without consuming when its class does not match. Recognizers that consume
//! speculatively (numbers, back-quoted identifiers) checkpoint the cursor by
//! copy and restore it on failure.
//!
//! Scope semantics are not decided here: a bare `<` is returned as a
//! tentative `StartOfScope("<")` and `:` as a plain symbol; the driver
//! finalizes both.

use swiftfmt_lexer_core::{scalars, Cursor};

use crate::token::Token;

/// Produce the next raw token, or `None` at end of input.
pub fn next_token(cursor: &mut Cursor<'_>) -> Option<Token> {
    let c = cursor.peek()?;
    if scalars::is_space(c) {
        return Some(Token::Whitespace(cursor.consume_while(scalars::is_space).to_string()));
    }
    if scalars::is_linebreak(c) {
        return Some(parse_linebreak(cursor));
    }
    match c {
        ':' | ';' | ',' => {
            cursor.advance();
            Some(Token::Symbol(c.to_string()))
        }
        '(' | '[' | '{' | '"' => {
            cursor.advance();
            Some(Token::StartOfScope(c.to_string()))
        }
        ')' | ']' | '}' => {
            cursor.advance();
            Some(Token::EndOfScope(c.to_string()))
        }
        _ => {
            if scalars::is_decimal_digit(c) {
                return parse_number(cursor);
            }
            if let Some(token) = parse_identifier(cursor) {
                return Some(token);
            }
            if let Some(token) = parse_operator(cursor) {
                return Some(token);
            }
            // Nothing recognizes this scalar: the rest of the input becomes
            // one error token.
            Some(Token::Error(cursor.consume_rest().to_string()))
        }
    }
}

/// `\n`, `\r`, or `\r\n` collapsed into one token.
pub fn parse_linebreak(cursor: &mut Cursor<'_>) -> Token {
    if cursor.consume_if_eq('\r') {
        if cursor.consume_if_eq('\n') {
            Token::Linebreak("\r\n".to_string())
        } else {
            Token::Linebreak("\r".to_string())
        }
    } else {
        cursor.advance();
        Token::Linebreak("\n".to_string())
    }
}

/// Numeric literal.
///
/// Decimal with optional fraction and `e` exponent; `0x` hex with optional
/// `p` exponent; `0b` binary; `0o` octal. Underscores separate digits but
/// never lead. A radix prefix with no digit swallows the rest of the input
/// as an error token.
fn parse_number(cursor: &mut Cursor<'_>) -> Option<Token> {
    let start = cursor.pos();
    let first = cursor.consume_if(scalars::is_decimal_digit)?;
    if first == '0' {
        if cursor.consume_if_eq('x') {
            return Some(radix_literal(cursor, start, scalars::is_hex_digit, true));
        }
        if cursor.consume_if_eq('b') {
            return Some(radix_literal(cursor, start, scalars::is_binary_digit, false));
        }
        if cursor.consume_if_eq('o') {
            return Some(radix_literal(cursor, start, scalars::is_octal_digit, false));
        }
    }
    cursor.consume_while(|c| scalars::is_decimal_digit(c) || c == '_');

    // Fraction: the dot belongs to the number only when a digit follows.
    let checkpoint = *cursor;
    if cursor.consume_if_eq('.') {
        if cursor.consume_if(scalars::is_decimal_digit).is_some() {
            cursor.consume_while(|c| scalars::is_decimal_digit(c) || c == '_');
        } else {
            *cursor = checkpoint;
        }
    }

    // Exponent: `e`/`E`, optional sign, at least one digit.
    let checkpoint = *cursor;
    if cursor.consume_if(|c| c == 'e' || c == 'E').is_some() {
        cursor.consume_if(|c| c == '+' || c == '-');
        if cursor.consume_if(scalars::is_decimal_digit).is_some() {
            cursor.consume_while(|c| scalars::is_decimal_digit(c) || c == '_');
        } else {
            *cursor = checkpoint;
        }
    }

    Some(Token::Number(cursor.slice_from(start).to_string()))
}

fn radix_literal(
    cursor: &mut Cursor<'_>,
    start: usize,
    digit: fn(char) -> bool,
    hex_exponent: bool,
) -> Token {
    if cursor.consume_if(digit).is_none() {
        cursor.consume_rest();
        return Token::Error(cursor.slice_from(start).to_string());
    }
    cursor.consume_while(|c| digit(c) || c == '_');
    if hex_exponent {
        let checkpoint = *cursor;
        if cursor.consume_if_eq('p') {
            cursor.consume_if(|c| c == '+' || c == '-');
            if cursor.consume_if(scalars::is_decimal_digit).is_some() {
                cursor.consume_while(scalars::is_decimal_digit);
            } else {
                *cursor = checkpoint;
            }
        }
    }
    Token::Number(cursor.slice_from(start).to_string())
}

/// Identifier, attribute (`@x`), directive (`#x`), or back-quoted name.
///
/// `#if` and `#endif` lift to scope tokens. A back-quote without a closing
/// back-quote restores the cursor and returns `None`.
fn parse_identifier(cursor: &mut Cursor<'_>) -> Option<Token> {
    if cursor.peek() == Some('`') {
        let checkpoint = *cursor;
        let start = cursor.pos();
        cursor.advance();
        if cursor
            .consume_head_tail(scalars::is_identifier_head, scalars::is_identifier_tail)
            .is_some()
            && cursor.consume_if_eq('`')
        {
            return Some(Token::Identifier(cursor.slice_from(start).to_string()));
        }
        *cursor = checkpoint;
        return None;
    }

    let head = |c: char| scalars::is_identifier_head(c) || c == '@' || c == '#';
    let text = cursor.consume_head_tail(head, scalars::is_identifier_tail)?;
    Some(match text {
        "#if" => Token::StartOfScope(text.to_string()),
        "#endif" => Token::EndOfScope(text.to_string()),
        _ => Token::Identifier(text.to_string()),
    })
}

/// Operator or tentative generic bracket.
///
/// Accumulates operator scalars with two interruptions: a `.` may only
/// continue an operator that began with `.`, and a `/*` or `//` pair either
/// becomes a comment opener (empty head) or terminates the operator so the
/// next call picks the comment up.
fn parse_operator(cursor: &mut Cursor<'_>) -> Option<Token> {
    let start = cursor.pos();
    loop {
        let Some(c) = cursor.peek() else { break };
        let began = cursor.pos() > start;
        let accepted = if began {
            scalars::is_operator_tail(c)
        } else {
            scalars::is_operator_head(c)
        };
        if !accepted {
            break;
        }
        if c == '.' && began && !cursor.slice_from(start).starts_with('.') {
            break;
        }
        if c == '/' && matches!(cursor.peek_second(), Some('*' | '/')) {
            if began {
                break;
            }
            cursor.advance();
            let second = cursor.advance();
            return Some(Token::StartOfScope(if second == Some('*') {
                "/*".to_string()
            } else {
                "//".to_string()
            }));
        }
        cursor.advance();
    }
    if cursor.pos() == start {
        return None;
    }
    let text = cursor.slice_from(start);
    Some(if text == "<" {
        Token::StartOfScope(text.to_string())
    } else {
        Token::Symbol(text.to_string())
    })
}
