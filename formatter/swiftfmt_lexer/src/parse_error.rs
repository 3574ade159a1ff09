//! Post-tokenize diagnostic pass.
//!
//! Walks a finished token buffer and reports the first error token or
//! merge-conflict marker as a single diagnostic with a line/column position.
//! The tokenizer itself never fails; this pass is where "this input cannot
//! be formatted" is decided.

use std::fmt;

use crate::token::Token;

/// A single parsing diagnostic.
///
/// `line` starts at 1 and `column` at 0, matching editor conventions for
/// the formatted language's toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.message, self.line, self.column)
    }
}

/// Compute the `(line, column)` position of the token at `index`.
///
/// Lines start at 1, columns at 0. Linebreak tokens reset the column;
/// whitespace, string bodies, and comment bodies advance by codepoint with
/// tabs counting `tab_width`; every other token advances by its codepoint
/// length.
#[must_use]
pub fn offset_for_token(tokens: &[Token], index: usize, tab_width: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 0;
    for token in &tokens[..index.min(tokens.len())] {
        match token {
            Token::Linebreak(_) => {
                line += 1;
                column = 0;
            }
            Token::Whitespace(text) | Token::StringBody(text) | Token::CommentBody(text) => {
                for c in text.chars() {
                    column += if c == '\t' { tab_width } else { 1 };
                }
            }
            other => column += other.text().chars().count(),
        }
    }
    (line, column)
}

/// Return the first diagnostic in the buffer, if any.
///
/// An error token is reported unless the caller marked the input as a
/// fragment. A symbol beginning with `<<<<<`, `=====`, or `>>>>>` is
/// reported as a merge-conflict marker unless conflict-marker checking is
/// disabled.
#[must_use]
pub fn first_parse_error(
    tokens: &[Token],
    fragment: bool,
    ignore_conflict_markers: bool,
    tab_width: usize,
) -> Option<ParseError> {
    for (index, token) in tokens.iter().enumerate() {
        let message = match token {
            Token::Error(text) if !fragment => {
                if text.is_empty() {
                    "unexpected end of file".to_string()
                } else {
                    format!("unexpected token `{}`", excerpt(text))
                }
            }
            Token::Symbol(text)
                if !ignore_conflict_markers
                    && (text.starts_with("<<<<<")
                        || text.starts_with("=====")
                        || text.starts_with(">>>>>")) =>
            {
                format!("found conflict marker `{}`", excerpt(text))
            }
            _ => continue,
        };
        let (line, column) = offset_for_token(tokens, index, tab_width);
        return Some(ParseError { message, line, column });
    }
    None
}

/// First line of `text`, capped for readable messages.
fn excerpt(text: &str) -> &str {
    let line = text.lines().next().unwrap_or("");
    match line.char_indices().nth(20) {
        Some((cut, _)) => &line[..cut],
        None => line,
    }
}
