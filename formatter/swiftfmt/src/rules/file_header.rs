//! Replace or strip the leading comment block.
//!
//! In `FileHeader::Text` mode the leading run of comments and blank lines is
//! replaced with the configured header followed by one blank line; an empty
//! text strips the header outright. `FileHeader::Ignore` leaves the file
//! untouched, and the engine forces that mode after the first round so a
//! header that interacts badly with other rules cannot oscillate.

use swiftfmt_lexer::{tokenize, Token};

use crate::formatter::Formatter;
use crate::options::FileHeader;

pub(super) fn apply(formatter: &mut Formatter) {
    let FileHeader::Text(header) = formatter.options().file_header.clone() else {
        return;
    };
    let linebreak = formatter.options().linebreak.clone();
    let end = header_end(formatter.tokens());
    let mut replacement = Vec::new();
    if !header.is_empty() {
        replacement = tokenize(&header);
        while replacement.last().is_some_and(Token::is_linebreak) {
            replacement.pop();
        }
        replacement.push(Token::Linebreak(linebreak.clone()));
        replacement.push(Token::Linebreak(linebreak));
    }
    if end == 0 && replacement.is_empty() {
        return;
    }
    formatter.tokens_mut().splice(0..end, replacement);
}

/// Index just past the leading run of comments, whitespace, and blank lines.
fn header_end(tokens: &[Token]) -> usize {
    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            Token::StartOfScope(s) if s == "//" => {
                while i < tokens.len() && !tokens[i].is_linebreak() {
                    i += 1;
                }
            }
            Token::StartOfScope(s) if s == "/*" => {
                let mut depth = 0usize;
                while i < tokens.len() {
                    match &tokens[i] {
                        Token::StartOfScope(s) if s == "/*" => depth += 1,
                        Token::EndOfScope(e) if e == "*/" => {
                            depth -= 1;
                            if depth == 0 {
                                i += 1;
                                break;
                            }
                        }
                        _ => {}
                    }
                    i += 1;
                }
            }
            Token::Whitespace(_) | Token::Linebreak(_) => i += 1,
            _ => break,
        }
    }
    i
}
