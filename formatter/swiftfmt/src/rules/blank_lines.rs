//! Collapse runs of more than one blank line.

use swiftfmt_lexer::Token;

use crate::formatter::Formatter;

pub(super) fn apply(formatter: &mut Formatter) {
    let tokens = formatter.tokens_mut();
    let mut i = 0;
    while i < tokens.len() {
        if !tokens[i].is_linebreak() {
            i += 1;
            continue;
        }
        // Measure the linebreak run, skipping whitespace on blank lines.
        // `end` is the index just past the last linebreak; indentation after
        // it belongs to the next line and is preserved.
        let mut breaks = 1;
        let mut end = i + 1;
        let mut j = i + 1;
        while j < tokens.len() {
            match &tokens[j] {
                Token::Whitespace(_) => j += 1,
                Token::Linebreak(_) => {
                    breaks += 1;
                    j += 1;
                    end = j;
                }
                _ => break,
            }
        }
        if breaks > 2 {
            let kept: Vec<Token> = tokens[i..end]
                .iter()
                .filter(|t| t.is_linebreak())
                .take(2)
                .cloned()
                .collect();
            tokens.splice(i..end, kept);
            i += 2;
        } else {
            i = end;
        }
    }
}
