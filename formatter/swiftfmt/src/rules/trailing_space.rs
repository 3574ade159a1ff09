//! Strip whitespace runs at line ends and at end of file.

use swiftfmt_lexer::Token;

use crate::formatter::Formatter;

pub(super) fn apply(formatter: &mut Formatter) {
    let tokens = formatter.tokens_mut();
    let mut i = 0;
    while i < tokens.len() {
        let at_line_end = tokens[i].is_whitespace()
            && matches!(tokens.get(i + 1), None | Some(Token::Linebreak(_)));
        if at_line_end {
            tokens.remove(i);
        } else {
            i += 1;
        }
    }
}
