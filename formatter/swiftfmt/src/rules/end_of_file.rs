//! Ensure the file ends with a linebreak.

use swiftfmt_lexer::Token;

use crate::formatter::Formatter;

pub(super) fn apply(formatter: &mut Formatter) {
    if formatter.options().fragment {
        return;
    }
    let linebreak = formatter.options().linebreak.clone();
    let tokens = formatter.tokens_mut();
    if tokens.is_empty() {
        return;
    }
    if !tokens.last().is_some_and(Token::is_linebreak) {
        tokens.push(Token::Linebreak(linebreak));
    }
}

#[cfg(test)]
mod tests {
    use crate::options::FormatOptions;
    use crate::rules::tests::apply_rule;
    use crate::rules::LINEBREAK_AT_END_OF_FILE;

    #[test]
    fn missing_final_linebreak_is_added() {
        let result = apply_rule(LINEBREAK_AT_END_OF_FILE, "let x = 1", FormatOptions::default());
        assert_eq!(result, "let x = 1\n");
    }

    #[test]
    fn existing_final_linebreak_is_kept() {
        let result = apply_rule(LINEBREAK_AT_END_OF_FILE, "let x = 1\n", FormatOptions::default());
        assert_eq!(result, "let x = 1\n");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(apply_rule(LINEBREAK_AT_END_OF_FILE, "", FormatOptions::default()), "");
    }

    #[test]
    fn fragments_are_left_alone() {
        let options = FormatOptions { fragment: true, ..Default::default() };
        assert_eq!(apply_rule(LINEBREAK_AT_END_OF_FILE, "x + y", options), "x + y");
    }

    #[test]
    fn configured_linebreak_style_is_used() {
        let options = FormatOptions { linebreak: "\r\n".to_string(), ..Default::default() };
        assert_eq!(apply_rule(LINEBREAK_AT_END_OF_FILE, "x", options), "x\r\n");
    }
}
