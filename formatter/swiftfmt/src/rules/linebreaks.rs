//! Normalize linebreak tokens to the working linebreak style.

use swiftfmt_lexer::Token;

use crate::formatter::Formatter;

pub(super) fn apply(formatter: &mut Formatter) {
    let linebreak = formatter.options().linebreak.clone();
    for token in formatter.tokens_mut() {
        if let Token::Linebreak(text) = token {
            if *text != linebreak {
                *text = linebreak.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::options::FormatOptions;
    use crate::rules::tests::apply_rule;
    use crate::rules::LINEBREAKS;

    #[test]
    fn crlf_normalizes_to_lf() {
        let result = apply_rule(LINEBREAKS, "a\r\nb\r\n", FormatOptions::default());
        assert_eq!(result, "a\nb\n");
    }

    #[test]
    fn lf_normalizes_to_crlf_when_configured() {
        let options = FormatOptions { linebreak: "\r\n".to_string(), ..Default::default() };
        assert_eq!(apply_rule(LINEBREAKS, "a\nb\n", options), "a\r\nb\r\n");
    }

    #[test]
    fn mixed_linebreaks_become_uniform() {
        let result = apply_rule(LINEBREAKS, "a\nb\r\nc\r", FormatOptions::default());
        assert_eq!(result, "a\nb\nc\n");
    }
}
