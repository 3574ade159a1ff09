//! Move opening braces up onto the previous line (K&R style).
//!
//! A `{` separated from the preceding code by a linebreak is re-attached
//! with a single space. Braces that follow a comment stay put: moving them
//! past a line comment would pull them into the comment.

use swiftfmt_lexer::Token;

use crate::formatter::Formatter;

pub(super) fn apply(formatter: &mut Formatter) {
    let mut i = 0;
    while i < formatter.tokens().len() {
        if !matches!(&formatter.tokens()[i], Token::StartOfScope(s) if s == "{") {
            i += 1;
            continue;
        }
        let Some(prev) = formatter.last_code_index_before(i) else {
            i += 1;
            continue;
        };
        let gap_has_linebreak = formatter.tokens()[prev + 1..i].iter().any(Token::is_linebreak);
        if !gap_has_linebreak || formatter.tokens()[prev].is_comment() {
            i += 1;
            continue;
        }
        formatter
            .tokens_mut()
            .splice(prev + 1..i, [Token::Whitespace(" ".to_string())]);
        // the brace now sits at prev + 2
        i = prev + 3;
    }
}

#[cfg(test)]
mod tests {
    use crate::options::FormatOptions;
    use crate::rules::tests::apply_rule;
    use crate::rules::BRACES;

    fn braces(source: &str) -> String {
        apply_rule(BRACES, source, FormatOptions::default())
    }

    #[test]
    fn brace_on_next_line_moves_up() {
        assert_eq!(braces("func foo()\n{\n}"), "func foo() {\n}");
    }

    #[test]
    fn indented_brace_moves_up() {
        assert_eq!(braces("if x\n    {\n}"), "if x {\n}");
    }

    #[test]
    fn brace_on_same_line_is_untouched() {
        assert_eq!(braces("if x { y }"), "if x { y }");
    }

    #[test]
    fn brace_after_line_comment_stays() {
        let source = "func foo() // note\n{\n}";
        assert_eq!(braces(source), source);
    }

    #[test]
    fn brace_at_start_of_file_stays() {
        assert_eq!(braces("{ x }"), "{ x }");
    }

    #[test]
    fn nested_braces_each_move() {
        assert_eq!(braces("if a\n{\nif b\n{\n}\n}"), "if a {\nif b {\n}\n}");
    }
}
