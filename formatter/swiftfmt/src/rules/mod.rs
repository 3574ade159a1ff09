//! Built-in rewrite rules.
//!
//! Each rule is a named transformation over the formatter state. Rules never
//! fail: they either rewrite the buffer or leave it alone, and the engine
//! decides convergence by comparing buffers between rounds.

mod blank_lines;
mod braces;
mod end_of_file;
mod file_header;
mod indent;
mod linebreaks;
mod trailing_space;

use crate::formatter::Formatter;

/// A named rewrite over the formatter state.
///
/// Plain function pointers keep rules `Copy` and `Send`, which the engine
/// relies on to dispatch each rule onto its timeout worker.
#[derive(Clone, Copy)]
pub struct FormatRule {
    name: &'static str,
    run: fn(&mut Formatter),
}

impl FormatRule {
    pub const fn new(name: &'static str, run: fn(&mut Formatter)) -> Self {
        Self { name, run }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, formatter: &mut Formatter) {
        (self.run)(formatter);
    }
}

impl std::fmt::Debug for FormatRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FormatRule").field(&self.name).finish()
    }
}

/// Normalize every linebreak token to the working linebreak style.
pub const LINEBREAKS: FormatRule = FormatRule::new("linebreaks", linebreaks::apply);

/// Replace or strip the leading comment block. Clamped to ignore-mode by the
/// engine after the first round.
pub const FILE_HEADER: FormatRule = FormatRule::new("fileHeader", file_header::apply);

/// Move an opening brace onto the previous line (K&R style).
pub const BRACES: FormatRule = FormatRule::new("braces", braces::apply);

/// Collapse runs of more than one blank line.
pub const CONSECUTIVE_BLANK_LINES: FormatRule =
    FormatRule::new("consecutiveBlankLines", blank_lines::apply);

/// Recompute leading whitespace from the open-scope depth.
pub const INDENT: FormatRule = FormatRule::new("indent", indent::apply);

/// Strip whitespace runs at line ends.
pub const TRAILING_SPACE: FormatRule = FormatRule::new("trailingSpace", trailing_space::apply);

/// Ensure the file ends with a linebreak (skipped for fragments).
pub const LINEBREAK_AT_END_OF_FILE: FormatRule =
    FormatRule::new("linebreakAtEndOfFile", end_of_file::apply);

/// The default rule pipeline, in application order.
#[must_use]
pub fn default_rules() -> Vec<FormatRule> {
    vec![
        LINEBREAKS,
        FILE_HEADER,
        BRACES,
        CONSECUTIVE_BLANK_LINES,
        INDENT,
        TRAILING_SPACE,
        LINEBREAK_AT_END_OF_FILE,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FormatOptions;
    use swiftfmt_lexer::{source_code, tokenize};

    /// Apply a single rule to source text with the given options.
    pub(crate) fn apply_rule(rule: FormatRule, source: &str, options: FormatOptions) -> String {
        let mut formatter = Formatter::new(tokenize(source), options);
        rule.apply(&mut formatter);
        source_code(formatter.tokens())
    }

    #[test]
    fn default_pipeline_order_is_stable() {
        let names: Vec<_> = default_rules().iter().map(FormatRule::name).collect();
        assert_eq!(
            names,
            vec![
                "linebreaks",
                "fileHeader",
                "braces",
                "consecutiveBlankLines",
                "indent",
                "trailingSpace",
                "linebreakAtEndOfFile",
            ]
        );
    }
}
