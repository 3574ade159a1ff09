//! Formatter state: the substrate rules operate on.
//!
//! A `Formatter` owns the token buffer for the duration of a format call,
//! together with the working options and a warning sink the engine drains
//! after each rule.

use swiftfmt_lexer::Token;

use crate::options::FormatOptions;

/// Mutable formatting state handed to each rule in turn.
pub struct Formatter {
    tokens: Vec<Token>,
    options: FormatOptions,
    warnings: Vec<String>,
}

impl Formatter {
    pub fn new(tokens: Vec<Token>, options: FormatOptions) -> Self {
        Self {
            tokens,
            options,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Rules rewrite the buffer directly; the engine compares buffers
    /// between rounds to detect convergence.
    pub fn tokens_mut(&mut self) -> &mut Vec<Token> {
        &mut self.tokens
    }

    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Record a lint-style warning for the current rule.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Drain the warning sink; called by the engine after each rule.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Index of the last token before `index` that is neither whitespace nor
    /// a linebreak.
    #[must_use]
    pub fn last_code_index_before(&self, index: usize) -> Option<usize> {
        self.tokens[..index.min(self.tokens.len())]
            .iter()
            .rposition(|t| !t.is_whitespace_or_linebreak())
    }

    /// Index of the first token at or after `index` that is not whitespace.
    #[must_use]
    pub fn next_non_space_index(&self, index: usize) -> Option<usize> {
        self.tokens[index..]
            .iter()
            .position(|t| !t.is_whitespace())
            .map(|offset| index + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftfmt_lexer::tokenize;

    #[test]
    fn warnings_drain_clean() {
        let mut formatter = Formatter::new(Vec::new(), FormatOptions::default());
        formatter.warn("first");
        formatter.warn("second");
        assert_eq!(formatter.take_warnings(), vec!["first", "second"]);
        assert!(formatter.take_warnings().is_empty());
    }

    #[test]
    fn last_code_index_skips_trivia() {
        let formatter = Formatter::new(tokenize("a \n b"), FormatOptions::default());
        // tokens: a, space, linebreak, space, b
        assert_eq!(formatter.last_code_index_before(4), Some(0));
        assert_eq!(formatter.last_code_index_before(0), None);
    }

    #[test]
    fn next_non_space_skips_whitespace_only() {
        let formatter = Formatter::new(tokenize("a  \nb"), FormatOptions::default());
        // tokens: a, space, linebreak, b
        assert_eq!(formatter.next_non_space_index(1), Some(2));
        assert_eq!(formatter.next_non_space_index(3), Some(3));
    }
}
