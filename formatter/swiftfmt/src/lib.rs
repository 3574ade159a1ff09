//! Rule-driven source formatter and linter.
//!
//! swiftfmt formats source by tokenizing it into a scoped token stream
//! (see `swiftfmt_lexer`), running an ordered list of rewrite rules over the
//! buffer until a fixed point is reached, and serializing the tokens back to
//! text.
//!
//! # Quick start
//!
//! ```
//! use swiftfmt::{default_rules, format, FormatOptions};
//!
//! let source = "func foo()\n{\nbar()\n}";
//! let formatted = format(source, &default_rules(), &FormatOptions::default()).unwrap();
//! assert_eq!(formatted, "func foo() {\n    bar()\n}\n");
//! ```
//!
//! # Architecture
//!
//! - [`tokenize`] / [`source_code`]: total conversions between text and
//!   tokens (re-exported from the lexer crate).
//! - [`apply_rules`]: the fixed-point engine with round and per-rule time
//!   bounds.
//! - [`rules`]: the built-in rule catalog; external rules are ordinary
//!   [`FormatRule`] values.
//! - [`cache_fingerprint`]: the hash contract for the external result cache.
//!
//! Formatting never partially succeeds: a parse diagnostic, rule timeout, or
//! non-converging rule set fails the whole call and the input is left as it
//! was.

pub mod engine;
pub mod error;
pub mod formatter;
pub mod hash;
pub mod options;
pub mod rules;

pub use engine::{apply_rules, apply_rules_with_callback};
pub use error::FormatError;
pub use formatter::Formatter;
pub use hash::cache_fingerprint;
pub use options::{FileHeader, FormatOptions};
pub use rules::{default_rules, FormatRule};
pub use swiftfmt_lexer::{
    first_parse_error, offset_for_token, source_code, tokenize, ParseError, Token,
};

/// Format source text with the given rules and options.
///
/// # Errors
///
/// See [`apply_rules`].
pub fn format(
    source: &str,
    rules: &[FormatRule],
    options: &FormatOptions,
) -> Result<String, FormatError> {
    let tokens = apply_rules(rules, tokenize(source), options)?;
    Ok(source_code(&tokens))
}

/// Format an already-tokenized buffer.
///
/// # Errors
///
/// See [`apply_rules`].
pub fn format_tokens(
    tokens: Vec<Token>,
    rules: &[FormatRule],
    options: &FormatOptions,
) -> Result<Vec<Token>, FormatError> {
    apply_rules(rules, tokens, options)
}

/// First diagnostic for a token buffer under the given options, if any.
#[must_use]
pub fn parsing_error(tokens: &[Token], options: &FormatOptions) -> Option<ParseError> {
    first_parse_error(
        tokens,
        options.fragment,
        options.ignore_conflict_markers,
        options.tab_width,
    )
}
