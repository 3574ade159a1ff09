//! Scope-aware tokenizer for swiftfmt.
//!
//! Converts raw source text into a [`Token`] stream in which every delimited
//! region (parentheses, braces, strings, comments, conditional-compilation
//! blocks, generic angle brackets, `switch` case bodies) is bracketed by
//! [`Token::StartOfScope`] / [`Token::EndOfScope`] tokens.
//!
//! # Totality and round-tripping
//!
//! [`tokenize`] never fails: malformed input surfaces as [`Token::Error`]
//! values in the stream. For any input that produces no error token,
//! concatenating the token strings reproduces the input exactly:
//!
//! ```
//! use swiftfmt_lexer::{source_code, tokenize};
//!
//! let source = "let x = [1, 2]\n";
//! assert_eq!(source_code(&tokenize(source)), source);
//! ```
//!
//! # Context-sensitive reinterpretation
//!
//! Several lexical decisions cannot be made locally; the tokenizer rewrites
//! already-emitted tokens when later context forces a different reading:
//!
//! - `<`/`>` pairs are tentatively generic scopes and are demoted to plain
//!   symbols when the following token proves them comparisons;
//! - `case` and `default` become scope closers inside `switch` bodies;
//! - compound `?`/`!` operators split when they follow an expression.
//!
//! Diagnostics are a separate pass: [`first_parse_error`] reports the first
//! error token or merge-conflict marker with a line/column position.

pub mod parse_error;
mod scan;
pub mod token;
mod tokenizer;

pub use parse_error::{first_parse_error, offset_for_token, ParseError};
pub use token::Token;
pub use tokenizer::tokenize;

/// Concatenate the token strings back into source text.
///
/// Total. This is the inverse of [`tokenize`] whenever the stream contains no
/// [`Token::Error`].
#[must_use]
pub fn source_code(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}
