//! Property-based tests for the tokenizer.
//!
//! These generate synthetic source from a vocabulary of token shapes and
//! verify the lexer's laws:
//!
//! 1. Round-trip: error-free streams concatenate back to the input.
//! 2. Scope balance: error-free streams nest properly under the pairing
//!    table.
//! 3. Generic determinism: every `<` ends up either a confirmed scope with a
//!    matching close or a plain symbol, never a dangling scope.

use proptest::prelude::*;
use swiftfmt_lexer::{source_code, tokenize, Token};

/// Generate a plausible source fragment from concatenated token shapes.
fn source_strategy() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        prop::string::string_regex("[a-z][a-z0-9_]{0,6}").expect("valid regex"),
        Just("let".to_string()),
        Just("func".to_string()),
        Just("switch".to_string()),
        Just("case".to_string()),
        Just("default".to_string()),
        Just("if".to_string()),
    ];
    let number = prop_oneof![
        (0u64..100_000).prop_map(|n| n.to_string()),
        (0u64..255).prop_map(|n| format!("0x{n:X}")),
        (0u64..100).prop_map(|n| format!("{n}.5")),
    ];
    let operator = prop_oneof![
        Just("+".to_string()),
        Just("==".to_string()),
        Just("->".to_string()),
        Just("?".to_string()),
        Just("...".to_string()),
        Just("&&".to_string()),
    ];
    let separator = prop_oneof![
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just(", ".to_string()),
        Just(": ".to_string()),
    ];
    let bracketed = prop_oneof![
        Just("(a)".to_string()),
        Just("[b]".to_string()),
        Just("{ c }".to_string()),
        Just("\"text\"".to_string()),
    ];
    let comment = prop_oneof![
        Just("// note\n".to_string()),
        Just("/* block */".to_string()),
    ];
    let angled = prop_oneof![
        Just("Array<Int>".to_string()),
        Just("a < b".to_string()),
    ];
    let piece = prop_oneof![word, number, operator, separator, bracketed, comment, angled];
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

/// Walk the stream with the pairing rules and report whether scopes nest.
///
/// Mirrors the tokenizer's closure rules: `case`/`default` markers may close
/// a `:` scope or stand alone awaiting their colon, and the `}` that closes
/// a `:` scope also closes the enclosing `{`.
fn scopes_balance(tokens: &[Token]) -> bool {
    let mut stack: Vec<&Token> = Vec::new();
    for token in tokens {
        match token {
            Token::StartOfScope(_) => stack.push(token),
            Token::EndOfScope(text) if text == "case" || text == "default" => {
                if matches!(stack.last(), Some(Token::StartOfScope(s)) if s == ":") {
                    stack.pop();
                }
            }
            Token::EndOfScope(_) => {
                let Some(open) = stack.pop() else { return false };
                if !token.closes_scope_for(open) {
                    return false;
                }
                if matches!(open, Token::StartOfScope(s) if s == ":")
                    && token.text() == "}"
                    && matches!(stack.last(), Some(Token::StartOfScope(s)) if s == "{")
                {
                    stack.pop();
                }
            }
            Token::Linebreak(_) => {
                if matches!(stack.last(), Some(Token::StartOfScope(s)) if s == "//") {
                    stack.pop();
                }
            }
            _ => {}
        }
    }
    stack.iter().all(|open| matches!(open, Token::StartOfScope(s) if s == "//"))
}

proptest! {
    #[test]
    fn roundtrip_holds_without_errors(source in source_strategy()) {
        let tokens = tokenize(&source);
        if !tokens.iter().any(Token::is_error) {
            prop_assert_eq!(source_code(&tokens), source);
        }
    }

    #[test]
    fn error_free_streams_balance(source in source_strategy()) {
        let tokens = tokenize(&source);
        if !tokens.iter().any(Token::is_error) {
            prop_assert!(scopes_balance(&tokens), "unbalanced scopes in {:?}", tokens);
        }
    }

    #[test]
    fn generics_are_fully_classified(source in source_strategy()) {
        let tokens = tokenize(&source);
        let opens = tokens
            .iter()
            .filter(|t| matches!(t, Token::StartOfScope(s) if s == "<"))
            .count();
        let closes = tokens
            .iter()
            .filter(|t| matches!(t, Token::EndOfScope(s) if s == ">"))
            .count();
        prop_assert_eq!(opens, closes, "dangling generic bracket in {:?}", tokens);
    }

    #[test]
    fn tokenize_is_total(source in "(?s).{0,48}") {
        // Arbitrary input never panics and always accounts for every byte
        // up to the first error token.
        let tokens = tokenize(&source);
        if !tokens.iter().any(Token::is_error) {
            prop_assert_eq!(source_code(&tokens), source);
        }
    }
}
