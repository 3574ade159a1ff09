//! Recompute leading whitespace from the open-scope depth.
//!
//! Parentheses, brackets, braces, `case` bodies, and `#if` blocks indent
//! their contents by one level. A switch's brace does not indent (the case
//! bodies carry the level instead), so case labels align with the `switch`
//! keyword. Lines that begin with the closer of the innermost scope dedent
//! themselves. Blank lines and block-comment interiors are left alone.

use swiftfmt_lexer::Token;

use crate::formatter::Formatter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    Paren,
    Bracket,
    Brace { switch: bool },
    CaseBody,
    Conditional,
    Generic,
    StringLiteral,
    BlockComment,
    LineComment,
}

impl Scope {
    fn open(text: &str, tokens: &[Token], index: usize) -> Self {
        match text {
            "(" => Scope::Paren,
            "[" => Scope::Bracket,
            "{" => Scope::Brace { switch: follows_switch(tokens, index) },
            ":" => Scope::CaseBody,
            "#if" => Scope::Conditional,
            "\"" => Scope::StringLiteral,
            "/*" => Scope::BlockComment,
            "//" => Scope::LineComment,
            _ => Scope::Generic,
        }
    }

    fn indents(self) -> bool {
        match self {
            Scope::Paren | Scope::Bracket | Scope::CaseBody | Scope::Conditional => true,
            Scope::Brace { switch } => !switch,
            Scope::Generic | Scope::StringLiteral | Scope::BlockComment | Scope::LineComment => {
                false
            }
        }
    }

    /// Does a line that begins with `token` close this scope?
    fn dedents_for(self, token: &Token) -> bool {
        let Token::EndOfScope(close) = token else {
            return false;
        };
        match self {
            Scope::Paren => close == ")",
            Scope::Bracket => close == "]",
            Scope::Brace { .. } => close == "}",
            Scope::CaseBody => close == "}" || close == "case" || close == "default",
            Scope::Conditional => close == "#endif",
            _ => false,
        }
    }
}

/// Was the brace at `index` opened by a `switch` statement? Walks back
/// through the statement, stopping at anything that starts a new one.
fn follows_switch(tokens: &[Token], index: usize) -> bool {
    for token in tokens[..index].iter().rev() {
        match token {
            Token::Identifier(name) if name == "switch" => return true,
            Token::Linebreak(_) => return false,
            Token::Symbol(s) if s == ";" => return false,
            Token::StartOfScope(s) if s == "{" || s == ":" => return false,
            Token::EndOfScope(e) if e == "}" || e == "case" || e == "default" => return false,
            _ => {}
        }
    }
    false
}

pub(super) fn apply(formatter: &mut Formatter) {
    let unit = formatter.options().indent.clone();
    let tokens = formatter.tokens_mut();
    let mut scopes: Vec<Scope> = Vec::new();

    let mut i = set_line_indent(tokens, 0, 0, &unit);
    while i < tokens.len() {
        match &tokens[i] {
            Token::StartOfScope(text) => {
                let scope = Scope::open(text, tokens, i);
                scopes.push(scope);
            }
            Token::EndOfScope(close) => close_scope(&mut scopes, close),
            Token::Linebreak(_) => {
                if matches!(scopes.last(), Some(Scope::LineComment)) {
                    scopes.pop();
                }
                if !matches!(scopes.last(), Some(Scope::BlockComment | Scope::StringLiteral)) {
                    let level = target_level(&scopes, tokens, i + 1);
                    i = set_line_indent(tokens, i + 1, level, &unit);
                    continue;
                }
            }
            _ => {}
        }
        i += 1;
    }
}

fn close_scope(scopes: &mut Vec<Scope>, close: &str) {
    match close {
        ")" => {
            if scopes.last() == Some(&Scope::Paren) {
                scopes.pop();
            }
        }
        "]" => {
            if scopes.last() == Some(&Scope::Bracket) {
                scopes.pop();
            }
        }
        "}" => {
            if scopes.last() == Some(&Scope::CaseBody) {
                scopes.pop();
                if matches!(scopes.last(), Some(Scope::Brace { .. })) {
                    scopes.pop();
                }
            } else if matches!(scopes.last(), Some(Scope::Brace { .. })) {
                scopes.pop();
            }
        }
        "case" | "default" => {
            if scopes.last() == Some(&Scope::CaseBody) {
                scopes.pop();
            }
        }
        "*/" => {
            if scopes.last() == Some(&Scope::BlockComment) {
                scopes.pop();
            }
        }
        "#endif" => {
            if scopes.last() == Some(&Scope::Conditional) {
                scopes.pop();
            }
        }
        ">" => {
            if scopes.last() == Some(&Scope::Generic) {
                scopes.pop();
            }
        }
        "\"" => {
            if scopes.last() == Some(&Scope::StringLiteral) {
                scopes.pop();
            }
        }
        _ => {}
    }
}

/// Indent level for the line starting at `from`, dedenting when the line
/// leads with the innermost scope's closer.
fn target_level(scopes: &[Scope], tokens: &[Token], from: usize) -> usize {
    let level = scopes.iter().filter(|s| s.indents()).count();
    let next = tokens[from..].iter().find(|t| !t.is_whitespace());
    match (scopes.last(), next) {
        (Some(top), Some(next)) if top.dedents_for(next) && top.indents() => {
            level.saturating_sub(1)
        }
        _ => level,
    }
}

/// Rewrite the indentation whitespace at `at` to `level` units, returning
/// the index scanning should resume from. Blank lines are skipped.
fn set_line_indent(tokens: &mut Vec<Token>, at: usize, level: usize, unit: &str) -> usize {
    match tokens.get(at) {
        None | Some(Token::Linebreak(_)) => return at,
        _ => {}
    }
    let desired = unit.repeat(level);
    if let Token::Whitespace(existing) = &tokens[at] {
        if matches!(tokens.get(at + 1), None | Some(Token::Linebreak(_))) {
            // whitespace-only line: trailing-space handles it
            return at + 1;
        }
        if desired.is_empty() {
            tokens.remove(at);
            return at;
        }
        if *existing != desired {
            tokens[at] = Token::Whitespace(desired);
        }
        at + 1
    } else if desired.is_empty() {
        at
    } else {
        tokens.insert(at, Token::Whitespace(desired));
        at + 1
    }
}
