//! Scope-aware tokenizer driver.
//!
//! The driver appends raw tokens from the recognizers and runs
//! `process_token` after each append. `process_token` owns every
//! context-sensitive decision: keyword promotion inside `switch` bodies,
//! splitting compound `?`/`!` operators, confirming or demoting tentative
//! generic brackets, and matching scope closers. It may rewrite the tail of
//! the buffer and re-enter itself; recursion depth is bounded by the number
//! of splittable glyphs in a single token.
//!
//! String bodies and comment bodies are scanned by dedicated sub-lexers that
//! take over whenever the innermost open scope is a string or comment.

use swiftfmt_lexer_core::{scalars, Cursor};

use crate::scan;
use crate::token::Token;

/// Tokenize source text into a scoped token stream.
///
/// Total: malformed input is represented as [`Token::Error`] values in the
/// stream, never as a failure. See the crate docs for the round-trip
/// guarantee.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source).run()
}

/// Innermost scope classes that change how raw input is scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BodyScope {
    None,
    StringLiteral,
    BlockComment,
    LineComment,
}

struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    /// Indices of currently-open scope tokens, innermost last. Entries are
    /// `StartOfScope` tokens, except for pending `case`/`default` labels
    /// awaiting their `:` (stored as the `EndOfScope` index).
    scope_stack: Vec<usize>,
    /// Indices of `<` scopes whose `>` close has been recorded, in close
    /// order. Consulted when later context demotes the pair to symbols.
    closed_generic_scopes: Vec<usize>,
    /// Currently-open `switch` statements; `case`/`default` only promote to
    /// scope closers while this is non-zero.
    nested_switches: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
            scope_stack: Vec::new(),
            closed_generic_scopes: Vec::new(),
            nested_switches: 0,
        }
    }

    fn run(mut self) -> Vec<Token> {
        while !self.cursor.is_at_end() {
            match self.body_scope() {
                BodyScope::StringLiteral => self.scan_string_body(),
                BodyScope::BlockComment => self.scan_block_comment_body(),
                BodyScope::LineComment | BodyScope::None => {
                    let Some(token) = scan::next_token(&mut self.cursor) else {
                        break;
                    };
                    self.push(token);
                    if self.body_scope() == BodyScope::LineComment {
                        self.scan_line_comment_body();
                    }
                }
            }
        }
        self.finalize();
        self.tokens
    }

    fn body_scope(&self) -> BodyScope {
        let Some(&scope_idx) = self.scope_stack.last() else {
            return BodyScope::None;
        };
        match &self.tokens[scope_idx] {
            Token::StartOfScope(s) if s == "\"" => BodyScope::StringLiteral,
            Token::StartOfScope(s) if s == "/*" => BodyScope::BlockComment,
            Token::StartOfScope(s) if s == "//" => BodyScope::LineComment,
            _ => BodyScope::None,
        }
    }

    /// Append a token and give the driver a chance to reinterpret it.
    fn push(&mut self, token: Token) {
        self.tokens.push(token);
        self.process_token();
    }

    /// Most recent non-whitespace token strictly before `before`.
    fn last_non_space(&self, before: usize) -> Option<usize> {
        self.tokens[..before].iter().rposition(|t| !t.is_whitespace())
    }

    // ─── Context-sensitive reinterpretation ──────────────────────────────

    fn process_token(&mut self) {
        let idx = self.tokens.len() - 1;

        // A tentative generic bracket only survives when it attaches directly
        // to an identifier (or to the `?`/`!` of an optional member, which the
        // suffix splitter produces). `a < b` reads as a comparison.
        if matches!(&self.tokens[idx], Token::StartOfScope(s) if s == "<") {
            let attaches = idx > 0
                && match &self.tokens[idx - 1] {
                    Token::Identifier(_) => true,
                    Token::Symbol(s) => s == "?" || s == "!",
                    _ => false,
                };
            if !attaches {
                self.tokens[idx] = Token::Symbol("<".to_string());
                self.process_token();
                return;
            }
        }

        // A compound operator beginning with `?` or `!` after an expression
        // is a postfix marker plus a second operator: split it.
        if let Token::Symbol(text) = &self.tokens[idx] {
            let mut chars = text.chars();
            if let Some(first @ ('?' | '!')) = chars.next() {
                if chars.next().is_some() && idx > 0 && !self.tokens[idx - 1].is_whitespace() {
                    let suffix = text[first.len_utf8()..].to_string();
                    self.tokens[idx] = Token::Symbol(first.to_string());
                    if let Some(rest) = suffix.strip_prefix('<') {
                        let rest = rest.to_string();
                        self.push(Token::StartOfScope("<".to_string()));
                        if !rest.is_empty() {
                            self.push(Token::Symbol(rest));
                        }
                    } else {
                        self.push(Token::Symbol(suffix));
                    }
                    return;
                }
            }
        }

        // Generic backtracking: a token that cannot follow a generic clause
        // proves the most recent `<…>` pair was a comparison after all. A
        // symbol that closes a still-open `<` scope (nested `>>`, `>=`) is
        // the closure's business, not a trigger.
        let closes_open_generic = self
            .scope_stack
            .last()
            .is_some_and(|&s| matches!(&self.tokens[s], Token::StartOfScope(open) if open == "<"))
            && matches!(&self.tokens[idx], Token::Symbol(s) if s.starts_with('>'));
        if let Some(prev) = self.last_non_space(idx) {
            if !closes_open_generic
                && matches!(&self.tokens[prev], Token::EndOfScope(s) if s == ">")
                && self.is_backtrack_trigger(idx)
            {
                self.demote_closed_generics(prev);
                if prev + 1 == idx {
                    if let (Token::Symbol(lhs), Token::Symbol(rhs)) =
                        (&self.tokens[prev], &self.tokens[idx])
                    {
                        let merged = format!("{lhs}{rhs}");
                        self.tokens[prev] = Token::Symbol(merged);
                        self.tokens.pop();
                    }
                }
                self.process_token();
                return;
            }
        }

        // Keyword promotion inside switch bodies.
        if let Token::Identifier(name) = &self.tokens[idx] {
            match name.as_str() {
                "switch" => {
                    let member = matches!(
                        self.last_non_space(idx).map(|i| &self.tokens[i]),
                        Some(Token::Symbol(s)) if s == "."
                    );
                    if !member {
                        self.nested_switches += 1;
                    }
                }
                "case" | "default" if self.nested_switches > 0 && self.begins_case_label(idx) => {
                    let text = name.clone();
                    self.tokens[idx] = Token::EndOfScope(text);
                    self.process_token();
                    return;
                }
                _ => {}
            }
        }

        // Scope resolution.
        let token = self.tokens[idx].clone();
        if let Some(&scope_idx) = self.scope_stack.last() {
            let scope = self.tokens[scope_idx].clone();
            if scope.is_end_of_scope() {
                // Pending case/default label: the next unnested colon opens
                // the body scope.
                if matches!(&token, Token::Symbol(s) if s == ":") {
                    self.scope_stack.pop();
                    self.tokens[idx] = Token::StartOfScope(":".to_string());
                    self.process_token();
                    return;
                }
            } else if token.closes_scope_for(&scope) {
                self.close_scope(scope_idx, idx);
                return;
            } else if matches!(&scope, Token::StartOfScope(s) if s == "<")
                && self.aborts_generic(idx)
            {
                self.scope_stack.pop();
                self.tokens[scope_idx] = Token::Symbol("<".to_string());
                self.process_token();
                return;
            }
        }

        // Scope opens, pending labels, unmatched closers.
        match &self.tokens[idx] {
            Token::StartOfScope(_) => self.scope_stack.push(idx),
            Token::EndOfScope(s) => {
                if s == "case" || s == "default" {
                    self.scope_stack.push(idx);
                } else {
                    let text = s.clone();
                    self.tokens[idx] = Token::Error(text);
                }
            }
            _ => {}
        }
    }

    /// Pop `scope_idx` and apply the closure side effects for `idx`.
    fn close_scope(&mut self, scope_idx: usize, idx: usize) {
        self.scope_stack.pop();
        let Token::StartOfScope(scope_text) = self.tokens[scope_idx].clone() else {
            return;
        };
        match scope_text.as_str() {
            "<" => {
                self.closed_generic_scopes.push(scope_idx);
                if let Token::Symbol(text) = self.tokens[idx].clone() {
                    self.tokens[idx] = Token::EndOfScope(">".to_string());
                    let suffix = text[1..].to_string();
                    if !suffix.is_empty() {
                        self.push(Token::Symbol(suffix));
                    }
                }
            }
            ":" => match &self.tokens[idx] {
                Token::EndOfScope(s) if s == "}" => {
                    // The brace that ends a case body also ends the switch.
                    self.nested_switches = self.nested_switches.saturating_sub(1);
                    if let Some(&brace_idx) = self.scope_stack.last() {
                        if matches!(&self.tokens[brace_idx], Token::StartOfScope(b) if b == "{") {
                            self.scope_stack.pop();
                        }
                    }
                }
                Token::EndOfScope(_) => {
                    // `case`/`default`: the next pending label.
                    self.scope_stack.push(idx);
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn begins_case_label(&self, idx: usize) -> bool {
        match self.last_non_space(idx).map(|i| &self.tokens[i]) {
            Some(Token::Symbol(s)) if s == "." || s == "," => false,
            Some(Token::Identifier(name)) => {
                !matches!(name.as_str(), "if" | "guard" | "while" | "for")
            }
            _ => true,
        }
    }

    fn is_backtrack_trigger(&self, idx: usize) -> bool {
        match &self.tokens[idx] {
            Token::Identifier(name) => {
                !matches!(name.as_str(), "in" | "is" | "as" | "where" | "else")
            }
            Token::Symbol(s) => {
                !matches!(s.as_str(), "=" | "->" | ">" | "," | ":" | ";" | "?" | "!" | ".")
            }
            Token::Number(_) => true,
            Token::StartOfScope(s) => s == "\"",
            _ => false,
        }
    }

    /// Demote the `<…>` pair whose close sits at `from`, walking back over
    /// any directly preceding generic closes (nested `>>`) and demoting each
    /// in turn.
    fn demote_closed_generics(&mut self, from: usize) {
        let mut i = from;
        loop {
            self.tokens[i] = Token::Symbol(">".to_string());
            if let Some(open_idx) = self.closed_generic_scopes.pop() {
                self.tokens[open_idx] = Token::Symbol("<".to_string());
            }
            if i == 0 {
                break;
            }
            i -= 1;
            if !matches!(&self.tokens[i], Token::EndOfScope(s) if s == ">") {
                break;
            }
        }
    }

    /// Tokens that cannot appear inside a generic parameter clause.
    fn aborts_generic(&self, idx: usize) -> bool {
        match &self.tokens[idx] {
            Token::EndOfScope(_) => true,
            Token::Symbol(s) => {
                if matches!(s.as_str(), "." | "," | ":" | "==" | "?" | "!") {
                    return false;
                }
                // `?>…`/`!>…` forms belong to the suffix splitter.
                let mut chars = s.chars();
                let split_form = matches!(chars.next(), Some('?' | '!')) && chars.next() == Some('>');
                !split_form
            }
            _ => false,
        }
    }

    // ─── Body sub-lexers ─────────────────────────────────────────────────

    fn scan_string_body(&mut self) {
        let mut body = String::new();
        let mut escaped = false;
        loop {
            let Some(c) = self.cursor.peek() else { break };
            if scalars::is_linebreak(c) {
                // Strings do not span lines; leave the scope open and let
                // finalization flag the truncation.
                self.flush_string_body(&mut body);
                let linebreak = scan::parse_linebreak(&mut self.cursor);
                self.push(linebreak);
                return;
            }
            if c == '"' && !escaped {
                self.cursor.advance();
                self.flush_string_body(&mut body);
                self.push(Token::EndOfScope("\"".to_string()));
                return;
            }
            if c == '(' && escaped {
                // Interpolation: the body keeps its trailing backslash and
                // ordinary tokenization resumes inside the parentheses.
                self.cursor.advance();
                self.flush_string_body(&mut body);
                self.push(Token::StartOfScope("(".to_string()));
                return;
            }
            self.cursor.advance();
            body.push(c);
            escaped = c == '\\' && !escaped;
        }
        self.flush_string_body(&mut body);
    }

    fn flush_string_body(&mut self, body: &mut String) {
        if !body.is_empty() {
            self.push(Token::StringBody(std::mem::take(body)));
        }
    }

    fn scan_block_comment_body(&mut self) {
        let mut body = String::new();
        loop {
            let Some(c) = self.cursor.peek() else { break };
            if scalars::is_linebreak(c) {
                self.flush_comment_body(&mut body);
                let linebreak = scan::parse_linebreak(&mut self.cursor);
                self.push(linebreak);
                continue;
            }
            if scalars::is_space(c) {
                self.flush_comment_body(&mut body);
                let space = self.cursor.consume_while(scalars::is_space).to_string();
                self.push(Token::Whitespace(space));
                continue;
            }
            if c == '/' && self.cursor.peek_second() == Some('*') {
                self.flush_comment_body(&mut body);
                self.cursor.advance();
                self.cursor.advance();
                self.push(Token::StartOfScope("/*".to_string()));
                continue;
            }
            if c == '*' && self.cursor.peek_second() == Some('/') {
                self.flush_comment_body(&mut body);
                self.cursor.advance();
                self.cursor.advance();
                self.push(Token::EndOfScope("*/".to_string()));
                if self.body_scope() != BodyScope::BlockComment {
                    return;
                }
                continue;
            }
            self.cursor.advance();
            body.push(c);
        }
        self.flush_comment_body(&mut body);
    }

    fn flush_comment_body(&mut self, body: &mut String) {
        if !body.is_empty() {
            self.push(Token::CommentBody(std::mem::take(body)));
        }
    }

    /// Consume the rest of the line after `//`, splitting it into word and
    /// whitespace runs. The terminating linebreak is left for the main loop,
    /// which closes the `//` scope when it arrives.
    fn scan_line_comment_body(&mut self) {
        let mut rest = self.cursor.line_remainder();
        while !rest.is_empty() {
            let leading_space = rest.chars().next().is_some_and(scalars::is_space);
            let end = rest
                .char_indices()
                .find(|&(_, c)| scalars::is_space(c) != leading_space)
                .map_or(rest.len(), |(i, _)| i);
            let (run, tail) = rest.split_at(end);
            rest = tail;
            if leading_space {
                self.push(Token::Whitespace(run.to_string()));
            } else {
                self.push(Token::CommentBody(run.to_string()));
            }
        }
    }

    // ─── End-of-input finalization ───────────────────────────────────────

    fn finalize(&mut self) {
        // Dangling generics demote wherever they sit in the stack, line
        // comments end at EOF, and anything else is a truncation.
        let mut truncated = false;
        while let Some(idx) = self.scope_stack.pop() {
            match &self.tokens[idx] {
                Token::StartOfScope(s) if s == "<" => {
                    self.tokens[idx] = Token::Symbol("<".to_string());
                }
                Token::StartOfScope(s) if s == "//" => {}
                _ => truncated = true,
            }
        }
        if truncated && !self.tokens.last().is_some_and(Token::is_error) {
            self.tokens.push(Token::Error(String::new()));
        }
    }
}
