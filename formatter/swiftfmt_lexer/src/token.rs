//! Token variant and classification predicates.
//!
//! Every token carries the exact source slice it was lexed from, so the
//! buffer round-trips to text by concatenation. Equality is structural over
//! the discriminant and the carried string.

/// A lexed token.
///
/// Scope delimiters are tagged by the opening or closing string:
///
/// - `StartOfScope`: `(`, `[`, `{`, `"`, `/*`, `//`, `#if`, `<`, `:`
/// - `EndOfScope`: `)`, `]`, `}`, `"`, `*/`, `#endif`, `>`, `case`, `default`
///
/// A `:` is only a scope when it opens a `case`/`default` body; a `<` is only
/// a scope when the tokenizer confirms it is generic. Everything else the
/// lexer cannot place is an `Error` carrying the offending text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Numeric literal (decimal, hex, binary, or octal).
    Number(String),
    /// Identifier, keyword, attribute (`@x`), directive (`#x`), or
    /// back-quoted name.
    Identifier(String),
    /// Operator or punctuation.
    Symbol(String),
    /// A run of literal text inside a string.
    StringBody(String),
    /// A word run inside a comment.
    CommentBody(String),
    /// Intra-line whitespace.
    Whitespace(String),
    /// `\n`, `\r`, or the `\r\n` pair.
    Linebreak(String),
    /// Opens a delimited scope.
    StartOfScope(String),
    /// Closes a delimited scope.
    EndOfScope(String),
    /// Malformed input, carried verbatim.
    Error(String),
}

impl Token {
    /// The exact source slice this token was lexed from.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Token::Number(s)
            | Token::Identifier(s)
            | Token::Symbol(s)
            | Token::StringBody(s)
            | Token::CommentBody(s)
            | Token::Whitespace(s)
            | Token::Linebreak(s)
            | Token::StartOfScope(s)
            | Token::EndOfScope(s)
            | Token::Error(s) => s,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    #[inline]
    #[must_use]
    pub fn is_linebreak(&self) -> bool {
        matches!(self, Token::Linebreak(_))
    }

    #[inline]
    #[must_use]
    pub fn is_whitespace_or_linebreak(&self) -> bool {
        self.is_whitespace() || self.is_linebreak()
    }

    /// Comment delimiters and comment bodies.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        match self {
            Token::CommentBody(_) => true,
            Token::StartOfScope(s) => s == "//" || s == "/*",
            Token::EndOfScope(s) => s == "*/",
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_whitespace_or_comment(&self) -> bool {
        self.is_whitespace() || self.is_comment()
    }

    #[inline]
    #[must_use]
    pub fn is_whitespace_or_comment_or_linebreak(&self) -> bool {
        self.is_whitespace_or_comment() || self.is_linebreak()
    }

    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Token::Error(_))
    }

    #[inline]
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    #[inline]
    #[must_use]
    pub fn is_start_of_scope(&self) -> bool {
        matches!(self, Token::StartOfScope(_))
    }

    #[inline]
    #[must_use]
    pub fn is_end_of_scope(&self) -> bool {
        matches!(self, Token::EndOfScope(_))
    }

    /// Returns `true` when `self` closes the scope opened by `scope`,
    /// according to the pairing table.
    ///
    /// A `<` scope accepts any symbol whose string begins with `>` (the
    /// tokenizer splits off the remainder) as well as an already-rewritten
    /// `EndOfScope(">")`. A `//` scope is closed by any linebreak.
    #[must_use]
    pub fn closes_scope_for(&self, scope: &Token) -> bool {
        let Token::StartOfScope(open) = scope else {
            return false;
        };
        match (open.as_str(), self) {
            ("(", Token::EndOfScope(close)) => close == ")",
            ("[", Token::EndOfScope(close)) => close == "]",
            ("{", Token::EndOfScope(close)) => close == "}",
            (":", Token::EndOfScope(close)) => {
                close == "}" || close == "case" || close == "default"
            }
            ("/*", Token::EndOfScope(close)) => close == "*/",
            ("#if", Token::EndOfScope(close)) => close == "#endif",
            ("\"", Token::EndOfScope(close)) => close == "\"",
            ("<", Token::Symbol(close)) => close.starts_with('>'),
            ("<", Token::EndOfScope(close)) => close == ">",
            ("//", Token::Linebreak(_)) => true,
            _ => false,
        }
    }
}
