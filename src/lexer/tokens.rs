use std::fmt::Display;

use crate::Span;

/// Lexical class of a token, decided by its first character.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    /// A double-quoted literal, quotes included.
    Quoted,
    /// A run of ASCII letters, digits and underscores.
    Word,
    /// A run of punctuation characters.
    Operator,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A slice of the expression source. Tokens borrow from the source, they
/// never own text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    pub span: Span,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == TokenKind::EOF {
            write!(f, "end of input")
        } else {
            write!(f, "{}", self.value)
        }
    }
}

impl Token<'_> {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    /// A quoted token is terminated when it is at least two characters long
    /// and its final quote is not escaped.
    pub fn is_terminated_string(&self) -> bool {
        if self.kind != TokenKind::Quoted || self.value.len() < 2 || !self.value.ends_with('"') {
            return false;
        }

        let body = &self.value[1..self.value.len() - 1];
        let trailing_backslashes = body.bytes().rev().take_while(|b| *b == b'\\').count();
        trailing_backslashes % 2 == 0
    }
}
