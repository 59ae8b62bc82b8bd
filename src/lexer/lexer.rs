use lazy_static::lazy_static;
use regex::Regex;

use crate::{parser::lookups::PrecedenceTable, MK_TOKEN};

use super::tokens::{Token, TokenKind};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^[\x00-\x20]+").unwrap();
    static ref PATTERNS: Vec<RegexPattern> = vec![
        // A backslash escapes the next character, a lone trailing backslash
        // is kept so the token reads as unterminated.
        RegexPattern { regex: Regex::new(r#"(?s)^"(?:[^"\\]|\\.)*(?:"|\\)?"#).unwrap(), kind: TokenKind::Quoted },
        RegexPattern { regex: Regex::new(r"^[A-Za-z0-9_]+").unwrap(), kind: TokenKind::Word },
        RegexPattern { regex: Regex::new(r#"^[^A-Za-z0-9_"\x00-\x20]+"#).unwrap(), kind: TokenKind::Operator },
    ];
}

pub struct RegexPattern {
    regex: Regex,
    kind: TokenKind,
}

/// On-demand scanner over one expression.
///
/// The lexer holds the precedence table so that operator runs such as `*-`
/// split into the longest operator the table knows about.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    table: &'a PrecedenceTable,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, table: &'a PrecedenceTable) -> Lexer<'a> {
        Lexer { source, pos: 0, table }
    }

    /// The source text between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        if let Some(found) = WHITESPACE.find(self.remainder()) {
            self.pos += found.end();
        }
    }

    /// Scans the next token and moves the cursor past it. Returns an `EOF`
    /// token with an empty value once the source is exhausted.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, "", self.pos, self.pos);
        }

        let remaining = self.remainder();
        let start = self.pos;

        let (kind, len) = PATTERNS
            .iter()
            .find_map(|pattern| {
                pattern.regex.find(remaining).map(|found| match pattern.kind {
                    TokenKind::Operator => (pattern.kind, self.longest_operator(found.as_str())),
                    kind => (kind, found.end()),
                })
            })
            .unwrap_or_else(|| {
                let first = remaining.chars().next().map_or(1, char::len_utf8);
                (TokenKind::Operator, first)
            });

        self.pos += len;
        MK_TOKEN!(kind, &remaining[..len], start, self.pos)
    }

    /// Byte length of the longest prefix of `run` that is an operator in the
    /// table, or the whole run when no prefix is.
    fn longest_operator(&self, run: &str) -> usize {
        run.char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .filter(|end| self.table.contains(&run[..*end]))
            .last()
            .unwrap_or(run.len())
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Scans all of `source`. The returned list always ends with an `EOF` token.
pub fn tokenize<'a>(source: &'a str, table: &'a PrecedenceTable) -> Vec<Token<'a>> {
    let mut lex = Lexer::new(source, table);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        tokens.push(token);
        if token.is_eof() {
            break;
        }
    }

    tokens
}
