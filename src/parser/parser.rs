//! Precedence-climbing evaluator.
//!
//! The parser never builds a tree. It pulls tokens from the lexer one at a
//! time and folds every operator into the running left operand as soon as
//! its right operand is complete.
//!
//! Binding is decided by the precedence table: a run of operators with the
//! same precedence folds left to right, and each right operand is parsed
//! with a minimum precedence one above its operator's, so tighter operators
//! bind first.

use std::marker::PhantomData;

use tracing::instrument;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
    value::value::Operand,
};

use super::lookups::PrecedenceTable;

/// Evaluation state for a single expression.
///
/// Holds the lexer (source and cursor), the lookahead token, the precedence
/// table and the literal constructor. A parser is built for one expression
/// and dropped once its value is returned.
pub struct Parser<'a, V, F> {
    /// Scanner over the expression source
    lexer: Lexer<'a>,
    /// The lookahead token
    current: Token<'a>,
    /// Operator precedences
    table: &'a PrecedenceTable,
    /// Turns a literal token into an operand
    parse_literal: F,
    _value: PhantomData<fn() -> V>,
}

impl<'a, V, F> Parser<'a, V, F>
where
    V: Operand,
    F: Fn(&str) -> V,
{
    /// Creates a parser primed with the first token of `source`.
    pub fn new(source: &'a str, table: &'a PrecedenceTable, parse_literal: F) -> Self {
        let mut lexer = Lexer::new(source, table);
        let current = lexer.next_token();

        Parser {
            lexer,
            current,
            table,
            parse_literal,
            _value: PhantomData,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token<'a> {
        &self.current
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token<'a> {
        let previous = self.current;
        self.current = self.lexer.next_token();
        previous
    }

    /// Consumes the operand at the current position and returns its text.
    ///
    /// A `-` or `+` directly followed by a word is a sign, not an operator,
    /// so `-5` reaches the literal constructor whole.
    fn operand_literal(&mut self) -> &'a str {
        let token = self.advance();
        if is_sign_of(&token, &self.current) {
            let word = self.advance();
            return self.lexer.slice(token.span.start.0, word.span.end.0);
        }
        token.value
    }

    fn operand(&mut self) -> V {
        let literal = self.operand_literal();
        (self.parse_literal)(literal)
    }

    /// Precedence of the current token, if it is an operator.
    pub fn current_precedence(&self) -> Option<u32> {
        if self.current.is_eof() {
            return None;
        }
        self.table.get(self.current.value)
    }

    /// Evaluates the longest expression starting at the current token whose
    /// operators all have precedence `min_precedence` or higher.
    ///
    /// On entry the current token is an operand. On return the current token
    /// is the first one not consumed: end of input, a non-operator, or an
    /// operator below `min_precedence`.
    pub fn binary_expr(&mut self, min_precedence: u32) -> V {
        let mut left = self.operand();

        while let Some(precedence) = self.current_precedence().filter(|p| *p >= min_precedence) {
            // The right operand consumed every operator above `precedence`,
            // so once this run ends the lookahead binds looser than it.
            while self.current_precedence() == Some(precedence) {
                let operator = self.advance();
                // Nothing binds tighter than `u32::MAX`.
                let right = match precedence.checked_add(1) {
                    Some(next) => self.binary_expr(next),
                    None => self.operand(),
                };
                left = left.apply(operator.value, right);
            }
        }

        left
    }
}

fn is_sign_of(sign: &Token, next: &Token) -> bool {
    sign.kind == TokenKind::Operator
        && matches!(sign.value, "-" | "+")
        && next.kind == TokenKind::Word
        && next.span.start == sign.span.end
}

/// Evaluates `source` with the given precedence table and literal constructor.
///
/// Never fails: malformed input yields whatever error value the constructor
/// or the operands produce. Text following the first token that is not an
/// operator is ignored; see `check` for a strict variant.
///
/// # Examples
///
/// ```
/// use infix::{evaluate, parse_literal, PrecedenceTable, Value};
///
/// let table = PrecedenceTable::default();
/// assert_eq!(evaluate(&table, parse_literal, "2 + 3 * 4"), Value::Integer(14));
/// ```
#[instrument(level = "trace", skip_all, fields(source = %source))]
pub fn evaluate<V, F>(table: &PrecedenceTable, parse_literal: F, source: &str) -> V
where
    V: Operand,
    F: Fn(&str) -> V,
{
    let mut parser = Parser::new(source, table, parse_literal);
    parser.binary_expr(1) // start with lowest precedence
}

/// Verifies that `source` is a sequence of operands separated by operators
/// from `table`, with nothing left over.
///
/// Only the shape is checked. Literals are not validated, so `1 + foo`
/// passes and evaluates to an illegal-literal error value.
pub fn check(table: &PrecedenceTable, source: &str) -> Result<(), Error> {
    let tokens = tokenize(source, table);
    let is_operator = |token: &Token| !token.is_eof() && table.contains(token.value);

    let mut expect_operand = true;
    let mut index = 0;

    while let Some(token) = tokens.get(index) {
        index += 1;
        if expect_operand {
            if tokens.get(index).is_some_and(|next| is_sign_of(token, next)) {
                index += 1;
                expect_operand = false;
                continue;
            }
            if token.is_eof() || is_operator(token) {
                return Err(Error::new(
                    ErrorImpl::ExpectedOperand {
                        token: token.value.to_string(),
                    },
                    token.span.start,
                ));
            }
            if token.kind == TokenKind::Quoted && !token.is_terminated_string() {
                return Err(Error::new(
                    ErrorImpl::UnterminatedString {
                        token: token.value.to_string(),
                    },
                    token.span.start,
                ));
            }
            expect_operand = false;
        } else if token.is_eof() {
            return Ok(());
        } else if is_operator(token) {
            expect_operand = true;
        } else {
            return Err(Error::new(
                ErrorImpl::TrailingInput {
                    token: token.value.to_string(),
                },
                token.span.start,
            ));
        }
    }

    Ok(())
}

/// Runs `check`, then `evaluate`. Error values from evaluation are still
/// returned as `Ok`.
pub fn evaluate_strict<V, F>(table: &PrecedenceTable, parse_literal: F, source: &str) -> Result<V, Error>
where
    V: Operand,
    F: Fn(&str) -> V,
{
    check(table, source)?;
    Ok(evaluate(table, parse_literal, source))
}
