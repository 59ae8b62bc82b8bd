use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}{}", location(.internal_error, .position))]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedOperand { .. } => "ExpectedOperand",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::InvalidPrecedence { .. } => "InvalidPrecedence",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedOperand { token } if token.is_empty() => {
                ErrorTip::Suggestion(String::from("Expression ends where an operand was expected"))
            }
            ErrorImpl::ExpectedOperand { token } => ErrorTip::Suggestion(format!(
                "Expected an operand, found operator `{}`",
                token
            )),
            ErrorImpl::TrailingInput { token } => ErrorTip::Suggestion(format!(
                "Unexpected `{}` after a complete expression",
                token
            )),
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing quote"))
            }
            ErrorImpl::InvalidPrecedence { .. } => ErrorTip::None,
        }
    }
}

/// Precedence entries come from the command line, not the expression, so
/// they carry no offset.
fn location(kind: &ErrorImpl, position: &Position) -> String {
    match kind {
        ErrorImpl::InvalidPrecedence { .. } => String::new(),
        _ => format!(" at offset {}", position.0),
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expected operand, found {token:?}")]
    ExpectedOperand { token: String },
    #[error("unexpected trailing input: {token:?}")]
    TrailingInput { token: String },
    #[error("unterminated string literal: {token}")]
    UnterminatedString { token: String },
    #[error("invalid precedence entry {entry:?}: expected OP=N with N >= 1")]
    InvalidPrecedence { entry: String },
}
