#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;
pub mod value;

extern crate regex;

pub use parser::lookups::PrecedenceTable;
pub use parser::parser::{check, evaluate, evaluate_strict};
pub use value::literal::parse_literal;
pub use value::trace::{trace, Traced};
pub use value::value::{Operand, Value};

/// Byte offset into the expression source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(start),
            end: Position(end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the 1-based line, the text of that line and the character column
/// of `position` inside it. Offsets past the end point just after the last
/// character.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, &str, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = line[..pos - start].chars().count();
            return (line_number, line.trim_end_matches(['\n', '\r']), column);
        }

        start = end;
        line_number += 1;
    }

    // Past the last character, or an empty source.
    let last = source.split_inclusive('\n').last().unwrap_or("");
    let trimmed = last.trim_end_matches(['\n', '\r']);
    let line_number = line_number.saturating_sub(1).max(1);
    (line_number, trimmed, trimmed.chars().count())
}

/// Renders `error` against the expression it came from.
///
/// ```text
/// Error: TrailingInput (Unexpected `2` after a complete expression)
///   |
/// 1 | 1 2
///   |   ^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let (line, line_text, column) = get_line_at_position(source, error.get_position().0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let arrows = column + 1;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text));
    out.push_str(&format!("{:>padding$} {:>arrows$}", "|", "^"));
    out
}
