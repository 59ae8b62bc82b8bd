//! Utility macros for the evaluator.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PRECEDENCE_TABLE!` - Builds a PrecedenceTable from `op => level` pairs
//!
//! These macros reduce boilerplate in the lexer and in table definitions.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source slice
/// * `$start`, `$end` - Byte offsets of the slice
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Word, "42", 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $crate::Span::new($start, $end),
        }
    };
}

/// Builds a `PrecedenceTable` from `operator => precedence` pairs.
///
/// # Example
///
/// ```
/// use infix::MK_PRECEDENCE_TABLE;
///
/// let table = MK_PRECEDENCE_TABLE! {
///     "+" => 1,
///     "*" => 2,
/// };
/// assert_eq!(table.get("*"), Some(2));
/// ```
#[macro_export]
macro_rules! MK_PRECEDENCE_TABLE {
    ($($op:literal => $prec:expr),* $(,)?) => {{
        let mut table = $crate::parser::lookups::PrecedenceTable::new();
        $(table.insert($op, $prec);)*
        table
    }};
}
