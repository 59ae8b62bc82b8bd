//! Lexical analysis for infix expressions.
//!
//! This module contains the scanner that splits an expression into tokens
//! on demand. It handles:
//!
//! - Whitespace skipping (every character up to and including space)
//! - Double-quoted literals with backslash escapes
//! - Runs of letters, digits and underscores (numbers, booleans, names)
//! - Operator runs, split by longest match against the precedence table

pub mod lexer;
pub mod tokens;
