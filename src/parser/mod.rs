//! Parser and evaluator for infix expressions.
//!
//! This module turns a token stream straight into a value. It uses
//! precedence climbing driven by a caller-supplied table and handles:
//!
//! - Operator precedence (higher numbers bind tighter)
//! - Left associativity within one precedence level
//! - Strict shape checking for callers that want to reject malformed input
//!
//! Nothing here fails at evaluation time: bad input surfaces as an error
//! value built by the literal constructor or the operands.

pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
