//! Operand values and binary-operator dispatch.
//!
//! This module defines what the evaluator computes with:
//!
//! - The `Operand` trait the evaluator is generic over
//! - The `Value` sum type (integer, boolean, string, error) and its operators
//! - The literal constructor that turns a token into a `Value`
//! - The `Traced` decorator that reports every construction and operation

pub mod literal;
pub mod trace;
pub mod value;
