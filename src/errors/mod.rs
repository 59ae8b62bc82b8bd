//! Error types for strict checking and configuration.
//!
//! Evaluation itself never fails: malformed expressions come back as
//! `Value::Error`. The errors here are raised only by:
//!
//! - The strict syntax check that runs before evaluation
//! - Parsing precedence-table entries from the command line
//!
//! Each error carries the byte position it refers to and a short tip used
//! by `format_error`.

pub mod errors;
