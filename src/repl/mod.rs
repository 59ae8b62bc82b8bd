//! Line-oriented driver around the evaluator.
//!
//! The evaluator itself does no I/O. This module reads one expression per
//! line, evaluates it and writes the rendered result, which is what the
//! `infix` binary runs on stdin and stdout.

pub mod repl;
