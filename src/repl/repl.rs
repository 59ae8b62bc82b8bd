use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{
    format_error,
    parser::{lookups::PrecedenceTable, parser::{check, evaluate}},
    value::{literal::parse_literal, trace::trace, value::Operand},
};

/// Settings for an interactive session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Written before every line is read. May be empty.
    pub prompt: String,
    /// Reject malformed expressions with a diagnostic instead of evaluating.
    pub strict: bool,
    /// Wrap every value in `Traced`.
    pub trace: bool,
    pub table: PrecedenceTable,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: String::from("> "),
            strict: false,
            trace: false,
            table: PrecedenceTable::default(),
        }
    }
}

/// Evaluates one expression and returns the text to print for it.
pub fn eval_line(config: &Config, line: &str) -> String {
    if config.strict {
        if let Err(error) = check(&config.table, line) {
            return format_error(&error, line);
        }
    }

    if config.trace {
        evaluate(&config.table, trace(parse_literal), line).render()
    } else {
        evaluate(&config.table, parse_literal, line).render()
    }
}

/// Reads expressions from `input` one line at a time and writes each result
/// to `output`, until `input` is exhausted. Blank lines are skipped.
pub fn run<R: BufRead, W: Write>(config: &Config, mut input: R, mut output: W) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let expression = line.strip_suffix('\n').unwrap_or(&line);
        let expression = expression.strip_suffix('\r').unwrap_or(expression);
        if expression.trim().is_empty() {
            continue;
        }

        debug!(expression, "evaluating");
        writeln!(output, "{}", eval_line(config, expression))?;
    }

    Ok(())
}
