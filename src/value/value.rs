use std::fmt::Display;

/// Largest string, in bytes, that repetition may produce.
pub const MAX_STRING_LEN: usize = 1 << 28;

/// Capability every operand type must offer to the evaluator.
///
/// Failures are values too: an implementation reports an illegal operation
/// by returning its own error variant rather than panicking.
pub trait Operand: Sized {
    /// Combines `self` with `rhs` under the binary operator `op`.
    fn apply(self, op: &str, rhs: Self) -> Self;

    /// Canonical printable form.
    fn render(&self) -> String;
}

/// The closed set of operand kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),
    /// An error carried as an ordinary value. Any operation it takes part in
    /// yields it unchanged.
    Error(String),
}

impl Value {
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    fn illegal_operation(&self, op: &str, rhs: &Value) -> Value {
        Value::Error(format!("illegal operation: '{} {} {}'", self, op, rhs))
    }

    fn failed(reason: &str, lhs: i64, op: &str, rhs: i64) -> Value {
        Value::Error(format!("{}: '{} {} {}'", reason, lhs, op, rhs))
    }
}

impl Operand for Value {
    fn apply(self, op: &str, rhs: Value) -> Value {
        match (self, rhs) {
            (lhs @ Value::Error(_), _) => lhs,
            (_, rhs @ Value::Error(_)) => rhs,
            (Value::Integer(x), Value::Integer(y)) => integer_op(x, op, y),
            (Value::Integer(count), Value::String(s)) if op == "*" => repeat(&s, count, true),
            (Value::String(s), Value::Integer(count)) if op == "*" => repeat(&s, count, false),
            (Value::Boolean(x), Value::Boolean(y)) => match op {
                "&&" => Value::Boolean(x && y),
                "||" => Value::Boolean(x || y),
                "==" => Value::Boolean(x == y),
                "!=" => Value::Boolean(x != y),
                _ => Value::Boolean(x).illegal_operation(op, &Value::Boolean(y)),
            },
            (Value::String(x), Value::String(y)) => match op {
                "+" => Value::String(x + &y),
                "==" => Value::Boolean(x == y),
                "!=" => Value::Boolean(x != y),
                "<" => Value::Boolean(x < y),
                "<=" => Value::Boolean(x <= y),
                ">" => Value::Boolean(x > y),
                ">=" => Value::Boolean(x >= y),
                _ => Value::String(x).illegal_operation(op, &Value::String(y)),
            },
            (lhs, rhs) => lhs.illegal_operation(op, &rhs),
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

fn integer_op(x: i64, op: &str, y: i64) -> Value {
    let checked = match op {
        "==" => return Value::Boolean(x == y),
        "!=" => return Value::Boolean(x != y),
        "<" => return Value::Boolean(x < y),
        "<=" => return Value::Boolean(x <= y),
        ">" => return Value::Boolean(x > y),
        ">=" => return Value::Boolean(x >= y),
        "/" | "%" if y == 0 => return Value::failed("division by zero", x, op, y),
        "+" => x.checked_add(y),
        "-" => x.checked_sub(y),
        "*" => x.checked_mul(y),
        "/" => x.checked_div(y),
        "%" => x.checked_rem(y),
        _ => return Value::Integer(x).illegal_operation(op, &Value::Integer(y)),
    };

    match checked {
        Some(result) => Value::Integer(result),
        None => Value::failed("integer overflow", x, op, y),
    }
}

/// `count` copies of `s`. `count_on_left` only affects how a failure is
/// reported, so the message reads in source order.
fn repeat(s: &str, count: i64, count_on_left: bool) -> Value {
    let fits = usize::try_from(count)
        .ok()
        .filter(|n| s.len().checked_mul(*n).is_some_and(|total| total <= MAX_STRING_LEN));

    match fits {
        Some(n) => Value::String(s.repeat(n)),
        None => {
            let quoted = Value::String(s.to_string());
            let message = if count_on_left {
                format!("invalid repeat count: '{} * {}'", count, quoted)
            } else {
                format!("invalid repeat count: '{} * {}'", quoted, count)
            };
            Value::Error(message)
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(x) => write!(f, "{}", x),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Error(message) => write!(f, "{}", message),
        }
    }
}
