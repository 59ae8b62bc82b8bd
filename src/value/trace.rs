use std::fmt::{Debug, Display};

use tracing::{debug, Level};

use super::value::Operand;

/// Target of every event emitted by `Traced`. Enable it with
/// `RUST_LOG=infix::trace=debug`.
pub const TRACE_TARGET: &str = "infix::trace";

/// Wraps a literal constructor so that every value it builds reports its
/// construction, operations and rendering.
pub fn trace<V, F>(parse_literal: F) -> impl Fn(&str) -> Traced<V>
where
    V: Operand + Debug,
    F: Fn(&str) -> V,
{
    move |token: &str| {
        let value = parse_literal(token);
        debug!(target: TRACE_TARGET, "parse_literal({:?}) = {:?}", token, value);
        Traced::new(value)
    }
}

/// An operand that forwards to the value it owns and emits one diagnostic
/// event per call. The result is always the inner value's own result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traced<V> {
    inner: V,
}

impl<V> Traced<V> {
    pub fn new(inner: V) -> Self {
        Traced { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Operand + Debug> Operand for Traced<V> {
    fn apply(self, op: &str, rhs: Self) -> Self {
        if !tracing::enabled!(target: TRACE_TARGET, Level::DEBUG) {
            return Traced::new(self.inner.apply(op, rhs.inner));
        }

        // Operands are consumed by `apply`, describe them first.
        let lhs_desc = format!("{:?}", self.inner);
        let rhs_desc = format!("{:?}", rhs.inner);
        let result = self.inner.apply(op, rhs.inner);
        debug!(target: TRACE_TARGET, "{}.apply({:?}, {}) = {:?}", lhs_desc, op, rhs_desc, result);

        Traced::new(result)
    }

    fn render(&self) -> String {
        let rendered = self.inner.render();
        debug!(target: TRACE_TARGET, "{:?}.render() = {:?}", self.inner, rendered);
        rendered
    }
}

impl<V: Display> Display for Traced<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}
