use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_PRECEDENCE_TABLE,
};

lazy_static! {
    static ref DEFAULT_TABLE: PrecedenceTable = MK_PRECEDENCE_TABLE! {
        // Logical
        "||" => 1,
        "&&" => 2,

        // Relational
        "==" => 3,
        "!=" => 3,
        "<" => 3,
        "<=" => 3,
        ">" => 3,
        ">=" => 3,

        // Additive and multiplicative
        "+" => 4,
        "-" => 4,
        "*" => 5,
        "/" => 5,
        "%" => 5,
    };
}

/// Maps operator strings to binding precedence. Higher binds tighter, and a
/// missing entry means the string is not an operator.
///
/// Precedences start at 1; level 0 is reserved for "not an operator".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecedenceTable {
    entries: HashMap<String, u32>,
}

impl PrecedenceTable {
    /// An empty table, in which nothing is an operator.
    pub fn new() -> Self {
        PrecedenceTable {
            entries: HashMap::new(),
        }
    }

    /// The stock grammar: `||` < `&&` < comparisons < `+ -` < `* / %`.
    pub fn standard() -> Self {
        DEFAULT_TABLE.clone()
    }

    /// Adds or replaces an operator. A precedence of 0 removes it instead.
    pub fn insert(&mut self, op: impl Into<String>, precedence: u32) -> &mut Self {
        let op = op.into();
        if precedence == 0 {
            self.entries.remove(&op);
        } else {
            self.entries.insert(op, precedence);
        }
        self
    }

    pub fn get(&self, op: &str) -> Option<u32> {
        self.entries.get(op).copied()
    }

    pub fn contains(&self, op: &str) -> bool {
        self.entries.contains_key(op)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(op, prec)| (op.as_str(), *prec))
    }

    /// Parses a command-line entry of the form `OP=N`.
    ///
    /// The operator is everything before the last `=`, so `**=6` sets `**`
    /// and `<==3` sets `<=`. N must be a positive integer.
    pub fn parse_entry(entry: &str) -> Result<(String, u32), Error> {
        let invalid = || {
            Error::new(
                ErrorImpl::InvalidPrecedence {
                    entry: entry.to_string(),
                },
                Position(0),
            )
        };

        let (op, level) = entry.rsplit_once('=').ok_or_else(invalid)?;
        let level: u32 = level.trim().parse().map_err(|_| invalid())?;

        let op_is_valid = !op.is_empty()
            && op
                .chars()
                .all(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '"' || c <= ' '));

        if level == 0 || !op_is_valid {
            return Err(invalid());
        }

        Ok((op.to_string(), level))
    }
}

/// The standard table. Use `PrecedenceTable::new` for an empty one.
impl Default for PrecedenceTable {
    fn default() -> Self {
        PrecedenceTable::standard()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for PrecedenceTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut table = PrecedenceTable::new();
        for (op, precedence) in iter {
            table.insert(op, precedence);
        }
        table
    }
}

impl<S: Into<String>> Extend<(S, u32)> for PrecedenceTable {
    fn extend<I: IntoIterator<Item = (S, u32)>>(&mut self, iter: I) {
        for (op, precedence) in iter {
            self.insert(op, precedence);
        }
    }
}
