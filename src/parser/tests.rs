//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - Precedence and associativity
//! - Error values flowing through evaluation
//! - Alternate precedence tables
//! - The strict shape check
//! - Precedence table construction and parsing

use pretty_assertions::assert_eq;

use super::{
    lookups::PrecedenceTable,
    parser::{check, evaluate, evaluate_strict, Parser},
};
use crate::{
    errors::errors::ErrorImpl,
    value::{
        literal::parse_literal,
        value::{Operand, Value},
    },
    MK_PRECEDENCE_TABLE,
};

fn eval(source: &str) -> Value {
    evaluate(&PrecedenceTable::default(), parse_literal, source)
}

fn error(message: &str) -> Value {
    Value::Error(message.to_string())
}

#[test]
fn test_single_literals() {
    assert_eq!(eval("42"), Value::Integer(42));
    assert_eq!(eval("  true "), Value::Boolean(true));
    assert_eq!(eval(r#""hi""#), Value::String("hi".to_string()));
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(eval("2 + 3 * 4"), Value::Integer(14));
    assert_eq!(eval("2 * 3 + 4"), Value::Integer(10));
    assert_eq!(eval("1 + 2 * 3 - 4 / 2"), Value::Integer(5));
}

#[test]
fn test_left_associativity() {
    assert_eq!(eval("10 - 3 - 2"), Value::Integer(5));
    assert_eq!(eval("100 / 10 / 5"), Value::Integer(2));
    assert_eq!(eval("17 % 10 % 4"), Value::Integer(3));
}

#[test]
fn test_falls_through_intermediate_levels() {
    // `<` sits two levels below `*` with nothing at `+` in between.
    assert_eq!(eval("2 * 3 < 7"), Value::Boolean(true));
    assert_eq!(eval("1 + 2 * 3 == 7 && 2 > 1"), Value::Boolean(true));
    assert_eq!(eval("1 < 2 == true"), Value::Boolean(true));
}

#[test]
fn test_boolean_precedence() {
    assert_eq!(eval("true || false && false"), Value::Boolean(true));
    assert_eq!(eval("false && true || true"), Value::Boolean(true));
    assert_eq!(eval("1 == 1 && 2 != 2"), Value::Boolean(false));
}

#[test]
fn test_operators_without_spaces() {
    assert_eq!(eval("2+3*4"), Value::Integer(14));
    assert_eq!(eval("1<=2&&2>=1"), Value::Boolean(true));
}

#[test]
fn test_string_expressions() {
    assert_eq!(eval(r#""ab" * 3"#), Value::String("ababab".to_string()));
    assert_eq!(eval(r#"3 * "ab""#), Value::String("ababab".to_string()));
    assert_eq!(eval(r#""a" + "b" * 2"#), Value::String("abb".to_string()));
    assert_eq!(eval(r#""a" < "b" && "b" < "a""#), Value::Boolean(false));
}

#[test]
fn test_illegal_literal_propagates() {
    assert_eq!(eval("1 + foo"), error("illegal literal 'foo'"));
    assert_eq!(eval("1 + foo * 2"), error("illegal literal 'foo'"));
    assert_eq!(eval("foo - bar"), error("illegal literal 'foo'"));
}

#[test]
fn test_illegal_operation() {
    assert_eq!(eval(r#""a" - "b""#), error(r#"illegal operation: '"a" - "b"'"#));
    assert_eq!(eval("1 + true * 2"), error("illegal operation: 'true * 2'"));
}

#[test]
fn test_first_error_wins() {
    assert_eq!(eval("1 / 0 + 2 / 0"), error("division by zero: '1 / 0'"));
}

#[test]
fn test_missing_operand_is_an_illegal_literal() {
    assert_eq!(eval(""), error("illegal literal ''"));
    assert_eq!(eval("1 +"), error("illegal literal ''"));
    assert_eq!(eval("* 2"), error("illegal literal '*'"));
}

#[test]
fn test_signed_literals_in_operand_position() {
    assert_eq!(eval("-5"), Value::Integer(-5));
    assert_eq!(eval("+5"), Value::Integer(5));
    assert_eq!(eval("2 - -3"), Value::Integer(5));
    assert_eq!(eval("1 +-2"), Value::Integer(-1));
    assert_eq!(eval("10 -3"), Value::Integer(7));
    assert_eq!(eval("-9223372036854775808"), Value::Integer(i64::MIN));
}

#[test]
fn test_detached_sign_is_not_a_literal() {
    assert_eq!(eval("- 5"), error("illegal literal '-'"));
    assert_eq!(eval("-true"), error("illegal literal '-true'"));
    assert_eq!(eval(r#"-"a""#), error("illegal literal '-'"));
}

#[test]
fn test_trailing_input_is_ignored() {
    assert_eq!(eval("1 2"), Value::Integer(1));
    assert_eq!(eval("1 + 2 # comment"), Value::Integer(3));
}

#[test]
fn test_idempotent() {
    let source = r#"1 + 2 * "x" == "xx" || 3 < 4"#;
    assert_eq!(eval(source).to_string(), eval(source).to_string());
}

#[test]
fn test_alternate_table_changes_binding() {
    let table = MK_PRECEDENCE_TABLE! { "+" => 2, "*" => 1 };

    assert_eq!(evaluate(&table, parse_literal, "2 + 3 * 4"), Value::Integer(20));
}

#[test]
fn test_original_logical_ordering() {
    let mut table = PrecedenceTable::default();
    table.insert("&&", 1).insert("||", 2);

    assert_eq!(
        evaluate(&table, parse_literal, "true || false && false"),
        Value::Boolean(false)
    );
}

#[test]
fn test_operator_missing_from_table_stops_evaluation() {
    let table = MK_PRECEDENCE_TABLE! { "+" => 1 };

    assert_eq!(evaluate(&table, parse_literal, "2 + 3 * 4"), Value::Integer(5));
    assert_eq!(evaluate(&PrecedenceTable::new(), parse_literal, "2 + 3"), Value::Integer(2));
}

/// Records the grouping the evaluator chose instead of computing anything.
#[derive(Debug, PartialEq)]
struct Grouping(String);

impl Operand for Grouping {
    fn apply(self, op: &str, rhs: Self) -> Self {
        Grouping(format!("({} {} {})", self.0, op, rhs.0))
    }

    fn render(&self) -> String {
        self.0.clone()
    }
}

fn grouping(table: &PrecedenceTable, source: &str) -> String {
    evaluate(table, |tok: &str| Grouping(tok.to_string()), source).render()
}

#[test]
fn test_grouping_follows_precedence() {
    let table = PrecedenceTable::default();

    assert_eq!(grouping(&table, "a - b - c * d * e + f"), "(((a - b) - ((c * d) * e)) + f)");
    assert_eq!(grouping(&table, "a || b && c == d"), "(a || (b && (c == d)))");
}

#[test]
fn test_word_operators() {
    let table = MK_PRECEDENCE_TABLE! { "or" => 1, "and" => 2 };

    assert_eq!(grouping(&table, "a and b or c and d"), "((a and b) or (c and d))");
}

#[test]
fn test_top_precedence_operator() {
    let mut table = PrecedenceTable::default();
    table.insert("**", u32::MAX);

    assert_eq!(grouping(&table, "2 ** 3 + 1"), "((2 ** 3) + 1)");
    assert_eq!(grouping(&table, "a ** b ** c * d"), "(((a ** b) ** c) * d)");
    assert_eq!(grouping(&table, "a + b ** -c"), "(a + (b ** -c))");
}

#[test]
fn test_top_precedence_evaluates() {
    let mut table = PrecedenceTable::default();
    table.insert("*", u32::MAX);

    assert_eq!(evaluate(&table, parse_literal, "2 * 3 + 1 * 4"), Value::Integer(10));
    assert_eq!(evaluate(&table, parse_literal, "2 * 3 * 4"), Value::Integer(24));
}

#[test]
fn test_parser_primes_first_token() {
    let table = PrecedenceTable::default();
    let mut parser = Parser::new("1 + 2", &table, parse_literal);

    assert_eq!(parser.current_token().value, "1");
    assert_eq!(parser.current_precedence(), None);
    parser.advance();
    assert_eq!(parser.current_precedence(), Some(4));
    assert_eq!(parser.binary_expr(1), error("illegal literal '+'"));
}

#[test]
fn test_check_accepts_well_formed() {
    let table = PrecedenceTable::default();

    assert!(check(&table, "1").is_ok());
    assert!(check(&table, "1 + foo * 2").is_ok());
    assert!(check(&table, r#""a" + "b\"c""#).is_ok());
    assert!(check(&table, "-1 - -2").is_ok());
}

#[test]
fn test_check_rejects_trailing_input() {
    let table = PrecedenceTable::default();
    let err = check(&table, "1 + 2 3").unwrap_err();

    assert_eq!(err.kind(), &ErrorImpl::TrailingInput { token: "3".to_string() });
    assert_eq!(err.get_position().0, 6);
}

#[test]
fn test_check_rejects_missing_operand() {
    let table = PrecedenceTable::default();

    let err = check(&table, "1 +").unwrap_err();
    assert_eq!(err.kind(), &ErrorImpl::ExpectedOperand { token: String::new() });
    assert_eq!(err.get_position().0, 3);

    let err = check(&table, "1 * * 2").unwrap_err();
    assert_eq!(err.kind(), &ErrorImpl::ExpectedOperand { token: "*".to_string() });
    assert_eq!(err.get_position().0, 4);

    assert!(check(&table, "").is_err());
}

#[test]
fn test_check_rejects_unterminated_string() {
    let table = PrecedenceTable::default();
    let err = check(&table, r#"1 + "abc"#).unwrap_err();

    assert_eq!(err.kind(), &ErrorImpl::UnterminatedString { token: "\"abc".to_string() });
    assert_eq!(err.get_position().0, 4);
}

#[test]
fn test_evaluate_strict() {
    let table = PrecedenceTable::default();

    assert_eq!(evaluate_strict(&table, parse_literal, "2 * 3 + 4"), Ok(Value::Integer(10)));
    assert_eq!(
        evaluate_strict(&table, parse_literal, "1 + foo"),
        Ok(error("illegal literal 'foo'"))
    );
    assert!(evaluate_strict(&table, parse_literal, "1 2").is_err());
}

#[test]
fn test_default_table() {
    let table = PrecedenceTable::default();

    assert_eq!(table.len(), 13);
    assert_eq!(table.get("||"), Some(1));
    assert_eq!(table.get("&&"), Some(2));
    for op in ["==", "!=", "<", "<=", ">", ">="] {
        assert_eq!(table.get(op), Some(3), "{op}");
    }
    assert_eq!(table.get("+"), Some(4));
    assert_eq!(table.get("-"), Some(4));
    assert_eq!(table.get("*"), Some(5));
    assert_eq!(table.get("/"), Some(5));
    assert_eq!(table.get("%"), Some(5));
    assert_eq!(table.get("="), None);
    assert_eq!(table, PrecedenceTable::standard());
}

#[test]
fn test_table_insert_zero_removes() {
    let mut table = PrecedenceTable::default();
    table.insert("%", 0);

    assert!(!table.contains("%"));
    assert_eq!(table.len(), 12);
}

#[test]
fn test_table_from_iterator() {
    let table: PrecedenceTable = [("+", 1), ("*", 2)].into_iter().collect();

    assert_eq!(table.get("*"), Some(2));
    assert!(PrecedenceTable::new().is_empty());

    let mut ops: Vec<(&str, u32)> = table.iter().collect();
    ops.sort();
    assert_eq!(ops, vec![("*", 2), ("+", 1)]);
}

#[test]
fn test_parse_entry() {
    assert_eq!(PrecedenceTable::parse_entry("**=6"), Ok(("**".to_string(), 6)));
    assert_eq!(PrecedenceTable::parse_entry("<==3"), Ok(("<=".to_string(), 3)));
    assert_eq!(PrecedenceTable::parse_entry("===3"), Ok(("==".to_string(), 3)));
    assert_eq!(
        PrecedenceTable::parse_entry("**=4294967295"),
        Ok(("**".to_string(), u32::MAX))
    );

    for bad in ["", "+", "+=", "+=0", "=3", "+=x", "a=1", "\"=1", "+=-1", "+=4294967296"] {
        let err = PrecedenceTable::parse_entry(bad).unwrap_err();
        assert_eq!(err.kind(), &ErrorImpl::InvalidPrecedence { entry: bad.to_string() });
    }
}
