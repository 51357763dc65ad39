//! Condition document parser
//!
//! Parses tuple-shaped documents like:
//! - `["age", ">=", 21]`
//! - `["age", "between", 30, 39]`
//! - `["name", "in", ["Dave", "Larry"]]`
//! - `["tags", "size", "<=", 10]`
//! - `[["age", ">=", 21], "AND", {"NOT": ["isActive", "exists"]}]`

use crate::error::{ParseError, Result};
use dynacond_core::{
    Comparator, Condition, ConditionExpression, FilterExpression, LogicalOperator, Scalar,
    MAX_NESTING_DEPTH,
};
use serde_json::Value;

/// Parser for condition and filter documents
pub struct ConditionParser;

impl ConditionParser {
    /// Parse a JSON condition document
    pub fn parse_json(input: &str) -> Result<ConditionExpression> {
        let value: Value = serde_json::from_str(input)?;
        Self::parse_value(&value)
    }

    /// Parse a YAML condition document
    pub fn parse_yaml(input: &str) -> Result<ConditionExpression> {
        let value: Value = serde_yaml::from_str(input)?;
        Self::parse_value(&value)
    }

    /// Parse a JSON filter document
    pub fn parse_filter_json(input: &str) -> Result<FilterExpression> {
        let value: Value = serde_json::from_str(input)?;
        Self::parse_filter_value(&value)
    }

    /// Parse a YAML filter document
    pub fn parse_filter_yaml(input: &str) -> Result<FilterExpression> {
        let value: Value = serde_yaml::from_str(input)?;
        Self::parse_filter_value(&value)
    }

    /// Parse an already-decoded filter document.
    ///
    /// Operators outside the filter subset are rejected with
    /// [`ParseError::OperatorNotAllowed`].
    pub fn parse_filter_value(value: &Value) -> Result<FilterExpression> {
        let expr = Self::parse_value(value)?;
        Ok(FilterExpression::try_from(expr)?)
    }

    /// Parse an already-decoded condition document
    pub fn parse_value(value: &Value) -> Result<ConditionExpression> {
        Self::parse_node(value, 0)
    }

    fn parse_node(value: &Value, depth: usize) -> Result<ConditionExpression> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ParseError::InvalidShape(format!(
                "document nests deeper than {} levels",
                MAX_NESTING_DEPTH
            )));
        }

        match value {
            Value::Object(map) => {
                if map.len() != 1 {
                    return Err(ParseError::InvalidShape(format!(
                        "negation object must have exactly one key, got {}",
                        map.len()
                    )));
                }
                match map.get("NOT") {
                    Some(inner) => Ok(ConditionExpression::not(Self::parse_node(inner, depth + 1)?)),
                    None => Err(ParseError::InvalidShape(
                        "object nodes must be of the form {\"NOT\": <expression>}".to_string(),
                    )),
                }
            }
            Value::Array(items) if Self::is_logic(items) => Self::parse_logic(items, depth),
            Value::Array(items) => Ok(ConditionExpression::Condition(Self::parse_condition(
                items,
            )?)),
            other => Err(ParseError::InvalidShape(format!(
                "expected an array or a NOT object, got {}",
                describe(other)
            ))),
        }
    }

    /// A connective is a triple whose first element is itself an expression
    fn is_logic(items: &[Value]) -> bool {
        items.len() == 3 && matches!(items[0], Value::Array(_) | Value::Object(_))
    }

    fn parse_logic(items: &[Value], depth: usize) -> Result<ConditionExpression> {
        let op = match &items[1] {
            Value::String(token) => LogicalOperator::from_token(token)
                .ok_or_else(|| ParseError::UnsupportedOperator(token.clone()))?,
            other => {
                return Err(ParseError::InvalidShape(format!(
                    "connective must be \"AND\" or \"OR\", got {}",
                    describe(other)
                )))
            }
        };

        let left = Self::parse_node(&items[0], depth + 1)?;
        let right = Self::parse_node(&items[2], depth + 1)?;
        Ok(ConditionExpression::logic(left, op, right))
    }

    /// Parse a single predicate `[field, operator, operands...]`
    pub fn parse_condition(items: &[Value]) -> Result<Condition> {
        let field = match items.first() {
            Some(Value::String(field)) if !field.is_empty() => field.clone(),
            Some(Value::String(_)) => {
                return Err(ParseError::InvalidShape("empty field name".to_string()))
            }
            Some(other) => {
                return Err(ParseError::InvalidShape(format!(
                    "field name must be a string, got {}",
                    describe(other)
                )))
            }
            None => return Err(ParseError::InvalidShape("empty condition".to_string())),
        };

        let operator = match items.get(1) {
            Some(Value::String(op)) => op.as_str(),
            Some(other) => {
                return Err(ParseError::InvalidShape(format!(
                    "operator for field '{}' must be a string, got {}",
                    field,
                    describe(other)
                )))
            }
            None => {
                return Err(ParseError::InvalidShape(format!(
                    "missing operator for field '{}'",
                    field
                )))
            }
        };
        let operands = &items[2..];

        log::trace!("parsing condition on '{}' with operator {}", field, operator);

        if let Some(op) = Comparator::from_token(operator) {
            expect_operands(&field, operator, operands, 1)?;
            let value = scalar(&field, &operands[0])?;
            return Ok(Condition::Compare { field, op, value });
        }

        match operator {
            "between" => {
                expect_operands(&field, operator, operands, 2)?;
                let low = scalar(&field, &operands[0])?;
                let high = scalar(&field, &operands[1])?;
                Ok(Condition::Between { field, low, high })
            }
            "begins_with" => {
                expect_operands(&field, operator, operands, 1)?;
                match &operands[0] {
                    Value::String(prefix) => Ok(Condition::BeginsWith {
                        prefix: prefix.clone(),
                        field,
                    }),
                    other => Err(ParseError::InvalidValue {
                        message: format!("begins_with expects a string, got {}", describe(other)),
                        field,
                    }),
                }
            }
            "contains" => {
                expect_operands(&field, operator, operands, 1)?;
                let value = scalar(&field, &operands[0])?;
                Ok(Condition::Contains { field, value })
            }
            "exists" => {
                expect_operands(&field, operator, operands, 0)?;
                Ok(Condition::Exists { field })
            }
            "not_exists" => {
                expect_operands(&field, operator, operands, 0)?;
                Ok(Condition::NotExists { field })
            }
            "size" => {
                expect_operands(&field, operator, operands, 2)?;
                let op = match &operands[0] {
                    Value::String(token) => Comparator::from_token(token)
                        .ok_or_else(|| ParseError::UnsupportedOperator(token.clone()))?,
                    other => {
                        return Err(ParseError::InvalidValue {
                            message: format!("size expects a comparator, got {}", describe(other)),
                            field,
                        })
                    }
                };
                match operands[1].as_f64() {
                    Some(value) => Ok(Condition::Size { field, op, value }),
                    None => Err(ParseError::InvalidValue {
                        message: format!(
                            "size expects a number, got {}",
                            describe(&operands[1])
                        ),
                        field,
                    }),
                }
            }
            "in" => {
                expect_operands(&field, operator, operands, 1)?;
                let list = match &operands[0] {
                    Value::Array(list) if !list.is_empty() => list,
                    Value::Array(_) => {
                        return Err(ParseError::InvalidValue {
                            message: "in expects at least one value".to_string(),
                            field,
                        })
                    }
                    other => {
                        return Err(ParseError::InvalidValue {
                            message: format!("in expects an array, got {}", describe(other)),
                            field,
                        })
                    }
                };
                let values = list
                    .iter()
                    .map(|item| scalar(&field, item))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Condition::In { field, values })
            }
            other => {
                log::debug!("unsupported operator {} on field '{}'", other, field);
                Err(ParseError::UnsupportedOperator(other.to_string()))
            }
        }
    }
}

fn expect_operands(field: &str, operator: &str, operands: &[Value], expected: usize) -> Result<()> {
    if operands.len() != expected {
        return Err(ParseError::ArityMismatch {
            field: field.to_string(),
            operator: operator.to_string(),
            expected,
            actual: operands.len(),
        });
    }
    Ok(())
}

/// Convert a document operand into a scalar
fn scalar(field: &str, value: &Value) -> Result<Scalar> {
    match value {
        Value::String(s) => Ok(Scalar::String(s.clone())),
        Value::Bool(b) => Ok(Scalar::Bool(*b)),
        Value::Number(n) => n.as_f64().map(Scalar::Number).ok_or_else(|| ParseError::InvalidValue {
            field: field.to_string(),
            message: format!("number {} is not representable", n),
        }),
        other => Err(ParseError::InvalidValue {
            field: field.to_string(),
            message: format!("operands must be scalars, got {}", describe(other)),
        }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynacond_core::FilterCondition;
    use serde_json::json;

    #[test]
    fn test_parse_comparison() {
        let expr = ConditionParser::parse_value(&json!(["age", ">=", 21])).unwrap();
        assert_eq!(expr, Condition::compare("age", Comparator::Ge, 21).into());
    }

    #[test]
    fn test_parse_logic() {
        let expr = ConditionParser::parse_json(r#"[["age", ">=", 21], "OR", ["age", "<", 15]]"#)
            .unwrap();
        assert_eq!(
            expr,
            ConditionExpression::or(
                Condition::compare("age", Comparator::Ge, 21),
                Condition::compare("age", Comparator::Lt, 15),
            )
        );
    }

    #[test]
    fn test_parse_not() {
        let expr = ConditionParser::parse_value(&json!([
            ["age", ">=", 21],
            "AND",
            {"NOT": ["createdDate", "begins_with", "2021"]}
        ]))
        .unwrap();
        assert_eq!(
            expr,
            ConditionExpression::and(
                Condition::compare("age", Comparator::Ge, 21),
                ConditionExpression::not(Condition::begins_with("createdDate", "2021")),
            )
        );
    }

    #[test]
    fn test_parse_every_operator() {
        let cases = vec![
            (json!(["age", "between", 30, 39]), Condition::between("age", 30, 39)),
            (json!(["name", "begins_with", "larry"]), Condition::begins_with("name", "larry")),
            (json!(["favorites", "contains", "apples"]), Condition::contains("favorites", "apples")),
            (json!(["isActive", "exists"]), Condition::exists("isActive")),
            (json!(["isActive", "not_exists"]), Condition::not_exists("isActive")),
            (json!(["name", "size", "<=", 10]), Condition::size("name", Comparator::Le, 10.0)),
            (
                json!(["name", "in", ["Dave", "Larry"]]),
                Condition::is_in("name", ["Dave", "Larry"]),
            ),
            (json!(["isActive", "<>", true]), Condition::compare("isActive", Comparator::Ne, true)),
        ];

        for (document, expected) in cases {
            let parsed = ConditionParser::parse_value(&document).unwrap();
            assert_eq!(parsed, ConditionExpression::Condition(expected), "{}", document);
        }
    }

    #[test]
    fn test_unsupported_operator_is_named() {
        let err = ConditionParser::parse_value(&json!(["age", "==", 21])).unwrap_err();
        match err {
            ParseError::UnsupportedOperator(op) => assert_eq!(op, "=="),
            other => panic!("Expected UnsupportedOperator, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_connective_is_named() {
        let err = ConditionParser::parse_value(&json!([["a", "=", 1], "XOR", ["b", "=", 2]]))
            .unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedOperator(op) if op == "XOR"));
    }

    #[test]
    fn test_arity_is_checked() {
        let err = ConditionParser::parse_value(&json!(["age", "between", 30])).unwrap_err();
        assert!(matches!(
            err,
            ParseError::ArityMismatch { expected: 2, actual: 1, .. }
        ));

        let err = ConditionParser::parse_value(&json!(["isActive", "exists", true])).unwrap_err();
        assert!(matches!(
            err,
            ParseError::ArityMismatch { expected: 0, actual: 1, .. }
        ));
    }

    #[test]
    fn test_invalid_operands() {
        assert!(matches!(
            ConditionParser::parse_value(&json!(["name", "in", []])),
            Err(ParseError::InvalidValue { .. })
        ));
        assert!(matches!(
            ConditionParser::parse_value(&json!(["name", "=", null])),
            Err(ParseError::InvalidValue { .. })
        ));
        assert!(matches!(
            ConditionParser::parse_value(&json!(["name", "begins_with", 3])),
            Err(ParseError::InvalidValue { .. })
        ));
        assert!(matches!(
            ConditionParser::parse_value(&json!(["name", "size", "<=", "ten"])),
            Err(ParseError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(matches!(
            ConditionParser::parse_value(&json!("age")),
            Err(ParseError::InvalidShape(_))
        ));
        assert!(matches!(
            ConditionParser::parse_value(&json!({"NOPE": ["a", "exists"]})),
            Err(ParseError::InvalidShape(_))
        ));
        assert!(matches!(
            ConditionParser::parse_value(&json!(["", "exists"])),
            Err(ParseError::InvalidShape(_))
        ));
        assert!(matches!(
            ConditionParser::parse_value(&json!([])),
            Err(ParseError::InvalidShape(_))
        ));
    }

    fn nested_negations(levels: usize) -> Value {
        let mut doc = json!(["isActive", "exists"]);
        for _ in 0..levels {
            doc = json!({ "NOT": doc });
        }
        doc
    }

    #[test]
    fn test_nesting_limit() {
        let expr = ConditionParser::parse_value(&nested_negations(MAX_NESTING_DEPTH)).unwrap();
        assert!(matches!(expr, ConditionExpression::Not(_)));

        assert!(matches!(
            ConditionParser::parse_value(&nested_negations(MAX_NESTING_DEPTH + 1)),
            Err(ParseError::InvalidShape(_))
        ));
        assert!(matches!(
            ConditionParser::parse_value(&nested_negations(5_000)),
            Err(ParseError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
- ["age", ">=", 21]
- AND
- NOT: ["name", "begins_with", "la"]
"#;
        let expr = ConditionParser::parse_yaml(yaml).unwrap();
        assert_eq!(
            expr,
            ConditionExpression::and(
                Condition::compare("age", Comparator::Ge, 21),
                ConditionExpression::not(Condition::begins_with("name", "la")),
            )
        );
    }

    #[test]
    fn test_parse_filter() {
        let expr = ConditionParser::parse_filter_json(r#"["age", "between", 30, 39]"#).unwrap();
        assert_eq!(expr, FilterCondition::between("age", 30, 39).into());
    }

    #[test]
    fn test_filter_rejects_exists() {
        let err = ConditionParser::parse_filter_json(
            r#"[["age", ">=", 21], "AND", ["isActive", "exists"]]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ParseError::OperatorNotAllowed { operator } if operator == "exists"
        ));
    }
}
