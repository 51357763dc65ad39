//! Condition expression AST nodes

use super::operator::{Comparator, LogicalOperator};
use crate::types::Scalar;
use serde::{Deserialize, Serialize};

/// A single predicate on one attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operator", rename_all = "snake_case")]
pub enum Condition {
    /// `field <op> value`
    Compare {
        field: String,
        op: Comparator,
        value: Scalar,
    },

    /// Inclusive range check
    Between {
        field: String,
        low: Scalar,
        high: Scalar,
    },

    /// String prefix match
    BeginsWith { field: String, prefix: String },

    /// Substring or set membership, depending on the attribute type
    Contains { field: String, value: Scalar },

    /// Attribute is present
    Exists { field: String },

    /// Attribute is absent
    NotExists { field: String },

    /// Compares the size of the attribute against a number
    Size {
        field: String,
        op: Comparator,
        value: f64,
    },

    /// Attribute equals one of the listed values
    In { field: String, values: Vec<Scalar> },
}

impl Condition {
    /// Create a comparison condition
    pub fn compare(field: impl Into<String>, op: Comparator, value: impl Into<Scalar>) -> Self {
        Condition::Compare {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Create a between condition
    pub fn between(
        field: impl Into<String>,
        low: impl Into<Scalar>,
        high: impl Into<Scalar>,
    ) -> Self {
        Condition::Between {
            field: field.into(),
            low: low.into(),
            high: high.into(),
        }
    }

    /// Create a begins_with condition
    pub fn begins_with(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Condition::BeginsWith {
            field: field.into(),
            prefix: prefix.into(),
        }
    }

    /// Create a contains condition
    pub fn contains(field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Condition::Contains {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an exists condition
    pub fn exists(field: impl Into<String>) -> Self {
        Condition::Exists {
            field: field.into(),
        }
    }

    /// Create a not_exists condition
    pub fn not_exists(field: impl Into<String>) -> Self {
        Condition::NotExists {
            field: field.into(),
        }
    }

    /// Create a size condition
    pub fn size(field: impl Into<String>, op: Comparator, value: f64) -> Self {
        Condition::Size {
            field: field.into(),
            op,
            value,
        }
    }

    /// Create an in condition
    pub fn is_in<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        Condition::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The attribute this condition applies to
    pub fn field(&self) -> &str {
        match self {
            Condition::Compare { field, .. }
            | Condition::Between { field, .. }
            | Condition::BeginsWith { field, .. }
            | Condition::Contains { field, .. }
            | Condition::Exists { field }
            | Condition::NotExists { field }
            | Condition::Size { field, .. }
            | Condition::In { field, .. } => field,
        }
    }

    /// The operator token as written in a condition document
    pub fn operator_token(&self) -> &'static str {
        match self {
            Condition::Compare { op, .. } => op.as_str(),
            Condition::Between { .. } => "between",
            Condition::BeginsWith { .. } => "begins_with",
            Condition::Contains { .. } => "contains",
            Condition::Exists { .. } => "exists",
            Condition::NotExists { .. } => "not_exists",
            Condition::Size { .. } => "size",
            Condition::In { .. } => "in",
        }
    }
}

/// Deepest chain of connectives and negations accepted by the parser and
/// the compiler
pub const MAX_NESTING_DEPTH: usize = 128;

/// Condition expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionExpression {
    /// Predicate leaf
    Condition(Condition),

    /// Binary connective, always exactly two operands
    Logic {
        left: Box<ConditionExpression>,
        op: LogicalOperator,
        right: Box<ConditionExpression>,
    },

    /// Negation of a single subtree
    Not(Box<ConditionExpression>),
}

impl ConditionExpression {
    /// Create a connective expression
    pub fn logic(
        left: impl Into<ConditionExpression>,
        op: LogicalOperator,
        right: impl Into<ConditionExpression>,
    ) -> Self {
        ConditionExpression::Logic {
            left: Box::new(left.into()),
            op,
            right: Box::new(right.into()),
        }
    }

    /// `left AND right`
    pub fn and(left: impl Into<ConditionExpression>, right: impl Into<ConditionExpression>) -> Self {
        Self::logic(left, LogicalOperator::And, right)
    }

    /// `left OR right`
    pub fn or(left: impl Into<ConditionExpression>, right: impl Into<ConditionExpression>) -> Self {
        Self::logic(left, LogicalOperator::Or, right)
    }

    /// `NOT (inner)`
    pub fn not(inner: impl Into<ConditionExpression>) -> Self {
        ConditionExpression::Not(Box::new(inner.into()))
    }

    /// All predicate leaves, left to right
    pub fn conditions(&self) -> Vec<&Condition> {
        let mut result = Vec::new();
        self.collect_conditions(&mut result);
        result
    }

    fn collect_conditions<'a>(&'a self, result: &mut Vec<&'a Condition>) {
        match self {
            ConditionExpression::Condition(c) => result.push(c),
            ConditionExpression::Logic { left, right, .. } => {
                left.collect_conditions(result);
                right.collect_conditions(result);
            }
            ConditionExpression::Not(inner) => inner.collect_conditions(result),
        }
    }

    /// Nesting depth; a single leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            ConditionExpression::Condition(_) => 1,
            ConditionExpression::Logic { left, right, .. } => 1 + left.depth().max(right.depth()),
            ConditionExpression::Not(inner) => 1 + inner.depth(),
        }
    }
}

impl From<Condition> for ConditionExpression {
    fn from(condition: Condition) -> Self {
        ConditionExpression::Condition(condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_builders() {
        let cond = Condition::compare("age", Comparator::Ge, 21);
        assert_eq!(
            cond,
            Condition::Compare {
                field: "age".to_string(),
                op: Comparator::Ge,
                value: Scalar::Number(21.0),
            }
        );
        assert_eq!(cond.field(), "age");
        assert_eq!(cond.operator_token(), ">=");
    }

    #[test]
    fn test_is_in_keeps_order() {
        let cond = Condition::is_in("name", ["Dave", "Larry", "Mike"]);
        match cond {
            Condition::In { values, .. } => {
                assert_eq!(
                    values,
                    vec![
                        Scalar::from("Dave"),
                        Scalar::from("Larry"),
                        Scalar::from("Mike")
                    ]
                );
            }
            _ => panic!("Expected In condition"),
        }
    }

    #[test]
    fn test_operator_tokens() {
        assert_eq!(Condition::exists("a").operator_token(), "exists");
        assert_eq!(Condition::not_exists("a").operator_token(), "not_exists");
        assert_eq!(Condition::size("a", Comparator::Lt, 3.0).operator_token(), "size");
        assert_eq!(Condition::contains("a", "x").operator_token(), "contains");
        assert_eq!(Condition::between("a", 1, 2).operator_token(), "between");
    }

    #[test]
    fn test_conditions_are_collected_left_to_right() {
        let expr = ConditionExpression::and(
            Condition::compare("age", Comparator::Ge, 21),
            ConditionExpression::not(ConditionExpression::or(
                Condition::exists("email"),
                Condition::begins_with("name", "la"),
            )),
        );

        let fields: Vec<&str> = expr.conditions().iter().map(|c| c.field()).collect();
        assert_eq!(fields, vec!["age", "email", "name"]);
        assert_eq!(expr.depth(), 4);
    }

    #[test]
    fn test_condition_serde_tagged_by_operator() {
        let cond = Condition::exists("isActive");
        let json = serde_json::to_value(&cond).unwrap();
        assert_eq!(json["operator"], "exists");
        assert_eq!(json["field"], "isActive");

        let back: Condition = serde_json::from_value(json).unwrap();
        assert_eq!(back, cond);
    }
}
