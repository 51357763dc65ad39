//! Filter expression AST nodes
//!
//! A filter tree is the restricted form of a condition tree accepted by query
//! filters. Its predicate set is a strict subset of [`Condition`], so a filter
//! always widens losslessly into a [`ConditionExpression`], while narrowing
//! a condition tree into a filter is fallible.

use super::condition::{Condition, ConditionExpression};
use super::operator::{Comparator, LogicalOperator};
use crate::error::CoreError;
use crate::types::Scalar;
use serde::{Deserialize, Serialize};

/// Predicate kinds allowed in a filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operator", rename_all = "snake_case")]
pub enum FilterCondition {
    Compare {
        field: String,
        op: Comparator,
        value: Scalar,
    },
    Between {
        field: String,
        low: Scalar,
        high: Scalar,
    },
    BeginsWith {
        field: String,
        prefix: String,
    },
}

impl FilterCondition {
    pub fn compare(field: impl Into<String>, op: Comparator, value: impl Into<Scalar>) -> Self {
        FilterCondition::Compare {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn between(
        field: impl Into<String>,
        low: impl Into<Scalar>,
        high: impl Into<Scalar>,
    ) -> Self {
        FilterCondition::Between {
            field: field.into(),
            low: low.into(),
            high: high.into(),
        }
    }

    pub fn begins_with(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        FilterCondition::BeginsWith {
            field: field.into(),
            prefix: prefix.into(),
        }
    }
}

/// Filter expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterExpression {
    Condition(FilterCondition),
    Logic {
        left: Box<FilterExpression>,
        op: LogicalOperator,
        right: Box<FilterExpression>,
    },
    Not(Box<FilterExpression>),
}

impl FilterExpression {
    pub fn logic(
        left: impl Into<FilterExpression>,
        op: LogicalOperator,
        right: impl Into<FilterExpression>,
    ) -> Self {
        FilterExpression::Logic {
            left: Box::new(left.into()),
            op,
            right: Box::new(right.into()),
        }
    }

    pub fn and(left: impl Into<FilterExpression>, right: impl Into<FilterExpression>) -> Self {
        Self::logic(left, LogicalOperator::And, right)
    }

    pub fn or(left: impl Into<FilterExpression>, right: impl Into<FilterExpression>) -> Self {
        Self::logic(left, LogicalOperator::Or, right)
    }

    pub fn not(inner: impl Into<FilterExpression>) -> Self {
        FilterExpression::Not(Box::new(inner.into()))
    }
}

impl From<FilterCondition> for FilterExpression {
    fn from(condition: FilterCondition) -> Self {
        FilterExpression::Condition(condition)
    }
}

impl From<FilterCondition> for Condition {
    fn from(condition: FilterCondition) -> Self {
        match condition {
            FilterCondition::Compare { field, op, value } => Condition::Compare { field, op, value },
            FilterCondition::Between { field, low, high } => Condition::Between { field, low, high },
            FilterCondition::BeginsWith { field, prefix } => Condition::BeginsWith { field, prefix },
        }
    }
}

impl From<FilterExpression> for ConditionExpression {
    fn from(expr: FilterExpression) -> Self {
        match expr {
            FilterExpression::Condition(c) => ConditionExpression::Condition(c.into()),
            FilterExpression::Logic { left, op, right } => ConditionExpression::Logic {
                left: Box::new((*left).into()),
                op,
                right: Box::new((*right).into()),
            },
            FilterExpression::Not(inner) => ConditionExpression::Not(Box::new((*inner).into())),
        }
    }
}

impl TryFrom<Condition> for FilterCondition {
    type Error = CoreError;

    fn try_from(condition: Condition) -> Result<Self, Self::Error> {
        match condition {
            Condition::Compare { field, op, value } => Ok(FilterCondition::Compare { field, op, value }),
            Condition::Between { field, low, high } => Ok(FilterCondition::Between { field, low, high }),
            Condition::BeginsWith { field, prefix } => Ok(FilterCondition::BeginsWith { field, prefix }),
            other => Err(CoreError::NotFilterable {
                operator: other.operator_token().to_string(),
            }),
        }
    }
}

impl TryFrom<ConditionExpression> for FilterExpression {
    type Error = CoreError;

    fn try_from(expr: ConditionExpression) -> Result<Self, Self::Error> {
        match expr {
            ConditionExpression::Condition(c) => Ok(FilterExpression::Condition(c.try_into()?)),
            ConditionExpression::Logic { left, op, right } => Ok(FilterExpression::Logic {
                left: Box::new((*left).try_into()?),
                op,
                right: Box::new((*right).try_into()?),
            }),
            ConditionExpression::Not(inner) => {
                Ok(FilterExpression::Not(Box::new((*inner).try_into()?)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_widens_into_condition() {
        let filter = FilterExpression::and(
            FilterCondition::between("age", 30, 39),
            FilterExpression::not(FilterCondition::begins_with("name", "la")),
        );

        let widened = ConditionExpression::from(filter);
        assert_eq!(
            widened,
            ConditionExpression::and(
                Condition::between("age", 30, 39),
                ConditionExpression::not(Condition::begins_with("name", "la")),
            )
        );
    }

    #[test]
    fn test_narrowing_accepts_filter_kinds() {
        let expr = ConditionExpression::or(
            Condition::compare("age", Comparator::Lt, 15),
            Condition::begins_with("name", "la"),
        );
        let filter = FilterExpression::try_from(expr.clone()).unwrap();
        assert_eq!(ConditionExpression::from(filter), expr);
    }

    #[test]
    fn test_narrowing_rejects_exists() {
        let expr = ConditionExpression::and(
            Condition::compare("age", Comparator::Ge, 21),
            ConditionExpression::not(Condition::exists("isActive")),
        );

        let err = FilterExpression::try_from(expr).unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFilterable {
                operator: "exists".to_string()
            }
        );
    }

    #[test]
    fn test_narrowing_rejects_every_condition_only_kind() {
        let rejected = [
            Condition::exists("a"),
            Condition::not_exists("a"),
            Condition::contains("a", "x"),
            Condition::size("a", Comparator::Gt, 1.0),
            Condition::is_in("a", [1, 2]),
        ];

        for condition in rejected {
            let token = condition.operator_token();
            match FilterCondition::try_from(condition) {
                Err(CoreError::NotFilterable { operator }) => assert_eq!(operator, token),
                other => panic!("Expected NotFilterable for {}, got {:?}", token, other),
            }
        }
    }
}
