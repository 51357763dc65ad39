//! Filter expression compilation
//!
//! Filters accept only comparison, between and begins_with predicates plus
//! connectives and negation over them. The restriction lives in the
//! [`FilterExpression`] type, so an `exists` leaf is rejected when the
//! program is type-checked:
//!
//! ```compile_fail
//! use dynacond_core::{Condition, FilterExpression};
//!
//! let filter: FilterExpression = Condition::exists("isActive").into();
//! ```
//!
//! Filters compile under their own default prefix (`F`), so a filter and a
//! condition can be sent in the same request without placeholder clashes.

use crate::codegen::ConditionCompiler;
use crate::compiled::CompiledExpression;
use crate::error::Result;
use dynacond_core::{ConditionExpression, FilterExpression, ValueEncoder};

/// Default root namespace for filter expressions
pub const DEFAULT_FILTER_PREFIX: &str = "F";

/// Filter compiler
pub struct FilterCompiler<'a> {
    conditions: ConditionCompiler<'a>,
}

impl<'a> FilterCompiler<'a> {
    pub fn new(encoder: &'a dyn ValueEncoder) -> Self {
        Self {
            conditions: ConditionCompiler::new(encoder),
        }
    }

    /// Compile `expr` using `prefix` as the root namespace
    pub fn compile(&self, expr: &FilterExpression, prefix: &str) -> Result<CompiledExpression> {
        let widened = ConditionExpression::from(expr.clone());
        self.conditions.compile(&widened, prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynacond_core::{AttributeEncoder, AttributeValue, Comparator, FilterCondition};

    #[test]
    fn test_filter_between() {
        let encoder = AttributeEncoder;
        let expr: FilterExpression = FilterCondition::between("age", 30, 39).into();
        let compiled = FilterCompiler::new(&encoder)
            .compile(&expr, DEFAULT_FILTER_PREFIX)
            .unwrap();

        assert_eq!(compiled.expression, "#F_0 BETWEEN :F_0_L AND :F_0_R");
        assert_eq!(compiled.name("#F_0"), Some("age"));
        assert_eq!(compiled.value(":F_0_L"), Some(&AttributeValue::N("30".to_string())));
        assert_eq!(compiled.value(":F_0_R"), Some(&AttributeValue::N("39".to_string())));
    }

    #[test]
    fn test_filter_connectives_and_negation() {
        let encoder = AttributeEncoder;
        let expr = FilterExpression::or(
            FilterCondition::compare("age", Comparator::Gt, 65),
            FilterExpression::not(FilterCondition::begins_with("name", "la")),
        );
        let compiled = FilterCompiler::new(&encoder)
            .compile(&expr, DEFAULT_FILTER_PREFIX)
            .unwrap();

        assert_eq!(
            compiled.expression,
            "(#F_0_0 > :F_0_0) OR (NOT (begins_with (#F_1_0_0, :F_1_0_0)))"
        );
    }
}
