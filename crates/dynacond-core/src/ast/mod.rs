//! Abstract Syntax Tree (AST) definitions for dynacond
//!
//! This module contains the node definitions for:
//! - Condition expressions (the full predicate set)
//! - Filter expressions (the restricted predicate set)
//! - Operators

pub mod condition;
pub mod filter;
pub mod operator;

pub use condition::{Condition, ConditionExpression, MAX_NESTING_DEPTH};
pub use filter::{FilterCondition, FilterExpression};
pub use operator::{Comparator, LogicalOperator};
