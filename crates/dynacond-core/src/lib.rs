//! dynacond Core - Core types and definitions for dynacond
//!
//! This crate provides the fundamental types used across the dynacond crates:
//! - Condition and filter expression trees
//! - Comparison and logical operators
//! - Scalar operands and their encoded attribute values
//! - Error types

pub mod ast;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use ast::{
    Comparator, Condition, ConditionExpression, FilterCondition, FilterExpression,
    LogicalOperator, MAX_NESTING_DEPTH,
};
pub use error::{CoreError, EncodeError};
pub use types::{AttributeEncoder, AttributeValue, Scalar, ValueEncoder};
