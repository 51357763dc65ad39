//! Error types for dynacond Core

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Operator {operator} is not allowed in a filter expression")]
    NotFilterable { operator: String },
}

/// Failure to convert a scalar operand into an attribute value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("Number {0} is not finite")]
    NonFiniteNumber(f64),

    #[error("Number {0} is outside the representable range")]
    NumberOutOfRange(f64),

    #[error("Date {0} has a year outside 0000-9999")]
    DateOutOfRange(DateTime<Utc>),
}
