//! Parser error types

use dynacond_core::CoreError;
use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Operator token outside the recognized set
    #[error("Operator {0} is not defined")]
    UnsupportedOperator(String),

    /// Recognized operator that a filter expression cannot hold
    #[error("Operator {operator} is not allowed in a filter expression")]
    OperatorNotAllowed { operator: String },

    /// Node that is neither a predicate, a connective nor a negation
    #[error("Invalid expression shape: {0}")]
    InvalidShape(String),

    /// Operand that cannot be used with its operator
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Wrong number of operands
    #[error("Operator {operator} on field '{field}' expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        field: String,
        operator: String,
        expected: usize,
        actual: usize,
    },
}

impl From<CoreError> for ParseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFilterable { operator } => ParseError::OperatorNotAllowed { operator },
        }
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
