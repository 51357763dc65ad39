//! Compiler error types

use crate::validator::ValidationError;
use dynacond_core::EncodeError;
use dynacond_parser::ParseError;
use thiserror::Error;

/// Compiler error
#[derive(Error, Debug)]
pub enum CompileError {
    /// An operand could not be converted into an attribute value
    #[error("Unable to convert the value for the specified condition: {0}")]
    Encoding(#[from] EncodeError),

    /// Operator token outside the recognized set
    #[error("Operator {0} is not defined")]
    UnsupportedOperator(String),

    /// Structurally valid tree that cannot be rendered
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    /// Placeholder prefix that would produce invalid tokens
    #[error("Invalid placeholder prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    /// Rendered expression failed the placeholder coverage check
    #[error("Compiled expression failed validation: {0}")]
    Validation(#[from] ValidationError),

    /// Condition document could not be parsed
    #[error("Document error: {0}")]
    Parse(ParseError),

    /// Compiler options could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnsupportedOperator(op) => CompileError::UnsupportedOperator(op),
            other => CompileError::Parse(other),
        }
    }
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
