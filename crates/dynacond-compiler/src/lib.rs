//! dynacond Compiler - condition trees to parameterized expressions
//!
//! This crate compiles condition and filter trees into the triad expected by
//! the condition and filter parameters of a document database query: an
//! expression string, a map of `#name` placeholders and a map of `:value`
//! placeholders.
//!
//! ```
//! use dynacond_compiler::condition;
//! use dynacond_core::{Comparator, Condition, ConditionExpression};
//!
//! let expr = ConditionExpression::or(
//!     Condition::compare("age", Comparator::Ge, 21),
//!     Condition::compare("age", Comparator::Lt, 15),
//! );
//! let compiled = condition(&expr).unwrap();
//!
//! assert_eq!(compiled.expression, "(#C_0_0 >= :C_0_0) OR (#C_1_0 < :C_1_0)");
//! assert_eq!(compiled.names["#C_1_0"], "age");
//! ```

pub mod codegen;
pub mod compiled;
pub mod compiler;
pub mod error;
pub mod filter;
pub mod namespace;
pub mod validator;

// Re-export main types
pub use compiled::CompiledExpression;
pub use compiler::{Compiler, CompilerOptions, DEFAULT_CONDITION_PREFIX};
pub use error::{CompileError, Result};
pub use filter::DEFAULT_FILTER_PREFIX;
pub use namespace::Namespace;
pub use validator::{validate, ValidationError};

// Re-export codegen types
pub use codegen::{ConditionCompiler, PredicateCompiler};
pub use filter::FilterCompiler;

use dynacond_core::{ConditionExpression, FilterExpression};

/// Compile a condition expression with the default encoder and prefix `C`
pub fn condition(expr: &ConditionExpression) -> Result<CompiledExpression> {
    Compiler::new().compile_condition(expr)
}

/// Compile a filter expression with the default encoder and prefix `F`
pub fn filter(expr: &FilterExpression) -> Result<CompiledExpression> {
    Compiler::new().compile_filter(expr)
}
