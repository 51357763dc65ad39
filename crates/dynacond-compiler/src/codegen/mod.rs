//! Code generation module
//!
//! This module contains the generators that turn condition trees into
//! parameterized expressions.

pub mod condition_codegen;
pub mod predicate_codegen;

pub use condition_codegen::ConditionCompiler;
pub use predicate_codegen::PredicateCompiler;
