//! Condition tree compilation
//!
//! Walks a condition tree and merges the rendered leaves bottom-up. Each
//! recursive call receives its own namespace, derived from its position:
//! - connective: left under child 0, right under child 1
//! - negation: inner expression under child 0
//! - predicate leaf: rendered under child 0 of the current namespace

use super::predicate_codegen::PredicateCompiler;
use crate::compiled::CompiledExpression;
use crate::error::{CompileError, Result};
use crate::namespace::Namespace;
use dynacond_core::{ConditionExpression, ValueEncoder, MAX_NESTING_DEPTH};

/// Recursive condition compiler
pub struct ConditionCompiler<'a> {
    predicates: PredicateCompiler<'a>,
}

impl<'a> ConditionCompiler<'a> {
    pub fn new(encoder: &'a dyn ValueEncoder) -> Self {
        Self {
            predicates: PredicateCompiler::new(encoder),
        }
    }

    /// Compile `expr` using `prefix` as the root namespace
    pub fn compile(&self, expr: &ConditionExpression, prefix: &str) -> Result<CompiledExpression> {
        self.compile_at(expr, &Namespace::root(prefix))
    }

    /// Compile `expr` as if it were located at namespace `ns`
    pub fn compile_at(&self, expr: &ConditionExpression, ns: &Namespace) -> Result<CompiledExpression> {
        self.compile_node(expr, ns, 0)
    }

    /// `depth` counts the connectives and negations above `expr`
    fn compile_node(
        &self,
        expr: &ConditionExpression,
        ns: &Namespace,
        depth: usize,
    ) -> Result<CompiledExpression> {
        if depth > MAX_NESTING_DEPTH {
            return Err(CompileError::InvalidCondition(format!(
                "expression nests deeper than {} levels",
                MAX_NESTING_DEPTH
            )));
        }

        match expr {
            ConditionExpression::Logic { left, op, right } => {
                tracing::trace!("compiling {} connective at {}", op, ns);

                let mut compiled = CompiledExpression::default();
                let left = compiled.absorb(self.compile_node(left, &ns.child(0), depth + 1)?);
                let right = compiled.absorb(self.compile_node(right, &ns.child(1), depth + 1)?);

                compiled.expression = format!("({}) {} ({})", left, op, right);
                Ok(compiled)
            }

            ConditionExpression::Not(inner) => {
                tracing::trace!("compiling negation at {}", ns);

                let mut compiled = self.compile_node(inner, &ns.child(0), depth + 1)?;
                compiled.expression = format!("NOT ({})", compiled.expression);
                Ok(compiled)
            }

            ConditionExpression::Condition(condition) => {
                let leaf = ns.child(0);
                tracing::trace!(
                    "rendering {} on '{}' at {}",
                    condition.operator_token(),
                    condition.field(),
                    leaf
                );
                self.predicates.compile(condition, &leaf)
            }
        }
    }
}
