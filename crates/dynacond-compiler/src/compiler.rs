//! Main compiler
//!
//! Provides a unified interface for compiling condition trees, filter trees
//! and condition documents.

use crate::codegen::ConditionCompiler;
use crate::compiled::CompiledExpression;
use crate::error::{CompileError, Result};
use crate::filter::{FilterCompiler, DEFAULT_FILTER_PREFIX};
use crate::namespace::is_valid_prefix;
use crate::validator;
use dynacond_core::{AttributeEncoder, ConditionExpression, FilterExpression, ValueEncoder};
use dynacond_parser::ConditionParser;
use serde::{Deserialize, Serialize};

/// Default root namespace for condition expressions
pub const DEFAULT_CONDITION_PREFIX: &str = "C";

/// Compiler options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Root namespace for condition expressions
    pub condition_prefix: String,
    /// Root namespace for filter expressions
    pub filter_prefix: String,
    /// Run the placeholder coverage check on every compiled expression
    pub validate_output: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            condition_prefix: DEFAULT_CONDITION_PREFIX.to_string(),
            filter_prefix: DEFAULT_FILTER_PREFIX.to_string(),
            validate_output: false,
        }
    }
}

impl CompilerOptions {
    /// Load options from YAML; missing keys keep their defaults
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let options: Self =
            serde_yaml::from_str(input).map_err(|e| CompileError::Config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from JSON; missing keys keep their defaults
    pub fn from_json_str(input: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(input).map_err(|e| CompileError::Config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check that both prefixes produce valid, mutually disjoint placeholders
    pub fn validate(&self) -> Result<()> {
        for prefix in [&self.condition_prefix, &self.filter_prefix] {
            check_prefix(prefix)?;
        }

        if overlaps(&self.condition_prefix, &self.filter_prefix)
            || overlaps(&self.filter_prefix, &self.condition_prefix)
        {
            return Err(CompileError::InvalidPrefix {
                prefix: self.filter_prefix.clone(),
                reason: format!(
                    "filter placeholders would collide with condition prefix '{}'",
                    self.condition_prefix
                ),
            });
        }

        Ok(())
    }
}

/// `outer` derives child namespaces that `inner` can also produce
fn overlaps(outer: &str, inner: &str) -> bool {
    outer == inner
        || inner
            .strip_prefix(outer)
            .is_some_and(|rest| rest.starts_with('_'))
}

fn check_prefix(prefix: &str) -> Result<()> {
    if !is_valid_prefix(prefix) {
        return Err(CompileError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: "expected a non-empty run of ASCII letters, digits or '_'".to_string(),
        });
    }
    Ok(())
}

/// The dynacond compiler
pub struct Compiler {
    /// Compiler options
    options: CompilerOptions,
    /// Operand encoder
    encoder: Box<dyn ValueEncoder>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    /// Create a new compiler instance with default options
    pub fn new() -> Self {
        Self {
            options: CompilerOptions::default(),
            encoder: Box::new(AttributeEncoder),
        }
    }

    /// Create a new compiler instance with custom options
    pub fn with_options(options: CompilerOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            encoder: Box::new(AttributeEncoder),
        })
    }

    /// Replace the operand encoder
    pub fn with_encoder(mut self, encoder: impl ValueEncoder + 'static) -> Self {
        self.encoder = Box::new(encoder);
        self
    }

    /// Get the compiler options
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compile a condition expression under the configured condition prefix
    pub fn compile_condition(&self, expr: &ConditionExpression) -> Result<CompiledExpression> {
        self.compile_condition_with_prefix(expr, &self.options.condition_prefix)
    }

    /// Compile a condition expression under a caller-chosen prefix
    pub fn compile_condition_with_prefix(
        &self,
        expr: &ConditionExpression,
        prefix: &str,
    ) -> Result<CompiledExpression> {
        check_prefix(prefix)?;
        tracing::debug!("compiling condition expression: prefix={}", prefix);

        let compiled = ConditionCompiler::new(self.encoder.as_ref()).compile(expr, prefix)?;
        tracing::debug!(
            "condition expression shape: leaves={}, depth={}",
            expr.conditions().len(),
            expr.depth()
        );
        self.finish(compiled)
    }

    /// Compile a filter expression under the configured filter prefix
    pub fn compile_filter(&self, expr: &FilterExpression) -> Result<CompiledExpression> {
        self.compile_filter_with_prefix(expr, &self.options.filter_prefix)
    }

    /// Compile a filter expression under a caller-chosen prefix
    pub fn compile_filter_with_prefix(
        &self,
        expr: &FilterExpression,
        prefix: &str,
    ) -> Result<CompiledExpression> {
        check_prefix(prefix)?;
        tracing::debug!("compiling filter expression: prefix={}", prefix);

        let compiled = FilterCompiler::new(self.encoder.as_ref()).compile(expr, prefix)?;
        self.finish(compiled)
    }

    /// Parse and compile a tuple-shaped condition document
    pub fn compile_json_condition(&self, document: &serde_json::Value) -> Result<CompiledExpression> {
        let expr = ConditionParser::parse_value(document)?;
        self.compile_condition(&expr)
    }

    /// Parse and compile a tuple-shaped filter document
    pub fn compile_json_filter(&self, document: &serde_json::Value) -> Result<CompiledExpression> {
        let expr = ConditionParser::parse_filter_value(document)?;
        self.compile_filter(&expr)
    }

    fn finish(&self, compiled: CompiledExpression) -> Result<CompiledExpression> {
        if self.options.validate_output {
            validator::validate(&compiled)?;
        }

        tracing::debug!(
            "compiled expression: names={}, values={}",
            compiled.names.len(),
            compiled.values.len()
        );
        Ok(compiled)
    }
}
