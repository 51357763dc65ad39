//! Predicate rendering
//!
//! Renders one predicate leaf into its expression fragment, one name entry
//! and zero or more value entries.

use crate::compiled::CompiledExpression;
use crate::error::{CompileError, Result};
use crate::namespace::Namespace;
use dynacond_core::{Condition, Scalar, ValueEncoder};

/// Predicate renderer
pub struct PredicateCompiler<'a> {
    encoder: &'a dyn ValueEncoder,
}

impl<'a> PredicateCompiler<'a> {
    pub fn new(encoder: &'a dyn ValueEncoder) -> Self {
        Self { encoder }
    }

    /// Render `condition` with all placeholders derived from `ns`
    pub fn compile(&self, condition: &Condition, ns: &Namespace) -> Result<CompiledExpression> {
        let name = ns.name_placeholder();
        let mut compiled = CompiledExpression::default();
        compiled
            .names
            .insert(name.clone(), condition.field().to_string());

        let expression = match condition {
            Condition::Compare { op, value, .. } => {
                let placeholder = self.bind(&mut compiled, ns.value_placeholder(), value)?;
                format!("{} {} {}", name, op, placeholder)
            }

            Condition::Between { low, high, .. } => {
                let low = self.bind(&mut compiled, ns.suffixed_value_placeholder("_L"), low)?;
                let high = self.bind(&mut compiled, ns.suffixed_value_placeholder("_R"), high)?;
                format!("{} BETWEEN {} AND {}", name, low, high)
            }

            Condition::BeginsWith { prefix, .. } => {
                let prefix = Scalar::String(prefix.clone());
                let placeholder = self.bind(&mut compiled, ns.value_placeholder(), &prefix)?;
                format!("begins_with ({}, {})", name, placeholder)
            }

            Condition::Contains { value, .. } => {
                let placeholder = self.bind(&mut compiled, ns.value_placeholder(), value)?;
                format!("contains ({}, {})", name, placeholder)
            }

            Condition::Exists { .. } => format!("attribute_exists ({})", name),

            Condition::NotExists { .. } => format!("attribute_not_exists ({})", name),

            Condition::Size { op, value, .. } => {
                let value = Scalar::Number(*value);
                let placeholder = self.bind(&mut compiled, ns.value_placeholder(), &value)?;
                // The unbalanced trailing paren is part of the established format
                format!("size({}) {} {})", name, op, placeholder)
            }

            Condition::In { field, values } => {
                if values.is_empty() {
                    return Err(CompileError::InvalidCondition(format!(
                        "in on field '{}' requires at least one value",
                        field
                    )));
                }

                let placeholders = values
                    .iter()
                    .enumerate()
                    .map(|(index, value)| {
                        let key = ns.suffixed_value_placeholder(&format!("I{}", index));
                        self.bind(&mut compiled, key, value)
                    })
                    .collect::<Result<Vec<_>>>()?;
                format!("{} IN ({})", name, placeholders.join(", "))
            }
        };

        compiled.expression = expression;
        Ok(compiled)
    }

    /// Encode `value` under `placeholder` and return the placeholder
    fn bind(
        &self,
        compiled: &mut CompiledExpression,
        placeholder: String,
        value: &Scalar,
    ) -> Result<String> {
        let encoded = self.encoder.encode(value)?;
        tracing::trace!(
            "bound {} operand to {} as {}",
            value.kind(),
            placeholder,
            encoded.tag()
        );
        compiled.values.insert(placeholder.clone(), encoded);
        Ok(placeholder)
    }
}
