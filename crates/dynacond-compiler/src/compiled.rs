//! Compiled expression output

use dynacond_core::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expression string plus its name and value placeholder maps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompiledExpression {
    /// Parameterized expression, e.g. `#C_0 >= :C_0`
    pub expression: String,
    /// `#token` → attribute name
    pub names: BTreeMap<String, String>,
    /// `:token` → encoded value
    pub values: BTreeMap<String, AttributeValue>,
}

impl CompiledExpression {
    /// Look up the attribute name behind a name placeholder
    pub fn name(&self, placeholder: &str) -> Option<&str> {
        self.names.get(placeholder).map(String::as_str)
    }

    /// Look up the encoded value behind a value placeholder
    pub fn value(&self, placeholder: &str) -> Option<&AttributeValue> {
        self.values.get(placeholder)
    }

    /// Move the placeholder maps of `other` into `self` and return its
    /// expression string. Sub-expressions compiled under disjoint namespaces
    /// never share keys.
    pub(crate) fn absorb(&mut self, other: CompiledExpression) -> String {
        debug_assert!(other.names.keys().all(|k| !self.names.contains_key(k)));
        debug_assert!(other.values.keys().all(|k| !self.values.contains_key(k)));

        self.names.extend(other.names);
        self.values.extend(other.values);
        other.expression
    }
}
