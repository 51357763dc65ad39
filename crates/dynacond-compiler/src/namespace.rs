//! Placeholder namespaces
//!
//! Every node of a condition tree compiles under its own namespace token. A
//! child's token is its parent's token followed by `_` and the child's local
//! index in lowercase hex, so two different tree positions can never produce
//! the same token and no counter has to be shared between sibling subtrees.

use std::fmt;

/// Hierarchical placeholder namespace, e.g. `C_1_0`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    token: String,
}

impl Namespace {
    /// Namespace used for the root call; the prefix is taken as-is
    pub fn root(prefix: impl Into<String>) -> Self {
        Self {
            token: prefix.into(),
        }
    }

    /// Derive the namespace of the `index`-th child of this node
    pub fn child(&self, index: usize) -> Self {
        Self {
            token: format!("{}_{:x}", self.token, index),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// `#<token>`
    pub fn name_placeholder(&self) -> String {
        format!("#{}", self.token)
    }

    /// `:<token>`
    pub fn value_placeholder(&self) -> String {
        format!(":{}", self.token)
    }

    /// `:<token><suffix>`, used by between (`_L`/`_R`) and in (`I<n>`)
    pub fn suffixed_value_placeholder(&self, suffix: &str) -> String {
        format!(":{}{}", self.token, suffix)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// Check that a prefix only yields identifier characters
pub fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
