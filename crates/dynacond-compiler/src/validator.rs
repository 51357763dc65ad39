//! Compiled expression validator
//!
//! Checks that the placeholder maps and the expression string agree: every
//! `#name` / `:value` token in the expression resolves, and every map key is
//! referenced by the expression.

use crate::compiled::CompiledExpression;
use std::collections::BTreeSet;
use thiserror::Error;

/// Placeholder coverage failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name placeholder {0} is used but not defined")]
    UnresolvedName(String),

    #[error("Value placeholder {0} is used but not defined")]
    UnresolvedValue(String),

    #[error("Name placeholder {0} is defined but never used")]
    UnusedName(String),

    #[error("Value placeholder {0} is defined but never used")]
    UnusedValue(String),
}

/// Placeholder tokens referenced by an expression
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlaceholderTokens<'a> {
    pub names: BTreeSet<&'a str>,
    pub values: BTreeSet<&'a str>,
}

/// Collect `#...` and `:...` tokens from an expression string
pub fn scan_placeholders(expression: &str) -> PlaceholderTokens<'_> {
    let mut tokens = PlaceholderTokens::default();
    let bytes = expression.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let sigil = bytes[i];
        if sigil != b'#' && sigil != b':' {
            i += 1;
            continue;
        }

        let start = i;
        i += 1;
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
            i += 1;
        }

        // a bare sigil is not a placeholder
        if i - start > 1 {
            let token = &expression[start..i];
            if sigil == b'#' {
                tokens.names.insert(token);
            } else {
                tokens.values.insert(token);
            }
        }
    }

    tokens
}

/// Verify round-trip placeholder coverage of a compiled expression
pub fn validate(compiled: &CompiledExpression) -> Result<(), ValidationError> {
    let tokens = scan_placeholders(&compiled.expression);

    if let Some(token) = tokens.names.iter().find(|t| !compiled.names.contains_key(**t)) {
        return Err(ValidationError::UnresolvedName(token.to_string()));
    }
    if let Some(token) = tokens.values.iter().find(|t| !compiled.values.contains_key(**t)) {
        return Err(ValidationError::UnresolvedValue(token.to_string()));
    }
    if let Some(key) = compiled.names.keys().find(|k| !tokens.names.contains(k.as_str())) {
        return Err(ValidationError::UnusedName(key.clone()));
    }
    if let Some(key) = compiled.values.keys().find(|k| !tokens.values.contains(k.as_str())) {
        return Err(ValidationError::UnusedValue(key.clone()));
    }

    Ok(())
}
