//! Operators for condition expressions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    /// Equal (=)
    #[serde(rename = "=")]
    Eq,
    /// Not equal (<>)
    #[serde(rename = "<>")]
    Ne,
    /// Less than (<)
    #[serde(rename = "<")]
    Lt,
    /// Less than or equal (<=)
    #[serde(rename = "<=")]
    Le,
    /// Greater than (>)
    #[serde(rename = ">")]
    Gt,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    Ge,
}

impl Comparator {
    /// All comparators, in wire-token order
    pub const ALL: [Comparator; 6] = [
        Comparator::Eq,
        Comparator::Ne,
        Comparator::Lt,
        Comparator::Le,
        Comparator::Gt,
        Comparator::Ge,
    ];

    /// The token used in expression strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Ne => "<>",
            Comparator::Lt => "<",
            Comparator::Le => "<=",
            Comparator::Gt => ">",
            Comparator::Ge => ">=",
        }
    }

    /// Look up a comparator by its token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == token)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    /// Logical AND
    And,
    /// Logical OR
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "AND" => Some(LogicalOperator::And),
            "OR" => Some(LogicalOperator::Or),
            _ => None,
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparator_tokens() {
        assert_eq!(Comparator::Eq.as_str(), "=");
        assert_eq!(Comparator::Ne.as_str(), "<>");
        assert_eq!(Comparator::Ge.to_string(), ">=");
    }

    #[test]
    fn test_comparator_from_token() {
        for comparator in Comparator::ALL {
            assert_eq!(Comparator::from_token(comparator.as_str()), Some(comparator));
        }
        assert_eq!(Comparator::from_token("=="), None);
        assert_eq!(Comparator::from_token("!="), None);
    }

    #[test]
    fn test_comparator_serde_uses_tokens() {
        let json = serde_json::to_string(&Comparator::Le).unwrap();
        assert_eq!(json, r#""<=""#);

        let parsed: Comparator = serde_json::from_str(r#""<>""#).unwrap();
        assert_eq!(parsed, Comparator::Ne);
    }

    #[test]
    fn test_logical_operator_tokens() {
        assert_eq!(LogicalOperator::from_token("AND"), Some(LogicalOperator::And));
        assert_eq!(LogicalOperator::from_token("OR"), Some(LogicalOperator::Or));
        assert_eq!(LogicalOperator::from_token("and"), None);
        assert_eq!(serde_json::to_string(&LogicalOperator::Or).unwrap(), r#""OR""#);
    }
}
