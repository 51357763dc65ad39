//! dynacond Parser - condition documents to typed expression trees
//!
//! Condition documents use the compact tuple form:
//!
//! ```text
//! ["age", ">=", 21]
//! [["age", ">=", 21], "OR", ["age", "<", 15]]
//! {"NOT": ["name", "begins_with", "la"]}
//! ```
//!
//! Both JSON and YAML sources are accepted.

pub mod condition_parser;
pub mod error;

pub use condition_parser::ConditionParser;
pub use error::{ParseError, Result};
