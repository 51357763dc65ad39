//! Encoded attribute values
//!
//! The tagged-union wire form used in expression value maps:
//! `{"S": "larry"}`, `{"N": "21"}`, `{"BOOL": true}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeValue {
    /// String payload (also used for dates)
    #[serde(rename = "S")]
    S(String),
    /// Number payload, as a decimal string
    #[serde(rename = "N")]
    N(String),
    /// Boolean payload
    #[serde(rename = "BOOL")]
    Bool(bool),
}

impl AttributeValue {
    /// The type tag of this value
    pub fn tag(&self) -> &'static str {
        match self {
            AttributeValue::S(_) => "S",
            AttributeValue::N(_) => "N",
            AttributeValue::Bool(_) => "BOOL",
        }
    }
}
