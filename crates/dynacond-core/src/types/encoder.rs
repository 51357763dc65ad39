//! Scalar to attribute value encoding

use super::attribute_value::AttributeValue;
use super::scalar::Scalar;
use crate::error::EncodeError;
use chrono::{DateTime, Datelike, SecondsFormat, Utc};

/// Largest magnitude the target number type can hold
const MAX_NUMBER_MAGNITUDE: f64 = 1e126;

/// Smallest non-zero magnitude the target number type can hold
const MIN_NUMBER_MAGNITUDE: f64 = 1e-130;

/// Converts operand scalars into attribute values.
///
/// Failure is always an explicit `Err`; an empty payload such as `{"S": ""}`
/// is a valid encoding.
pub trait ValueEncoder: Send + Sync {
    fn encode(&self, value: &Scalar) -> Result<AttributeValue, EncodeError>;
}

/// Default encoder producing the `S` / `N` / `BOOL` wire form
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeEncoder;

impl AttributeEncoder {
    fn encode_number(value: f64) -> Result<AttributeValue, EncodeError> {
        if !value.is_finite() {
            log::debug!("refusing to encode non-finite number {}", value);
            return Err(EncodeError::NonFiniteNumber(value));
        }

        let magnitude = value.abs();
        if magnitude >= MAX_NUMBER_MAGNITUDE || (magnitude != 0.0 && magnitude < MIN_NUMBER_MAGNITUDE) {
            log::debug!("refusing to encode out-of-range number {}", value);
            return Err(EncodeError::NumberOutOfRange(value));
        }

        // -0.0 would otherwise print as "-0"
        if value == 0.0 {
            return Ok(AttributeValue::N("0".to_string()));
        }

        Ok(AttributeValue::N(value.to_string()))
    }

    fn encode_date(value: &DateTime<Utc>) -> Result<AttributeValue, EncodeError> {
        // Outside four-digit years the output is no longer plain ISO-8601
        if !(0..=9999).contains(&value.year()) {
            log::debug!("refusing to encode out-of-range date {}", value);
            return Err(EncodeError::DateOutOfRange(*value));
        }

        Ok(AttributeValue::S(value.to_rfc3339_opts(SecondsFormat::Millis, true)))
    }
}

impl ValueEncoder for AttributeEncoder {
    fn encode(&self, value: &Scalar) -> Result<AttributeValue, EncodeError> {
        match value {
            Scalar::String(s) => Ok(AttributeValue::S(s.clone())),
            Scalar::Number(n) => Self::encode_number(*n),
            Scalar::Bool(b) => Ok(AttributeValue::Bool(*b)),
            Scalar::Date(d) => Self::encode_date(d),
        }
    }
}
