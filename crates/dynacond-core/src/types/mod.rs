//! Type system for dynacond
//!
//! This module provides:
//! - Scalar operand values
//! - Encoded attribute values
//! - The value encoder used by the compiler

pub mod attribute_value;
pub mod encoder;
pub mod scalar;

pub use attribute_value::AttributeValue;
pub use encoder::{AttributeEncoder, ValueEncoder};
pub use scalar::Scalar;
