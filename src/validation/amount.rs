//! Validation for logged hours and bonus amounts.
//!
//! Both are whole, non-negative quantities. Zero is allowed.

use serde_json::Value;

use crate::error::{EngineError, EngineResult};

fn check_non_negative(field: &str, value: i64) -> EngineResult<u64> {
    u64::try_from(value)
        .map_err(|_| EngineError::invalid_value(field, format!("must not be negative, got {}", value)))
}

fn validate_integer(field: &str, value: &Value) -> EngineResult<u64> {
    if let Some(unsigned) = value.as_u64() {
        return Ok(unsigned);
    }
    let signed = value
        .as_i64()
        .ok_or_else(|| EngineError::invalid_type(field, "integer"))?;
    check_non_negative(field, signed)
}

/// Checks a number of hours to log.
pub fn check_hours(hours: i64) -> EngineResult<u64> {
    check_non_negative("hours", hours)
}

/// Checks a bonus amount.
pub fn check_bonus(amount: i64) -> EngineResult<u64> {
    check_non_negative("amount", amount)
}

/// Validates hours supplied as a dynamic value.
///
/// Only JSON integers are accepted; floats such as `5.0` are a type error.
pub fn validate_hours(value: &Value) -> EngineResult<u64> {
    validate_integer("hours", value)
}

/// Validates a bonus amount supplied as a dynamic value.
pub fn validate_bonus(value: &Value) -> EngineResult<u64> {
    validate_integer("amount", value)
}
