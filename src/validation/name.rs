//! Employee name validation.

use serde_json::Value;

use crate::error::{EngineError, EngineResult};

/// Checks that a name is usable: any non-empty text is accepted unchanged.
pub fn check_name(name: &str) -> EngineResult<&str> {
    if name.is_empty() {
        return Err(EngineError::invalid_value("name", "must not be empty"));
    }
    Ok(name)
}

/// Validates a name supplied as a dynamic value.
///
/// Fails with a type error unless `value` is a JSON string, then applies
/// [`check_name`].
///
/// # Examples
///
/// ```
/// use employee_record::validation::validate_name;
/// use serde_json::json;
///
/// assert_eq!(validate_name(&json!("Bob")).unwrap(), "Bob");
/// assert!(validate_name(&json!(5)).is_err());
/// ```
pub fn validate_name(value: &Value) -> EngineResult<String> {
    let name = value
        .as_str()
        .ok_or_else(|| EngineError::invalid_type("name", "text"))?;
    check_name(name).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_non_empty_name_is_returned_unchanged() {
        assert_eq!(check_name("Bob").unwrap(), "Bob");
        assert_eq!(check_name(" padded ").unwrap(), " padded ");
        assert_eq!(validate_name(&json!("Алиса")).unwrap(), "Алиса");
    }

    #[test]
    fn test_empty_name_is_value_error() {
        assert_eq!(check_name("").unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(validate_name(&json!("")).unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn test_non_text_name_is_type_error() {
        for value in [json!(5), json!(null), json!(true), json!(["Bob"]), json!({"name": "Bob"})] {
            let err = validate_name(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type, "value: {}", value);
        }
    }
}
