//! Grade validation and grade-to-rate lookup.

use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::Grade;

fn grade_text<'a>(value: &'a Value, field: &str) -> EngineResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| EngineError::invalid_type(field, "text"))
}

/// Validates a grade supplied as a dynamic value.
///
/// Matching is case-insensitive; the returned [`Grade`] displays with its
/// canonical casing.
///
/// # Examples
///
/// ```
/// use employee_record::models::Grade;
/// use employee_record::validation::validate_grade;
/// use serde_json::json;
///
/// assert_eq!(validate_grade(&json!("junior")).unwrap(), Grade::Junior);
/// assert!(validate_grade(&json!("Intern")).is_err());
/// ```
pub fn validate_grade(value: &Value) -> EngineResult<Grade> {
    grade_text(value, "grade")?.parse()
}

/// Looks up the standard hourly rate for a grade name.
///
/// Fails with a type error if `value` is not text and a value error if it
/// names no known grade.
///
/// # Examples
///
/// ```
/// use employee_record::validation::rate_for_grade;
/// use serde_json::json;
///
/// assert_eq!(rate_for_grade(&json!("SENIOR")).unwrap(), 20);
/// ```
pub fn rate_for_grade(value: &Value) -> EngineResult<u64> {
    let grade: Grade = grade_text(value, "grade")?.parse()?;
    Ok(grade.hourly_rate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_validate_grade_normalizes_case() {
        assert_eq!(validate_grade(&json!("junior")).unwrap().to_string(), "Junior");
        assert_eq!(validate_grade(&json!("MIDDLE")).unwrap(), Grade::Middle);
        assert_eq!(validate_grade(&json!("Senior")).unwrap(), Grade::Senior);
    }

    #[test]
    fn test_validate_grade_unknown_is_value_error() {
        let err = validate_grade(&json!("Intern")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_validate_grade_non_text_is_type_error() {
        let err = validate_grade(&json!(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_rate_for_grade_table() {
        assert_eq!(rate_for_grade(&json!("Junior")).unwrap(), 10);
        assert_eq!(rate_for_grade(&json!("middle")).unwrap(), 15);
        assert_eq!(rate_for_grade(&json!("SENIOR")).unwrap(), 20);
    }

    #[test]
    fn test_rate_for_grade_errors() {
        assert_eq!(rate_for_grade(&json!("Lead")).unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(rate_for_grade(&json!(null)).unwrap_err().kind(), ErrorKind::Type);
    }
}
