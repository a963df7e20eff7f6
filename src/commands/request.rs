//! Request types for the JSON command boundary.
//!
//! Payload fields are kept as raw [`Value`]s so that a field of the wrong
//! JSON type is reported as a type error by the validators rather than as a
//! generic deserialization failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to create a record.
///
/// ```
/// use employee_record::commands::HireRequest;
/// use serde_json::json;
///
/// let request: HireRequest = serde_json::from_value(json!({
///     "name": "Bob",
///     "grade": "junior"
/// })).unwrap();
/// assert_eq!(request.name, json!("Bob"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HireRequest {
    /// The employee name; must be non-empty text.
    pub name: Value,
    /// The grade name; case-insensitive.
    pub grade: Value,
}

/// An operation to run against an existing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RecordCommand {
    /// Log hours of work.
    LogWork {
        /// Hours to log; must be a non-negative integer.
        hours: Value,
    },
    /// Grant a bonus.
    GrantBonus {
        /// Bonus amount; must be a non-negative integer.
        amount: Value,
    },
    /// Promote the employee.
    Promote,
    /// Pay out accrued pay.
    DisburseSalary,
    /// Read the summary line.
    Summary,
    /// Read the history lines.
    History,
}

impl RecordCommand {
    /// The action tag, as it appears on the wire.
    pub fn action(&self) -> &'static str {
        match self {
            RecordCommand::LogWork { .. } => "log_work",
            RecordCommand::GrantBonus { .. } => "grant_bonus",
            RecordCommand::Promote => "promote",
            RecordCommand::DisburseSalary => "disburse_salary",
            RecordCommand::Summary => "summary",
            RecordCommand::History => "history",
        }
    }

    /// Whether running the command appends to the record's history.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, RecordCommand::Summary | RecordCommand::History)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_log_work_keeps_raw_value() {
        let command: RecordCommand =
            serde_json::from_value(json!({"action": "log_work", "hours": "x"})).unwrap();
        assert_eq!(command, RecordCommand::LogWork { hours: json!("x") });
        assert!(command.is_mutating());
    }

    #[test]
    fn test_deserialize_unit_actions() {
        let cases = [
            ("promote", RecordCommand::Promote),
            ("disburse_salary", RecordCommand::DisburseSalary),
            ("summary", RecordCommand::Summary),
            ("history", RecordCommand::History),
        ];

        for (action, expected) in cases {
            let command: RecordCommand =
                serde_json::from_value(json!({ "action": action })).unwrap();
            assert_eq!(command.action(), action);
            assert_eq!(command, expected);
        }
    }

    #[test]
    fn test_unknown_action_fails_to_deserialize() {
        let result = serde_json::from_value::<RecordCommand>(json!({"action": "fire"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_payload_fails_to_deserialize() {
        let result = serde_json::from_value::<RecordCommand>(json!({"action": "grant_bonus"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_only_commands() {
        assert!(!RecordCommand::Summary.is_mutating());
        assert!(!RecordCommand::History.is_mutating());
        assert!(RecordCommand::Promote.is_mutating());
    }
}
