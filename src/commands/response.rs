//! Response types for the JSON command boundary.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, ErrorKind};

/// The result of running a [`RecordCommand`](super::RecordCommand).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// A mutation was applied and produced no value.
    Applied,
    /// Accrued pay was paid out.
    Disbursed {
        /// The amount paid.
        amount: u64,
    },
    /// The record's summary line.
    Summary {
        /// `"{name} {hours} h. {pay} currency."`
        text: String,
    },
    /// The record's history.
    History {
        /// One entry per event, oldest first.
        lines: Vec<String>,
    },
}

/// Serializable description of a failed command.
///
/// ```
/// use employee_record::commands::CommandError;
/// use employee_record::error::EngineError;
///
/// let error: CommandError = EngineError::invalid_type("hours", "integer").into();
/// assert_eq!(error.code, "TYPE_ERROR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl From<EngineError> for CommandError {
    fn from(err: EngineError) -> Self {
        let code = match err.kind() {
            ErrorKind::Type => "TYPE_ERROR",
            ErrorKind::Value => "VALUE_ERROR",
            ErrorKind::Config => "CONFIG_ERROR",
        };
        Self {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(
            serde_json::to_value(CommandOutcome::Applied).unwrap(),
            json!({"outcome": "applied"})
        );
        assert_eq!(
            serde_json::to_value(CommandOutcome::Disbursed { amount: 70 }).unwrap(),
            json!({"outcome": "disbursed", "amount": 70})
        );
        assert_eq!(
            serde_json::to_value(CommandOutcome::History {
                lines: vec!["Bob Junior hired".to_string()]
            })
            .unwrap(),
            json!({"outcome": "history", "lines": ["Bob Junior hired"]})
        );
    }

    #[test]
    fn test_value_error_conversion() {
        let error: CommandError = EngineError::invalid_value("amount", "must not be negative, got -5").into();
        assert_eq!(error.code, "VALUE_ERROR");
        assert_eq!(
            error.message,
            "Invalid value for 'amount': must not be negative, got -5"
        );
    }

    #[test]
    fn test_malformed_command_maps_to_type_error() {
        let error: CommandError = EngineError::MalformedCommand {
            message: "missing field `action`".to_string(),
        }
        .into();
        assert_eq!(error.code, "TYPE_ERROR");
    }
}
