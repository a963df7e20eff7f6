//! Event log entries for an employee record.
//!
//! Every mutating operation on a record appends exactly one [`RecordEvent`].
//! Each event keeps both its structured form and the rendered history line.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Grade;

/// What happened to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventAction {
    /// The record was created.
    Hired,
    /// Hours of work were logged.
    Worked {
        /// Hours logged.
        hours: u64,
    },
    /// A bonus was added to accrued pay.
    BonusGranted {
        /// Bonus amount.
        amount: u64,
    },
    /// A promotion was applied.
    Promoted,
    /// Accrued pay was paid out.
    SalaryDisbursed {
        /// Amount paid out.
        amount: u64,
    },
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventAction::Hired => f.write_str("hired"),
            EventAction::Worked { hours } => write!(f, "works {} hours", hours),
            EventAction::BonusGranted { amount } => write!(f, "receives bonus of {}", amount),
            EventAction::Promoted => f.write_str("is promoted"),
            EventAction::SalaryDisbursed { amount } => {
                write!(f, "receives salary of {}", amount)
            }
        }
    }
}

/// A single entry in a record's history.
///
/// # Example
///
/// ```
/// use employee_record::models::{EventAction, Grade, RecordEvent};
///
/// let event = RecordEvent::new(1, "Bob", Grade::Junior, EventAction::Worked { hours: 5 });
/// assert_eq!(event.description, "Bob Junior works 5 hours");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEvent {
    /// Position in the log, starting at 0 for the hire event.
    pub sequence: usize,
    /// When the event was recorded.
    pub recorded_at: DateTime<Utc>,
    /// The grade held when the event happened.
    pub grade: Grade,
    /// The structured action.
    pub action: EventAction,
    /// The rendered history line: `"{name} {grade} {action}"`.
    pub description: String,
}

impl RecordEvent {
    /// Creates an event stamped with the current time.
    pub fn new(sequence: usize, name: &str, grade: Grade, action: EventAction) -> Self {
        Self {
            sequence,
            recorded_at: Utc::now(),
            grade,
            action,
            description: format!("{} {} {}", name, grade, action),
        }
    }
}

impl fmt::Display for RecordEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_rendering() {
        let cases = [
            (EventAction::Hired, "hired"),
            (EventAction::Worked { hours: 8 }, "works 8 hours"),
            (EventAction::BonusGranted { amount: 20 }, "receives bonus of 20"),
            (EventAction::Promoted, "is promoted"),
            (
                EventAction::SalaryDisbursed { amount: 70 },
                "receives salary of 70",
            ),
        ];

        for (action, expected) in cases {
            assert_eq!(action.to_string(), expected);
        }
    }

    #[test]
    fn test_description_uses_name_and_grade() {
        let event = RecordEvent::new(0, "Alice", Grade::Senior, EventAction::Hired);
        assert_eq!(event.description, "Alice Senior hired");
        assert_eq!(event.to_string(), "Alice Senior hired");
        assert_eq!(event.sequence, 0);
    }

    #[test]
    fn test_action_serialization_is_tagged() {
        let json = serde_json::to_value(EventAction::BonusGranted { amount: 5 }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "bonus_granted", "amount": 5}));

        let json = serde_json::to_value(EventAction::Promoted).unwrap();
        assert_eq!(json, serde_json::json!({"type": "promoted"}));
    }
}
