//! Command handlers for the JSON command boundary.
//!
//! This module contains the functions that turn requests into record
//! operations.

use serde_json::Value;
use tracing::{info, warn};

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;
use crate::validation::{validate_bonus, validate_grade, validate_hours, validate_name};

use super::request::{HireRequest, RecordCommand};
use super::response::CommandOutcome;

/// Creates a record from a hire request using the given rate table.
pub fn hire(request: &HireRequest, rates: RateTable) -> EngineResult<EmployeeRecord> {
    let validated = validate_name(&request.name)
        .and_then(|name| validate_grade(&request.grade).map(|grade| (name, grade)));

    match validated {
        Ok((name, grade)) => Ok(EmployeeRecord::hire(name, grade, rates)),
        Err(err) => {
            warn!(error = %err, "Hire request rejected");
            Err(err)
        }
    }
}

/// Runs a command against a record.
///
/// Validation failures are returned unchanged and leave the record as it
/// was.
///
/// # Examples
///
/// ```
/// use employee_record::commands::{execute, CommandOutcome, RecordCommand};
/// use employee_record::models::EmployeeRecord;
/// use serde_json::json;
///
/// let mut record = EmployeeRecord::create("Bob", "Junior")?;
/// execute(&mut record, &RecordCommand::LogWork { hours: json!(5) })?;
/// let outcome = execute(&mut record, &RecordCommand::Summary)?;
/// assert_eq!(outcome, CommandOutcome::Summary { text: "Bob 5 h. 50 currency.".to_string() });
/// # Ok::<(), employee_record::error::EngineError>(())
/// ```
pub fn execute(record: &mut EmployeeRecord, command: &RecordCommand) -> EngineResult<CommandOutcome> {
    let result = apply(record, command);

    match &result {
        Ok(_) => info!(
            record_id = %record.id(),
            action = command.action(),
            history_len = record.events().len(),
            "Command completed"
        ),
        Err(err) => warn!(
            record_id = %record.id(),
            action = command.action(),
            error = %err,
            "Command rejected"
        ),
    }

    result
}

/// Parses a raw JSON command and runs it against a record.
///
/// A payload that matches no known action fails with
/// [`EngineError::MalformedCommand`].
pub fn execute_json(record: &mut EmployeeRecord, command: &Value) -> EngineResult<CommandOutcome> {
    let command: RecordCommand =
        serde_json::from_value(command.clone()).map_err(|e| {
            warn!(record_id = %record.id(), error = %e, "Malformed command");
            EngineError::MalformedCommand {
                message: e.to_string(),
            }
        })?;
    execute(record, &command)
}

fn apply(record: &mut EmployeeRecord, command: &RecordCommand) -> EngineResult<CommandOutcome> {
    let outcome = match command {
        RecordCommand::LogWork { hours } => {
            record.record_work(validate_hours(hours)?)?;
            CommandOutcome::Applied
        }
        RecordCommand::GrantBonus { amount } => {
            record.record_bonus(validate_bonus(amount)?)?;
            CommandOutcome::Applied
        }
        RecordCommand::Promote => {
            record.promote();
            CommandOutcome::Applied
        }
        RecordCommand::DisburseSalary => CommandOutcome::Disbursed {
            amount: record.disburse_salary(),
        },
        RecordCommand::Summary => CommandOutcome::Summary {
            text: record.summary(),
        },
        RecordCommand::History => CommandOutcome::History {
            lines: record.history_lines().into_iter().map(str::to_string).collect(),
        },
    };
    Ok(outcome)
}
