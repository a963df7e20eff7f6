//! Employee record model.
//!
//! This module defines [`EmployeeRecord`], which owns an employee's grade,
//! accumulated hours and pay, and the append-only history of everything
//! that happened to it since hire.

use std::fmt;
use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::validation::{check_bonus, check_hours, check_name, validate_grade, validate_name};

use super::{EventAction, Grade, RecordEvent};

/// Rate increase applied when a Senior is promoted.
pub const SENIOR_RAISE_STEP: u64 = 1;

/// A single employee's pay and history.
///
/// All fields are private; state changes only through the mutating
/// operations, each of which validates its input before touching anything
/// and appends exactly one history entry.
///
/// # Examples
///
/// ```
/// use employee_record::models::EmployeeRecord;
///
/// let mut bob = EmployeeRecord::create("Bob", "junior")?;
/// bob.log_work(5)?;
/// bob.grant_bonus(20)?;
/// assert_eq!(bob.summary(), "Bob 5 h. 70 currency.");
///
/// assert_eq!(bob.disburse_salary(), 70);
/// assert_eq!(bob.disburse_salary(), 0);
/// assert_eq!(bob.history_lines().len(), 5);
/// # Ok::<(), employee_record::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeRecord {
    id: Uuid,
    name: String,
    grade: Grade,
    hours_worked: u64,
    accrued_pay: u64,
    hourly_rate: u64,
    rates: RateTable,
    hired_at: DateTime<Utc>,
    events: Vec<RecordEvent>,
}

/// A serializable, read-only view of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    /// Record identifier.
    pub id: Uuid,
    /// Employee name.
    pub name: String,
    /// Current grade.
    pub grade: Grade,
    /// Total hours logged since hire.
    pub hours_worked: u64,
    /// Pay accrued since the last disbursement.
    pub accrued_pay: u64,
    /// Current hourly rate.
    pub hourly_rate: u64,
    /// When the record was created.
    pub hired_at: DateTime<Utc>,
    /// Full event history, oldest first.
    pub history: Vec<RecordEvent>,
}

impl EmployeeRecord {
    /// Creates a record using the standard rate table.
    ///
    /// Fails with a value error if `name` is empty or `grade` does not name
    /// a known grade (case-insensitive).
    pub fn create(name: &str, grade: &str) -> EngineResult<Self> {
        Self::create_with_rates(name, grade, RateTable::default())
    }

    /// Creates a record whose rate lookups use `rates`.
    pub fn create_with_rates(name: &str, grade: &str, rates: RateTable) -> EngineResult<Self> {
        let name = check_name(name)?;
        let grade: Grade = grade.parse()?;
        Ok(Self::hire(name.to_string(), grade, rates))
    }

    /// Creates a record from dynamic values.
    ///
    /// Unlike [`EmployeeRecord::create`] this can also fail with a type
    /// error, when either argument is not text.
    ///
    /// ```
    /// use employee_record::error::ErrorKind;
    /// use employee_record::models::EmployeeRecord;
    /// use serde_json::json;
    ///
    /// let err = EmployeeRecord::from_values(&json!(5), &json!("Junior")).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// ```
    pub fn from_values(name: &Value, grade: &Value) -> EngineResult<Self> {
        let name = validate_name(name)?;
        let grade = validate_grade(grade)?;
        Ok(Self::hire(name, grade, RateTable::default()))
    }

    /// Builds a record from already-validated parts.
    pub(crate) fn hire(name: String, grade: Grade, rates: RateTable) -> Self {
        let id = Uuid::new_v4();
        let hire_event = RecordEvent::new(0, &name, grade, EventAction::Hired);
        info!(record_id = %id, name = %name, grade = %grade, "Employee hired");

        Self {
            id,
            hourly_rate: rates.rate_for(grade),
            hired_at: hire_event.recorded_at,
            events: vec![hire_event],
            name,
            grade,
            hours_worked: 0,
            accrued_pay: 0,
            rates,
        }
    }

    /// Logs hours of work and accrues `hours * hourly_rate` of pay.
    ///
    /// Zero hours is allowed. Negative hours fail with a value error and
    /// leave the record untouched.
    pub fn log_work(&mut self, hours: i64) -> EngineResult<()> {
        let hours = check_hours(hours)?;
        self.record_work(hours)
    }

    /// Adds a bonus to accrued pay without touching hours.
    pub fn grant_bonus(&mut self, amount: i64) -> EngineResult<()> {
        let amount = check_bonus(amount)?;
        self.record_bonus(amount)
    }

    pub(crate) fn record_work(&mut self, hours: u64) -> EngineResult<()> {
        let overflow = || EngineError::invalid_value("hours", "would overflow accumulated totals");
        let earned = hours.checked_mul(self.hourly_rate).ok_or_else(overflow)?;
        let accrued_pay = self.accrued_pay.checked_add(earned).ok_or_else(overflow)?;
        let hours_worked = self.hours_worked.checked_add(hours).ok_or_else(overflow)?;

        self.push_event(EventAction::Worked { hours });
        self.hours_worked = hours_worked;
        self.accrued_pay = accrued_pay;
        debug!(record_id = %self.id, hours, earned, accrued_pay, "Work logged");
        Ok(())
    }

    pub(crate) fn record_bonus(&mut self, amount: u64) -> EngineResult<()> {
        let accrued_pay = self.accrued_pay.checked_add(amount).ok_or_else(|| {
            EngineError::invalid_value("amount", "would overflow accumulated pay")
        })?;

        self.push_event(EventAction::BonusGranted { amount });
        self.accrued_pay = accrued_pay;
        debug!(record_id = %self.id, amount, accrued_pay, "Bonus granted");
        Ok(())
    }

    /// Promotes the employee.
    ///
    /// Junior and Middle move one grade up and take that grade's rate.
    /// A Senior keeps the grade and instead gets a permanent raise of
    /// [`SENIOR_RAISE_STEP`] per call. The history entry records the grade
    /// held before the promotion.
    pub fn promote(&mut self) {
        self.push_event(EventAction::Promoted);

        match self.grade.next() {
            Some(next) => {
                self.grade = next;
                self.hourly_rate = self.rates.rate_for(next);
            }
            None => {
                self.hourly_rate = self.hourly_rate.saturating_add(SENIOR_RAISE_STEP);
            }
        }

        debug!(
            record_id = %self.id,
            grade = %self.grade,
            hourly_rate = self.hourly_rate,
            "Promotion applied"
        );
    }

    /// Pays out everything accrued so far and resets the balance to zero.
    ///
    /// Returns the amount paid; an immediate second call returns 0.
    pub fn disburse_salary(&mut self) -> u64 {
        self.push_event(EventAction::SalaryDisbursed {
            amount: self.accrued_pay,
        });
        let paid = std::mem::take(&mut self.accrued_pay);
        debug!(record_id = %self.id, paid, "Salary disbursed");
        paid
    }

    /// Returns `"{name} {hours} h. {pay} currency."`.
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Returns the rendered history, oldest entry first.
    pub fn history_lines(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.description.as_str()).collect()
    }

    /// Writes the history to `out`, one entry per line.
    pub fn write_history<W: Write>(&self, mut out: W) -> io::Result<()> {
        for event in &self.events {
            writeln!(out, "{}", event)?;
        }
        Ok(())
    }

    /// Prints the history to standard output.
    pub fn print_history(&self) -> io::Result<()> {
        self.write_history(io::stdout().lock())
    }

    /// Returns the structured history.
    pub fn events(&self) -> &[RecordEvent] {
        &self.events
    }

    /// Returns a serializable copy of the record's state.
    pub fn snapshot(&self) -> RecordSnapshot {
        RecordSnapshot {
            id: self.id,
            name: self.name.clone(),
            grade: self.grade,
            hours_worked: self.hours_worked,
            accrued_pay: self.accrued_pay,
            hourly_rate: self.hourly_rate,
            hired_at: self.hired_at,
            history: self.events.clone(),
        }
    }

    /// Record identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current grade.
    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Total hours logged since hire.
    pub fn hours_worked(&self) -> u64 {
        self.hours_worked
    }

    /// Pay accrued since the last disbursement.
    pub fn accrued_pay(&self) -> u64 {
        self.accrued_pay
    }

    /// Current hourly rate.
    pub fn hourly_rate(&self) -> u64 {
        self.hourly_rate
    }

    /// When the record was created.
    pub fn hired_at(&self) -> DateTime<Utc> {
        self.hired_at
    }

    fn push_event(&mut self, action: EventAction) {
        let event = RecordEvent::new(self.events.len(), &self.name, self.grade, action);
        self.events.push(event);
    }
}

impl fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} h. {} currency.",
            self.name, self.hours_worked, self.accrued_pay
        )
    }
}
