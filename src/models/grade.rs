//! Job grade model.
//!
//! Grades form a strictly linear promotion ladder: Junior, then Middle,
//! then Senior. Each grade carries a standard hourly rate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// An employee's job grade.
///
/// Grades are ordered `Junior < Middle < Senior` for promotion purposes.
///
/// # Example
///
/// ```
/// use employee_record::models::Grade;
///
/// let grade: Grade = "middle".parse().unwrap();
/// assert_eq!(grade, Grade::Middle);
/// assert_eq!(grade.to_string(), "Middle");
/// assert_eq!(grade.next(), Some(Grade::Senior));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// Entry grade.
    Junior,
    /// Intermediate grade.
    Middle,
    /// Top grade. Further promotions raise the rate instead.
    Senior,
}

impl Grade {
    /// All grades in promotion order.
    pub const ALL: [Grade; 3] = [Grade::Junior, Grade::Middle, Grade::Senior];

    /// The canonical, capitalised name of the grade.
    pub const fn as_str(self) -> &'static str {
        match self {
            Grade::Junior => "Junior",
            Grade::Middle => "Middle",
            Grade::Senior => "Senior",
        }
    }

    /// The standard hourly rate for this grade.
    pub const fn hourly_rate(self) -> u64 {
        match self {
            Grade::Junior => 10,
            Grade::Middle => 15,
            Grade::Senior => 20,
        }
    }

    /// The grade a promotion moves to, or `None` at the top of the ladder.
    pub const fn next(self) -> Option<Grade> {
        match self {
            Grade::Junior => Some(Grade::Middle),
            Grade::Middle => Some(Grade::Senior),
            Grade::Senior => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = EngineError;

    /// Case-insensitive match against the canonical grade names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|grade| grade.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::invalid_value("grade", format!("unknown grade '{}'", s)))
    }
}
