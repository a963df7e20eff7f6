//! Configuration types for grade rates.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Grade;

/// Hourly rate per grade.
///
/// The default table is Junior=10, Middle=15, Senior=20.
///
/// # Example
///
/// ```
/// use employee_record::config::RateTable;
/// use employee_record::models::Grade;
///
/// let table = RateTable::default();
/// assert_eq!(table.rate_for(Grade::Middle), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Hourly rate for Junior.
    pub junior: u64,
    /// Hourly rate for Middle.
    pub middle: u64,
    /// Hourly rate for Senior.
    pub senior: u64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            junior: Grade::Junior.hourly_rate(),
            middle: Grade::Middle.hourly_rate(),
            senior: Grade::Senior.hourly_rate(),
        }
    }
}

impl RateTable {
    /// Returns the hourly rate for a grade.
    pub fn rate_for(&self, grade: Grade) -> u64 {
        match grade {
            Grade::Junior => self.junior,
            Grade::Middle => self.middle,
            Grade::Senior => self.senior,
        }
    }

    /// Checks that every rate is positive and rates never drop with grade.
    pub fn validate(&self) -> EngineResult<()> {
        for grade in Grade::ALL {
            if self.rate_for(grade) == 0 {
                return Err(EngineError::InvalidConfig {
                    message: format!("{} rate must be positive", grade),
                });
            }
        }

        for pair in Grade::ALL.windows(2) {
            let (lower, higher) = (pair[0], pair[1]);
            if self.rate_for(higher) < self.rate_for(lower) {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "{} rate {} is below {} rate {}",
                        higher,
                        self.rate_for(higher),
                        lower,
                        self.rate_for(lower)
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Structure of a `rates.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesFile {
    /// Optional human-readable name of the rate schedule.
    #[serde(default)]
    pub name: Option<String>,
    /// Rates keyed by grade.
    pub grades: RateTable,
}
