//! Input validation and rate lookup.
//!
//! Each `validate_*` function accepts a dynamic [`serde_json::Value`] and
//! distinguishes a wrong type (`ErrorKind::Type`) from a bad value
//! (`ErrorKind::Value`). The `check_*` counterparts take already-typed input
//! and can only fail with a value error.

mod amount;
mod grade;
mod name;

pub use amount::{check_bonus, check_hours, validate_bonus, validate_hours};
pub use grade::{rate_for_grade, validate_grade};
pub use name::{check_name, validate_name};
