//! Core data models for the Employee Record Engine.
//!
//! This module contains the grade ladder, the event log entries, and the
//! employee record itself.

mod employee;
mod event;
mod grade;

pub use employee::{EmployeeRecord, RecordSnapshot, SENIOR_RAISE_STEP};
pub use event::{EventAction, RecordEvent};
pub use grade::Grade;
