//! JSON command boundary for the Employee Record Engine.
//!
//! Hosts that receive operations as JSON (a message queue, a script, a
//! future HTTP layer) go through this module. It runs the dynamic
//! validators so that a payload of the wrong type surfaces as a type error.

mod handlers;
mod request;
mod response;

pub use handlers::{execute, execute_json, hire};
pub use request::{HireRequest, RecordCommand};
pub use response::{CommandError, CommandOutcome};
