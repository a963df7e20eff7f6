//! Employee Record Engine
//!
//! This crate models a single employee record: identity, job grade, logged
//! hours, accrued pay, and a chronological event log. Pay accrues from a
//! grade-to-rate table, and promotions walk the Junior, Middle, Senior
//! ladder.

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
