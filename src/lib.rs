//! HR Insights Engine
//!
//! This crate provides the computation core of an HR system: leave-balance
//! reconciliation, attendance aggregation, salary-delta projection, and
//! payday/date-window arithmetic over row snapshots supplied by the caller.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
