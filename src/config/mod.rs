//! Configuration loading and management for the HR Insights Engine.
//!
//! This module provides functionality to load leave allowance configuration
//! from YAML files, covering the aggregate annual allowance and the
//! per-category allowance table.
//!
//! # Example
//!
//! ```no_run
//! use hr_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Annual allowance: {}", config.config().annual_allowance);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LeaveAllowanceConfig, LeaveAllowances};
