//! Configuration types for leave allowances.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::LeaveType;

/// Annual day allowances per leave category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LeaveAllowances {
    /// Vacation days per year.
    pub vacation: u32,
    /// Sick days per year.
    pub sick: u32,
    /// Personal days per year.
    pub personal: u32,
    /// Emergency days per year.
    pub emergency: u32,
    /// Maternity leave days per year.
    pub maternity: u32,
    /// Paternity leave days per year.
    pub paternity: u32,
}

impl LeaveAllowances {
    /// Returns the annual allowance for one leave category.
    pub fn for_type(&self, leave_type: LeaveType) -> u32 {
        match leave_type {
            LeaveType::Vacation => self.vacation,
            LeaveType::Sick => self.sick,
            LeaveType::Personal => self.personal,
            LeaveType::Emergency => self.emergency,
            LeaveType::Maternity => self.maternity,
            LeaveType::Paternity => self.paternity,
        }
    }
}

impl Default for LeaveAllowances {
    fn default() -> Self {
        Self {
            vacation: 25,
            sick: 15,
            personal: 5,
            emergency: 3,
            maternity: 90,
            paternity: 14,
        }
    }
}

/// The complete leave allowance configuration loaded from YAML.
///
/// The aggregate annual allowance drives the headline remaining-balance
/// figure; the per-category table drives the per-category breakdown. The
/// two are independent knobs and are not required to reconcile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LeaveAllowanceConfig {
    /// Aggregate annual leave allowance in days.
    pub annual_allowance: u32,
    /// Allowances per leave category.
    pub per_type: LeaveAllowances,
}

impl Default for LeaveAllowanceConfig {
    fn default() -> Self {
        Self {
            annual_allowance: 25,
            per_type: LeaveAllowances::default(),
        }
    }
}
