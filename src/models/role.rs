//! User roles and dashboard access decisions.
//!
//! Role checks live in one place so the routing layer can ask a single
//! question ("may this role enter this area?") instead of scattering
//! string comparisons across pages.

use serde::{Deserialize, Serialize};

/// The role assigned to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrator; gets the admin landing page.
    Admin,
    /// Manager; reviews team data and decides leave requests.
    Manager,
    /// Regular employee; manages own profile, attendance, and leave.
    Employee,
}

/// A role-gated dashboard area of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardArea {
    /// Admin landing and administration pages.
    Admin,
    /// Manager dashboard (team attendance, leave approvals).
    Manager,
    /// Employee dashboard (profile, attendance, leave, salary).
    Employee,
}

impl Role {
    /// Decides whether this role may access the given dashboard area.
    ///
    /// Managers may also use the employee dashboard (they have their own
    /// attendance and leave); employees and admins are confined to their
    /// own areas.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_engine::models::{DashboardArea, Role};
    ///
    /// assert!(Role::Manager.can_access(DashboardArea::Employee));
    /// assert!(!Role::Employee.can_access(DashboardArea::Manager));
    /// assert!(!Role::Admin.can_access(DashboardArea::Manager));
    /// ```
    pub fn can_access(self, area: DashboardArea) -> bool {
        match area {
            DashboardArea::Admin => self == Role::Admin,
            DashboardArea::Manager => self == Role::Manager,
            DashboardArea::Employee => matches!(self, Role::Manager | Role::Employee),
        }
    }

    /// Returns the dashboard path a user of this role lands on after login.
    pub fn home_dashboard(self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Manager => "/manager/dashboard",
            Role::Employee => "/employee/dashboard",
        }
    }
}
