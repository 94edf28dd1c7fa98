//! Derived lifecycle-status view.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayFrequency;

/// Whether an employee is currently employed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Currently employed.
    Active,
    /// Employment has ended.
    Terminated,
}

/// Point-in-time summary reconstructed from an employee's full history.
///
/// Produced by the status aggregator; purely derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleStatus {
    /// The employee the summary describes.
    pub employee_id: i32,
    /// Active or terminated, from the current flag.
    pub employment_status: EmploymentStatus,
    /// Whole days employed; `None` when no department history exists —
    /// absence of data is distinct from zero tenure.
    pub days_employed: Option<i64>,
    /// Department of the open assignment, if one exists.
    pub current_department_id: Option<i32>,
    /// Shift of the open assignment, if one exists.
    pub current_shift_id: Option<i32>,
    /// Start date of the open assignment, if one exists.
    pub assignment_start_date: Option<NaiveDate>,
    /// Rate of the latest pay assignment, if any pay history exists.
    pub current_pay_rate: Option<Decimal>,
    /// Cadence of the latest pay assignment.
    pub current_pay_frequency: Option<PayFrequency>,
    /// Effective date of the latest pay assignment.
    pub pay_rate_effective_date: Option<NaiveDate>,
    /// Vacation PTO balance in hours.
    pub vacation_hours: Decimal,
    /// Sick-leave PTO balance in hours.
    pub sick_leave_hours: Decimal,
    /// Number of past terminations (closed assignments), regardless of the
    /// current active state.
    pub rehire_count: u32,
    /// True only for a terminated employee with at least one past
    /// termination on record.
    pub eligible_for_rehire: bool,
}
