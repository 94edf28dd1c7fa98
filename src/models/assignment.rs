//! Department and pay history records.
//!
//! Both histories are append-only lists of immutable intervals; the "current"
//! value is always derived (the single open assignment, or the pay record
//! with the latest change date) rather than held in a mutable field.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cadence at which a pay rate is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Paid once per month.
    Monthly,
    /// Paid every two weeks.
    Biweekly,
}

/// One department/shift tenure in an employee's history.
///
/// A record opens on hire or rehire with no end date and is closed on
/// termination. Records are never deleted, and an employee holds at most one
/// open assignment at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentAssignment {
    /// The department the employee is assigned to.
    pub department_id: i32,
    /// The shift worked within that department.
    pub shift_id: i32,
    /// First day of the assignment.
    pub start_date: NaiveDate,
    /// Last day of the assignment; `None` while the assignment is current.
    pub end_date: Option<NaiveDate>,
}

impl DepartmentAssignment {
    /// Returns true while the assignment has no end date.
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

/// One pay-rate change in an employee's history.
///
/// Rate changes are append-only and immutable once created; the current rate
/// is the record with the maximum change date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayAssignment {
    /// The day the rate took effect.
    pub rate_change_date: NaiveDate,
    /// The pay rate from that day on.
    pub rate: Decimal,
    /// How often the rate is paid out.
    pub pay_frequency: PayFrequency,
}
