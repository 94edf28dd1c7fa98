//! Employee aggregate and derived history lookups.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DepartmentAssignment, PayAssignment};

/// The aggregate root for lifecycle transitions.
///
/// The employee exclusively owns both history collections. Transition
/// functions receive the aggregate, mutate a private copy, and hand it back
/// for a single replace write, so no partial state is ever persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, immutable once created.
    pub id: i32,
    /// True while employed, false while terminated.
    pub is_active: bool,
    /// Date of the most recent hire or rehire event.
    pub hire_date: NaiveDate,
    /// Vacation PTO balance in hours.
    pub vacation_hours: Decimal,
    /// Sick-leave PTO balance in hours.
    pub sick_leave_hours: Decimal,
    /// Department/shift tenures, one per hire-to-termination span.
    #[serde(default)]
    pub department_history: Vec<DepartmentAssignment>,
    /// Pay-rate changes, append-only.
    #[serde(default)]
    pub pay_history: Vec<PayAssignment>,
    /// Audit stamp of the last mutation.
    pub modified_date: DateTime<Utc>,
}

impl Employee {
    /// Returns the currently open department assignment, if any.
    pub fn open_assignment(&self) -> Option<&DepartmentAssignment> {
        self.department_history.iter().find(|a| a.is_open())
    }

    /// The latest end date across closed assignments — the most recent
    /// termination. `None` when the employee was never terminated.
    pub fn last_termination_date(&self) -> Option<NaiveDate> {
        self.department_history
            .iter()
            .filter_map(|a| a.end_date)
            .max()
    }

    /// Number of closed assignments, one per past termination.
    pub fn closed_assignment_count(&self) -> usize {
        self.department_history
            .iter()
            .filter(|a| !a.is_open())
            .count()
    }

    /// The pay assignment with the latest change date, if any.
    pub fn current_pay(&self) -> Option<&PayAssignment> {
        self.pay_history.iter().max_by_key(|p| p.rate_change_date)
    }
}
