//! Terminate transition.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{LifecycleError, LifecycleResult};
use crate::models::{Employee, TerminateRequest};

/// Applies a termination to an active employee.
///
/// Deactivates the employee and closes the open department assignment at the
/// termination date. An active employee with no open assignment is a valid
/// edge case: the close step is a no-op, not an error. When the request asks
/// for a PTO payout, both balances are zeroed; otherwise they are left
/// unchanged.
///
/// Fails with [`LifecycleError::AlreadyTerminated`] when the employee is not
/// active; the input aggregate is untouched on the error path.
pub fn apply_termination(
    employee: &Employee,
    request: &TerminateRequest,
    now: DateTime<Utc>,
) -> LifecycleResult<Employee> {
    if !employee.is_active {
        return Err(LifecycleError::AlreadyTerminated {
            employee_id: employee.id,
        });
    }

    let mut updated = employee.clone();
    updated.is_active = false;
    if let Some(open) = updated
        .department_history
        .iter_mut()
        .find(|a| a.end_date.is_none())
    {
        open.end_date = Some(request.termination_date);
    }
    if request.payout_pto {
        updated.vacation_hours = Decimal::ZERO;
        updated.sick_leave_hours = Decimal::ZERO;
    }
    updated.modified_date = now;

    Ok(updated)
}
