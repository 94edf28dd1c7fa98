//! Hire transition.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{LifecycleError, LifecycleResult};
use crate::models::{DepartmentAssignment, Employee, HireRequest, PayAssignment};

/// Applies a hire to an inactive employee.
///
/// Activates the employee, stamps the hire date, seeds the PTO balances
/// (zero when unspecified), and opens a department assignment plus an
/// initial pay assignment dated on the hire date.
///
/// Fails with [`LifecycleError::AlreadyActive`] when the employee is already
/// employed; the input aggregate is untouched on the error path.
pub fn apply_hire(
    employee: &Employee,
    request: &HireRequest,
    now: DateTime<Utc>,
) -> LifecycleResult<Employee> {
    if employee.is_active {
        return Err(LifecycleError::AlreadyActive {
            employee_id: employee.id,
            message: "hire is only valid for inactive employees".to_string(),
        });
    }

    let mut updated = employee.clone();
    updated.is_active = true;
    updated.hire_date = request.hire_date;
    updated.vacation_hours = request.initial_vacation_hours.unwrap_or(Decimal::ZERO);
    updated.sick_leave_hours = request.initial_sick_leave_hours.unwrap_or(Decimal::ZERO);
    updated.department_history.push(DepartmentAssignment {
        department_id: request.department_id,
        shift_id: request.shift_id,
        start_date: request.hire_date,
        end_date: None,
    });
    updated.pay_history.push(PayAssignment {
        rate_change_date: request.hire_date,
        rate: request.initial_pay_rate,
        pay_frequency: request.pay_frequency,
    });
    updated.modified_date = now;

    Ok(updated)
}
