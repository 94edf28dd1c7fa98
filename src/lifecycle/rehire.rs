//! Rehire transition.

use chrono::{DateTime, Duration, Utc};

use crate::config::LifecyclePolicy;
use crate::error::{LifecycleError, LifecycleResult};
use crate::models::{DepartmentAssignment, Employee, PayAssignment, RehireRequest};

/// Applies a rehire to a previously terminated employee.
///
/// Guards:
/// - the employee must be inactive; an active employee should move via a
///   department transfer, not a rehire;
/// - the rehire date must be at least the policy cooldown after the most
///   recent termination. The boundary day itself is allowed. An employee
///   with no prior termination on record skips the cooldown entirely.
///
/// On success the employee is reactivated with `hire_date` set to the rehire
/// date, a new open department assignment and pay assignment are appended,
/// and PTO balances are preserved when the request restores seniority or
/// reset to the policy's new-hire defaults when it does not.
pub fn apply_rehire(
    employee: &Employee,
    request: &RehireRequest,
    policy: &LifecyclePolicy,
    now: DateTime<Utc>,
) -> LifecycleResult<Employee> {
    if employee.is_active {
        return Err(LifecycleError::AlreadyActive {
            employee_id: employee.id,
            message: "use a department transfer instead of rehire".to_string(),
        });
    }

    if let Some(last_termination) = employee.last_termination_date() {
        let eligible_on = last_termination + Duration::days(policy.rehire_cooldown_days);
        if request.rehire_date < eligible_on {
            return Err(LifecycleError::RehireTooSoon {
                employee_id: employee.id,
                eligible_on,
            });
        }
    }

    let mut updated = employee.clone();
    updated.is_active = true;
    updated.hire_date = request.rehire_date;
    if !request.restore_seniority {
        updated.vacation_hours = policy.new_hire_vacation_hours;
        updated.sick_leave_hours = policy.new_hire_sick_leave_hours;
    }
    updated.department_history.push(DepartmentAssignment {
        department_id: request.department_id,
        shift_id: request.shift_id,
        start_date: request.rehire_date,
        end_date: None,
    });
    updated.pay_history.push(PayAssignment {
        rate_change_date: request.rehire_date,
        rate: request.pay_rate,
        pay_frequency: request.pay_frequency,
    });
    updated.modified_date = now;

    Ok(updated)
}
