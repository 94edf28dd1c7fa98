//! Lifecycle status aggregation.

use chrono::{DateTime, Utc};

use crate::models::{Employee, EmploymentStatus, LifecycleStatus};

/// Reconstructs a point-in-time status summary from an employee's history.
///
/// Read-only: nothing on the aggregate is mutated. Tenure is measured in
/// whole days — up to `now` for an active employee, up to the most recent
/// termination otherwise — and reported as `None` when no department history
/// exists, since absence of data is distinct from zero tenure.
pub fn build_status(employee: &Employee, now: DateTime<Utc>) -> LifecycleStatus {
    let employment_status = if employee.is_active {
        EmploymentStatus::Active
    } else {
        EmploymentStatus::Terminated
    };

    let days_employed = if employee.department_history.is_empty() {
        None
    } else if employee.is_active {
        Some((now.date_naive() - employee.hire_date).num_days())
    } else {
        employee
            .last_termination_date()
            .map(|end| (end - employee.hire_date).num_days())
    };

    let open = employee.open_assignment();
    let pay = employee.current_pay();
    let rehire_count = employee.closed_assignment_count() as u32;

    LifecycleStatus {
        employee_id: employee.id,
        employment_status,
        days_employed,
        current_department_id: open.map(|a| a.department_id),
        current_shift_id: open.map(|a| a.shift_id),
        assignment_start_date: open.map(|a| a.start_date),
        current_pay_rate: pay.map(|p| p.rate),
        current_pay_frequency: pay.map(|p| p.pay_frequency),
        pay_rate_effective_date: pay.map(|p| p.rate_change_date),
        vacation_hours: employee.vacation_hours,
        sick_leave_hours: employee.sick_leave_hours,
        rehire_count,
        eligible_for_rehire: !employee.is_active && rehire_count > 0,
    }
}
