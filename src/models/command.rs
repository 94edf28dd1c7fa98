//! Transition request and command models.
//!
//! Requests carry the operation-specific fields a caller supplies. Commands
//! wrap a request with the audit timestamp stamped at the boundary, so the
//! rule engine never reads the clock itself.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayFrequency;

/// Request to hire an inactive employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireRequest {
    /// The employee to hire.
    pub employee_id: i32,
    /// The day employment starts.
    pub hire_date: NaiveDate,
    /// Department of the opening assignment.
    pub department_id: i32,
    /// Shift of the opening assignment.
    pub shift_id: i32,
    /// Starting pay rate.
    pub initial_pay_rate: Decimal,
    /// Cadence of the starting pay rate.
    pub pay_frequency: PayFrequency,
    /// Seed vacation balance in hours; defaults to zero.
    #[serde(default)]
    pub initial_vacation_hours: Option<Decimal>,
    /// Seed sick-leave balance in hours; defaults to zero.
    #[serde(default)]
    pub initial_sick_leave_hours: Option<Decimal>,
}

/// Request to terminate an active employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminateRequest {
    /// The employee to terminate.
    pub employee_id: i32,
    /// The last day of employment; closes the open department assignment.
    pub termination_date: NaiveDate,
    /// When true, both PTO balances are zeroed (paid out on exit).
    pub payout_pto: bool,
}

/// Request to rehire a previously terminated employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RehireRequest {
    /// The employee to rehire.
    pub employee_id: i32,
    /// The day employment resumes.
    pub rehire_date: NaiveDate,
    /// Department of the new assignment.
    pub department_id: i32,
    /// Shift of the new assignment.
    pub shift_id: i32,
    /// Pay rate on return.
    pub pay_rate: Decimal,
    /// Cadence of the pay rate on return.
    pub pay_frequency: PayFrequency,
    /// When true, prior PTO balances are preserved; when false they reset to
    /// the new-hire defaults.
    pub restore_seniority: bool,
}

/// Command envelope for a hire transition.
#[derive(Debug, Clone)]
pub struct HireCommand {
    /// The inner request; an absent body is a caller bug.
    pub request: Option<HireRequest>,
    /// Audit timestamp stamped by the caller at the boundary.
    pub received_at: DateTime<Utc>,
}

/// Command envelope for a terminate transition.
#[derive(Debug, Clone)]
pub struct TerminateCommand {
    /// The inner request; an absent body is a caller bug.
    pub request: Option<TerminateRequest>,
    /// Audit timestamp stamped by the caller at the boundary.
    pub received_at: DateTime<Utc>,
}

/// Command envelope for a rehire transition.
#[derive(Debug, Clone)]
pub struct RehireCommand {
    /// The inner request; an absent body is a caller bug.
    pub request: Option<RehireRequest>,
    /// Audit timestamp stamped by the caller at the boundary.
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_hire_request_with_optional_pto() {
        let json = r#"{
            "employee_id": 290,
            "hire_date": "2020-01-10",
            "department_id": 3,
            "shift_id": 1,
            "initial_pay_rate": "14.25",
            "pay_frequency": "biweekly",
            "initial_vacation_hours": "120"
        }"#;

        let request: HireRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, 290);
        assert_eq!(request.initial_pay_rate, Decimal::new(1425, 2));
        assert_eq!(request.initial_vacation_hours, Some(Decimal::new(120, 0)));
        assert!(request.initial_sick_leave_hours.is_none());
    }

    #[test]
    fn test_deserialize_terminate_request() {
        let json = r#"{
            "employee_id": 290,
            "termination_date": "2024-10-31",
            "payout_pto": true
        }"#;

        let request: TerminateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.termination_date,
            NaiveDate::from_ymd_opt(2024, 10, 31).unwrap()
        );
        assert!(request.payout_pto);
    }

    #[test]
    fn test_deserialize_rehire_request() {
        let json = r#"{
            "employee_id": 290,
            "rehire_date": "2025-01-29",
            "department_id": 5,
            "shift_id": 2,
            "pay_rate": "16.00",
            "pay_frequency": "monthly",
            "restore_seniority": false
        }"#;

        let request: RehireRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.pay_frequency, PayFrequency::Monthly);
        assert!(!request.restore_seniority);
    }
}
