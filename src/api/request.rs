//! Request body types for the lifecycle API.
//!
//! JSON shapes for the transition endpoints, converted into domain requests
//! before anything else touches them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{HireRequest, PayFrequency, RehireRequest, TerminateRequest};

/// Body for `POST /employees/hire`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HireBody {
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
    /// Seed vacation balance in hours.
    #[serde(default)]
    pub initial_vacation_hours: Option<Decimal>,
    /// Seed sick-leave balance in hours.
    #[serde(default)]
    pub initial_sick_leave_hours: Option<Decimal>,
}

/// Body for `POST /employees/terminate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminateBody {
    /// The employee to terminate.
    pub employee_id: i32,
    /// The last day of employment.
    pub termination_date: NaiveDate,
    /// When true, PTO balances are paid out and zeroed.
    pub payout_pto: bool,
}

/// Body for `POST /employees/rehire`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RehireBody {
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
    /// Preserve prior PTO balances instead of resetting to defaults.
    pub restore_seniority: bool,
}

impl From<HireBody> for HireRequest {
    fn from(body: HireBody) -> Self {
        HireRequest {
            employee_id: body.employee_id,
            hire_date: body.hire_date,
            department_id: body.department_id,
            shift_id: body.shift_id,
            initial_pay_rate: body.initial_pay_rate,
            pay_frequency: body.pay_frequency,
            initial_vacation_hours: body.initial_vacation_hours,
            initial_sick_leave_hours: body.initial_sick_leave_hours,
        }
    }
}

impl From<TerminateBody> for TerminateRequest {
    fn from(body: TerminateBody) -> Self {
        TerminateRequest {
            employee_id: body.employee_id,
            termination_date: body.termination_date,
            payout_pto: body.payout_pto,
        }
    }
}

impl From<RehireBody> for RehireRequest {
    fn from(body: RehireBody) -> Self {
        RehireRequest {
            employee_id: body.employee_id,
            rehire_date: body.rehire_date,
            department_id: body.department_id,
            shift_id: body.shift_id,
            pay_rate: body.pay_rate,
            pay_frequency: body.pay_frequency,
            restore_seniority: body.restore_seniority,
        }
    }
}
