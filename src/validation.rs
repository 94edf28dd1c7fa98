//! Field-level validation for lifecycle requests.
//!
//! Validation runs before any persistence I/O. Each request type reports its
//! own field errors; a non-empty list surfaces verbatim as a
//! `ValidationFailed` error so callers see per-field reasons rather than a
//! generic message.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{HireRequest, RehireRequest, TerminateRequest};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The offending field, in request naming.
    pub field: String,
    /// Why the field was rejected.
    pub message: String,
}

impl FieldError {
    /// Creates a field error for the given field and reason.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Field-level validation contract for request models.
///
/// An empty list means the request is valid.
pub trait Validate {
    /// Checks every field rule and returns the failures found.
    fn validate(&self) -> Vec<FieldError>;
}

fn check_positive_id(errors: &mut Vec<FieldError>, field: &str, value: i32) {
    if value <= 0 {
        errors.push(FieldError::new(field, "must be a positive identifier"));
    }
}

fn check_positive_rate(errors: &mut Vec<FieldError>, field: &str, value: Decimal) {
    if value <= Decimal::ZERO {
        errors.push(FieldError::new(field, "must be greater than zero"));
    }
}

fn check_non_negative_hours(errors: &mut Vec<FieldError>, field: &str, value: Option<Decimal>) {
    if let Some(hours) = value {
        if hours < Decimal::ZERO {
            errors.push(FieldError::new(field, "cannot be negative"));
        }
    }
}

impl Validate for HireRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_positive_id(&mut errors, "employee_id", self.employee_id);
        check_positive_id(&mut errors, "department_id", self.department_id);
        check_positive_id(&mut errors, "shift_id", self.shift_id);
        check_positive_rate(&mut errors, "initial_pay_rate", self.initial_pay_rate);
        check_non_negative_hours(
            &mut errors,
            "initial_vacation_hours",
            self.initial_vacation_hours,
        );
        check_non_negative_hours(
            &mut errors,
            "initial_sick_leave_hours",
            self.initial_sick_leave_hours,
        );
        errors
    }
}

impl Validate for TerminateRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_positive_id(&mut errors, "employee_id", self.employee_id);
        errors
    }
}

impl Validate for RehireRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_positive_id(&mut errors, "employee_id", self.employee_id);
        check_positive_id(&mut errors, "department_id", self.department_id);
        check_positive_id(&mut errors, "shift_id", self.shift_id);
        check_positive_rate(&mut errors, "pay_rate", self.pay_rate);
        errors
    }
}
