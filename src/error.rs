//! Error types for the employee lifecycle engine.
//!
//! Business-rule outcomes are modelled as typed error values using the
//! `thiserror` crate, so callers handle each outcome explicitly instead of
//! catching exception-style control flow.

use chrono::NaiveDate;
use thiserror::Error;

use crate::validation::FieldError;

/// The main error type for the lifecycle engine.
///
/// Transition handlers propagate rule-engine errors unchanged; the API layer
/// maps them to status codes at the boundary only.
///
/// # Example
///
/// ```
/// use lifecycle_engine::error::LifecycleError;
///
/// let error = LifecycleError::NotFound { employee_id: 42 };
/// assert_eq!(error.to_string(), "employee 42 not found");
/// ```
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// A command or its inner request model was absent — a caller bug.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was missing or malformed.
        message: String,
    },

    /// Field-level rules rejected the request before any I/O.
    #[error("validation failed: {}", .errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    ValidationFailed {
        /// The per-field reasons, surfaced verbatim.
        errors: Vec<FieldError>,
    },

    /// The referenced employee does not exist.
    #[error("employee {employee_id} not found")]
    NotFound {
        /// The id that was looked up.
        employee_id: i32,
    },

    /// The transition requires an inactive employee.
    #[error("employee {employee_id} is already active: {message}")]
    AlreadyActive {
        /// The employee the transition targeted.
        employee_id: i32,
        /// Which rule the caller should use instead.
        message: String,
    },

    /// A termination was requested for an employee who is not active.
    #[error("employee {employee_id} is already terminated")]
    AlreadyTerminated {
        /// The employee the termination targeted.
        employee_id: i32,
    },

    /// A rehire was requested before the cooldown after termination elapsed.
    #[error("employee {employee_id} cannot be rehired before {eligible_on}")]
    RehireTooSoon {
        /// The employee the rehire targeted.
        employee_id: i32,
        /// The earliest date a rehire will be accepted.
        eligible_on: NaiveDate,
    },

    /// Policy file was not found at the specified path.
    #[error("policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The employee store failed to read or write.
    #[error("storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return [`LifecycleError`].
pub type LifecycleResult<T> = Result<T, LifecycleError>;
