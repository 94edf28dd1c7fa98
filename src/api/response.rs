//! Response types for the lifecycle API.
//!
//! Defines the JSON error body and the mapping from lifecycle errors to
//! HTTP status codes. Guard violations carry the specific rule violated,
//! including relevant dates; validation failures carry per-field reasons.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::LifecycleError;
use crate::validation::FieldError;

/// Success body for hire and rehire transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionResponse {
    /// The employee the transition was applied to.
    pub employee_id: i32,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Per-field validation reasons, when the error is a validation failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            field_errors: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
            field_errors: None,
        }
    }

    /// Creates a validation error carrying every field reason.
    pub fn validation_failed(errors: Vec<FieldError>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: format!("validation failed for {} field(s)", errors.len()),
            details: None,
            field_errors: Some(errors),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing field error response.
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new("MISSING_FIELD", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LifecycleError> for ApiErrorResponse {
    fn from(error: LifecycleError) -> Self {
        match error {
            LifecycleError::InvalidArgument { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_ARGUMENT", message),
            },
            LifecycleError::ValidationFailed { errors } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_failed(errors),
            },
            LifecycleError::NotFound { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    format!("employee {} not found", employee_id),
                    "The referenced employee does not exist",
                ),
            },
            LifecycleError::AlreadyActive {
                employee_id,
                message,
            } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "ALREADY_ACTIVE",
                    format!("employee {} is already active", employee_id),
                    message,
                ),
            },
            LifecycleError::AlreadyTerminated { employee_id } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new(
                    "ALREADY_TERMINATED",
                    format!("employee {} is already terminated", employee_id),
                ),
            },
            LifecycleError::RehireTooSoon {
                employee_id,
                eligible_on,
            } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "REHIRE_TOO_SOON",
                    format!(
                        "employee {} cannot be rehired before {}",
                        employee_id, eligible_on
                    ),
                    format!("Earliest eligible rehire date is {}", eligible_on),
                ),
            },
            LifecycleError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Policy configuration error",
                    format!("policy file not found: {}", path),
                ),
            },
            LifecycleError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Policy configuration error",
                    format!("failed to parse {}: {}", path, message),
                ),
            },
            LifecycleError::StorageError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Storage failure", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization_skips_empty_optionals() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(!json.contains("details"));
        assert!(!json.contains("field_errors"));
    }

    #[test]
    fn test_validation_failed_carries_field_errors() {
        let error = ApiError::validation_failed(vec![FieldError::new(
            "pay_rate",
            "must be greater than zero",
        )]);
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert_eq!(json["field_errors"][0]["field"], "pay_rate");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = LifecycleError::NotFound { employee_id: 42 }.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "EMPLOYEE_NOT_FOUND");
        assert!(response.error.message.contains("42"));
    }

    #[test]
    fn test_guard_violations_map_to_409() {
        let already_active: ApiErrorResponse = LifecycleError::AlreadyActive {
            employee_id: 1,
            message: "hire is only valid for inactive employees".to_string(),
        }
        .into();
        assert_eq!(already_active.status, StatusCode::CONFLICT);
        assert_eq!(already_active.error.code, "ALREADY_ACTIVE");

        let too_soon: ApiErrorResponse = LifecycleError::RehireTooSoon {
            employee_id: 1,
            eligible_on: NaiveDate::from_ymd_opt(2025, 1, 29).unwrap(),
        }
        .into();
        assert_eq!(too_soon.status, StatusCode::CONFLICT);
        assert_eq!(too_soon.error.code, "REHIRE_TOO_SOON");
        assert!(too_soon.error.details.unwrap().contains("2025-01-29"));
    }
}
