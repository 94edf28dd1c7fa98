//! HTTP request handlers for the lifecycle API.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::LifecycleError;
use crate::models::{HireCommand, RehireCommand, TerminateCommand};

use super::request::{HireBody, RehireBody, TerminateBody};
use super::response::{ApiError, ApiErrorResponse, TransitionResponse};
use super::state::AppState;

/// Creates the API router with all lifecycle endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees/hire", post(hire_handler))
        .route("/employees/terminate", post(terminate_handler))
        .route("/employees/rehire", post(rehire_handler))
        .route("/employees/:employee_id/status", get(status_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to the error body the client sees.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::missing_field(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn error_response(correlation_id: Uuid, error: LifecycleError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "lifecycle request failed"
    );
    ApiErrorResponse::from(error).into_response()
}

/// Handler for `POST /employees/hire`.
async fn hire_handler(
    State(state): State<AppState>,
    payload: Result<Json<HireBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = body.employee_id,
        "processing hire request"
    );

    let command = HireCommand {
        request: Some(body.into()),
        received_at: Utc::now(),
    };

    match state.service().hire(command).await {
        Ok(employee_id) => {
            (StatusCode::OK, Json(TransitionResponse { employee_id })).into_response()
        }
        Err(error) => error_response(correlation_id, error),
    }
}

/// Handler for `POST /employees/terminate`.
async fn terminate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TerminateBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = body.employee_id,
        "processing terminate request"
    );

    let command = TerminateCommand {
        request: Some(body.into()),
        received_at: Utc::now(),
    };

    match state.service().terminate(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(correlation_id, error),
    }
}

/// Handler for `POST /employees/rehire`.
async fn rehire_handler(
    State(state): State<AppState>,
    payload: Result<Json<RehireBody>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = body.employee_id,
        "processing rehire request"
    );

    let command = RehireCommand {
        request: Some(body.into()),
        received_at: Utc::now(),
    };

    match state.service().rehire(command).await {
        Ok(employee_id) => {
            (StatusCode::OK, Json(TransitionResponse { employee_id })).into_response()
        }
        Err(error) => error_response(correlation_id, error),
    }
}

/// Handler for `GET /employees/{id}/status`.
async fn status_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i32>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.service().read_status(employee_id, Utc::now()).await {
        Ok(Some(status)) => (StatusCode::OK, Json(status)).into_response(),
        Ok(None) => error_response(correlation_id, LifecycleError::NotFound { employee_id }),
        Err(error) => error_response(correlation_id, error),
    }
}
