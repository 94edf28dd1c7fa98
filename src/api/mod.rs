//! HTTP API for the employee lifecycle engine.
//!
//! A thin axum layer: request bodies convert into domain requests, handlers
//! stamp the audit timestamp and forward to the service, and lifecycle
//! errors map to JSON error responses at this boundary only.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HireBody, RehireBody, TerminateBody};
pub use response::{ApiError, ApiErrorResponse, TransitionResponse};
pub use state::AppState;
