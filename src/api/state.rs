//! Application state for the lifecycle API.

use std::sync::Arc;

use crate::service::LifecycleService;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    service: Arc<LifecycleService>,
}

impl AppState {
    /// Creates a new application state over the given service.
    pub fn new(service: Arc<LifecycleService>) -> Self {
        Self { service }
    }

    /// Returns a reference to the lifecycle service.
    pub fn service(&self) -> &LifecycleService {
        &self.service
    }
}
