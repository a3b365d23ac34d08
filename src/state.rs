//! Shared application state for all routes.

use crate::service::FrameworkService;

#[derive(Clone)]
pub struct AppState {
    pub service: FrameworkService,
}

impl AppState {
    pub fn new(service: FrameworkService) -> Self {
        Self { service }
    }
}
