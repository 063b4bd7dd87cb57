//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::CategoryService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<dyn CategoryService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(category_service: Arc<dyn CategoryService>) -> Self {
        Self { category_service }
    }
}
