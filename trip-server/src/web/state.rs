//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::TripPlanner;

/// Shared application state.
///
/// Read-only after startup; every request sees the same planner.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Trip planner (upstream client + display zone)
    pub planner: Arc<TripPlanner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: TripPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}
