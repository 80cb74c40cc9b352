//! Shared application state for the API server.

use std::sync::Arc;

use lorapanel_db::SensorStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// store is constructed by the caller, so tests can hand in an
/// [`InMemoryStore`](lorapanel_db::InMemoryStore) or any other double.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend for sensors and readings.
    pub store: Arc<dyn SensorStore>,
}

impl AppState {
    /// Create application state around a storage backend.
    pub const fn new(store: Arc<dyn SensorStore>) -> Self {
        Self { store }
    }
}
