//! Axum router construction for the ingestion API.
//!
//! Assembles all routes into a single [`Router`] with request tracing,
//! panic recovery and CORS middleware.

use std::any::Any as PanicPayload;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the ingestion API.
///
/// The router includes:
/// - `GET /ping` -- liveness probe
/// - `POST /api/createSensor` -- register a sensor
/// - `POST /api/createSensorData` -- record a reading
/// - `POST /api/getAllSensorData` -- query readings for a sensor
///
/// CORS is configured to allow any origin so a browser dashboard on
/// another host can call the API.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness
        .route("/ping", get(handlers::ping))
        // REST API
        .route("/api/createSensor", post(handlers::create_sensor))
        .route("/api/createSensorData", post(handlers::create_sensor_data))
        .route("/api/getAllSensorData", post(handlers::get_all_sensor_data))
        .layer(cors)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Render a handler panic as a `{"message"}` 500 like any other error.
fn panic_response(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => payload
            .downcast_ref::<&str>()
            .map_or_else(|| "handler panicked".to_owned(), |s| (*s).to_owned()),
    };
    ApiError::Internal(detail).into_response()
}
