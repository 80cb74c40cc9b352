//! REST API endpoint handlers.
//!
//! Each handler has a single exit: it returns either a success body or an
//! [`ApiError`], never both.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/ping` | Liveness probe |
//! | `POST` | `/api/createSensor` | Register a sensor by name |
//! | `POST` | `/api/createSensorData` | Record a temperature/humidity reading |
//! | `POST` | `/api/getAllSensorData` | All readings for a sensor |

use std::sync::Arc;

use axum::extract::{FromRequest, State};
use axum::Json;
use lorapanel_types::SensorData;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Message returned after a sensor is registered.
pub const SENSOR_CREATED: &str = "new sensor created successfully";

/// Message returned after a reading is recorded.
pub const SENSOR_DATA_CREATED: &str = "new sensor data created successfully";

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// JSON body extractor whose rejection is an [`ApiError::MalformedRequest`].
///
/// Wraps [`axum::Json`] so a bad body (invalid JSON, wrong field types,
/// missing fields, wrong content type) becomes a 400 with the usual
/// `{"message": ...}` shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/createSensor`.
#[derive(Debug, Deserialize)]
pub struct CreateSensorRequest {
    /// Name to register.
    pub name: String,
}

/// Request body for `POST /api/createSensorData`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSensorDataRequest {
    /// Temperature reading.
    pub temperature: f64,
    /// Humidity reading.
    pub humidity: f64,
    /// Name of a registered sensor.
    pub sensor_name: String,
}

/// Request body for `POST /api/getAllSensorData`.
#[derive(Debug, Deserialize)]
pub struct GetAllSensorDataRequest {
    /// Sensor whose readings to return.
    pub name: String,
}

/// `{"message": ...}` response body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: &'static str,
}

/// `{"results": [...]}` response body.
#[derive(Debug, Serialize)]
pub struct SensorDataResults {
    /// Every reading for the requested sensor, in storage order.
    pub results: Vec<SensorData>,
}

// ---------------------------------------------------------------------------
// GET /ping
// ---------------------------------------------------------------------------

/// Liveness probe. Never touches the store.
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse { message: "pong" })
}

// ---------------------------------------------------------------------------
// POST /api/createSensor
// ---------------------------------------------------------------------------

/// Register a new sensor.
///
/// Returns 400 if the name is empty or already taken.
pub async fn create_sensor(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateSensorRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if body.name.is_empty() {
        return Err(ApiError::MalformedRequest(
            "field `name` must not be empty".to_owned(),
        ));
    }

    let sensor = state.store.register_sensor(&body.name).await?;
    tracing::info!(sensor = sensor.name, "Sensor created");

    Ok(Json(MessageResponse {
        message: SENSOR_CREATED,
    }))
}

// ---------------------------------------------------------------------------
// POST /api/createSensorData
// ---------------------------------------------------------------------------

/// Record a reading for a registered sensor.
///
/// Returns 400 if the sensor is not registered.
pub async fn create_sensor_data(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateSensorDataRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let reading = state
        .store
        .record_sensor_data(&body.sensor_name, body.temperature, body.humidity)
        .await?;
    tracing::debug!(
        sensor = reading.sensor_name,
        temperature = reading.temperature,
        humidity = reading.humidity,
        "Sensor data created"
    );

    Ok(Json(MessageResponse {
        message: SENSOR_DATA_CREATED,
    }))
}

// ---------------------------------------------------------------------------
// POST /api/getAllSensorData
// ---------------------------------------------------------------------------

/// Return every reading recorded for a sensor.
///
/// An unknown name yields `{"results": []}`.
pub async fn get_all_sensor_data(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<GetAllSensorDataRequest>,
) -> Result<Json<SensorDataResults>, ApiError> {
    let results = state.store.query_sensor_data(&body.name).await?;
    Ok(Json(SensorDataResults { results }))
}
