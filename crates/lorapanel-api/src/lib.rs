//! Ingestion API server for LoRaPanel sensors.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Liveness probe** (`GET /ping`), independent of the database
//! - **Sensor registration** (`POST /api/createSensor`)
//! - **Reading submission** (`POST /api/createSensorData`)
//! - **Reading query** (`POST /api/getAllSensorData`)
//!
//! # Architecture
//!
//! Handlers parse the JSON body, delegate to the injected
//! [`SensorStore`](lorapanel_db::SensorStore) held in [`AppState`], and map
//! the outcome to exactly one JSON response. A malformed body is a 400,
//! never a crash.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
