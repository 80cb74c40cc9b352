//! Shared type definitions for the LoRaPanel telemetry API.
//!
//! This crate is the single source of truth for the two entities the API
//! persists. Both the data layer and the HTTP layer depend on it.
//!
//! # Modules
//!
//! - [`structs`] -- `Sensor` and `SensorData` records

pub mod structs;

// Re-export all public types at crate root for convenience.
pub use structs::{Sensor, SensorData};
