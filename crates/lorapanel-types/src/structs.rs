//! Core entity structs: registered sensors and their readings.
//!
//! Field names serialize as camelCase (`sensorName`, `creationDate`,
//! `lastUpdate`) so the JSON and document shapes match what clients send
//! and receive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sensor
// ---------------------------------------------------------------------------

/// A named telemetry source, registered once.
///
/// `name` is unique at the application level only: the data layer checks
/// for an existing sensor before inserting, it does not rely on a storage
/// constraint unless one is explicitly enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    /// Unique sensor name.
    pub name: String,
    /// When the sensor was registered.
    pub creation_date: DateTime<Utc>,
    /// Set to `creation_date` at registration. No operation updates it.
    pub last_update: DateTime<Utc>,
}

impl Sensor {
    /// Create a sensor registered at `now`.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            creation_date: now,
            last_update: now,
        }
    }
}

// ---------------------------------------------------------------------------
// SensorData
// ---------------------------------------------------------------------------

/// A single temperature/humidity reading tied to a sensor by name.
///
/// Readings are immutable once written. `sensor_name` references a
/// [`Sensor`] by value; the reference is checked before insert but not
/// enforced by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorData {
    /// Temperature reading.
    pub temperature: f64,
    /// Relative humidity reading.
    pub humidity: f64,
    /// Name of the sensor that produced the reading.
    pub sensor_name: String,
    /// When the reading was recorded by the server.
    pub creation_date: DateTime<Utc>,
}

impl SensorData {
    /// Create a reading for `sensor_name` stamped at `now`.
    pub fn new(
        sensor_name: impl Into<String>,
        temperature: f64,
        humidity: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            temperature,
            humidity,
            sensor_name: sensor_name.into(),
            creation_date: now,
        }
    }
}
