//! Error types for the data layer.
//!
//! [`DbError`] separates the two expected outcomes of a gated write
//! (name already taken, sensor unknown) from genuine storage failures so
//! callers never confuse one with the other.

use std::time::Duration;

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A sensor with this name is already registered.
    #[error("name for sensor already taken: {0}")]
    SensorAlreadyExists(String),

    /// No sensor with this name is registered.
    #[error("sensor name does not exist: {0}")]
    UnknownSensor(String),

    /// A `MongoDB` driver operation failed.
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// An operation did not finish within its deadline.
    #[error("{operation} timed out after {}ms", timeout.as_millis())]
    Timeout {
        /// The operation that timed out.
        operation: &'static str,
        /// The deadline that was exceeded.
        timeout: Duration,
    },

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DbError {
    /// Whether this error is a storage failure rather than a domain outcome.
    ///
    /// [`DbError::SensorAlreadyExists`] and [`DbError::UnknownSensor`] are
    /// answers about the data; everything else means the store could not
    /// answer.
    pub const fn is_storage(&self) -> bool {
        !matches!(self, Self::SensorAlreadyExists(_) | Self::UnknownSensor(_))
    }
}
