//! The [`SensorStore`] trait shared by every storage backend.
//!
//! The HTTP layer only ever sees `Arc<dyn SensorStore>`, so the trait is
//! object-safe via [`async_trait`].

use async_trait::async_trait;
use lorapanel_types::{Sensor, SensorData};

use crate::error::DbError;

/// Result of a point lookup by sensor name.
///
/// Lookup failures are reported as `Err(DbError)` by
/// [`SensorStore::find_sensor`], never as [`SensorLookup::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorLookup {
    /// A sensor with the requested name exists.
    Found(Sensor),
    /// No sensor with the requested name exists.
    NotFound,
}

impl SensorLookup {
    /// Whether the lookup found a sensor.
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Operations over the `Sensors` and `SensorData` collections.
#[async_trait]
pub trait SensorStore: Send + Sync {
    /// Register a new sensor.
    ///
    /// Looks the name up first and refuses to write if it is taken.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::SensorAlreadyExists`] if the name is taken, or a
    /// storage error if the lookup or insert fails.
    async fn register_sensor(&self, name: &str) -> Result<Sensor, DbError>;

    /// Look up a sensor by exact name.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lookup itself fails.
    async fn find_sensor(&self, name: &str) -> Result<SensorLookup, DbError>;

    /// Whether a sensor with this exact name is registered.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lookup fails. A failed lookup is
    /// never reported as `Ok(false)`.
    async fn sensor_exists(&self, name: &str) -> Result<bool, DbError> {
        Ok(self.find_sensor(name).await?.is_found())
    }

    /// Record a reading for a registered sensor.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::UnknownSensor`] if no sensor has this name, or a
    /// storage error if the lookup or insert fails.
    async fn record_sensor_data(
        &self,
        name: &str,
        temperature: f64,
        humidity: f64,
    ) -> Result<SensorData, DbError>;

    /// Return every reading recorded for `name`, in storage order.
    ///
    /// An unknown name yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    async fn query_sensor_data(&self, name: &str) -> Result<Vec<SensorData>, DbError>;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    /// Implements only the required methods; every lookup times out.
    struct FailingLookup;

    #[async_trait]
    impl SensorStore for FailingLookup {
        async fn register_sensor(&self, name: &str) -> Result<Sensor, DbError> {
            Err(DbError::SensorAlreadyExists(name.to_owned()))
        }

        async fn find_sensor(&self, _name: &str) -> Result<SensorLookup, DbError> {
            Err(DbError::Timeout {
                operation: "find sensor",
                timeout: Duration::from_secs(5),
            })
        }

        async fn record_sensor_data(
            &self,
            name: &str,
            _temperature: f64,
            _humidity: f64,
        ) -> Result<SensorData, DbError> {
            Err(DbError::UnknownSensor(name.to_owned()))
        }

        async fn query_sensor_data(&self, _name: &str) -> Result<Vec<SensorData>, DbError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn failed_lookup_is_not_reported_as_absent() {
        let result = FailingLookup.sensor_exists("sensor-1").await;
        assert!(matches!(result, Err(DbError::Timeout { .. })));
    }

    #[test]
    fn lookup_found_flag() {
        let sensor = Sensor::new("sensor-1", chrono::Utc::now());
        assert!(SensorLookup::Found(sensor).is_found());
        assert!(!SensorLookup::NotFound.is_found());
    }
}
