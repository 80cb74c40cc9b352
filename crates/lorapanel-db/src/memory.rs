//! Process-local [`SensorStore`] backed by in-memory vectors.
//!
//! Used as the test double for the HTTP layer and for running the API
//! without a database. Unlike [`MongoStore`](crate::MongoStore), the
//! check-then-insert for a registration happens under a single write lock,
//! so duplicate names are impossible even under concurrency.

use async_trait::async_trait;
use chrono::Utc;
use lorapanel_types::{Sensor, SensorData};
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::store::{SensorLookup, SensorStore};

/// In-memory sensor and reading storage.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    sensors: RwLock<Vec<Sensor>>,
    readings: RwLock<Vec<SensorData>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered sensors.
    pub async fn sensor_count(&self) -> usize {
        self.sensors.read().await.len()
    }

    /// Number of stored readings across all sensors.
    pub async fn reading_count(&self) -> usize {
        self.readings.read().await.len()
    }
}

#[async_trait]
impl SensorStore for InMemoryStore {
    async fn register_sensor(&self, name: &str) -> Result<Sensor, DbError> {
        let mut sensors = self.sensors.write().await;
        if sensors.iter().any(|s| s.name == name) {
            return Err(DbError::SensorAlreadyExists(name.to_owned()));
        }

        let sensor = Sensor::new(name, Utc::now());
        sensors.push(sensor.clone());
        tracing::debug!(sensor = name, "Registered sensor (in-memory)");
        Ok(sensor)
    }

    async fn find_sensor(&self, name: &str) -> Result<SensorLookup, DbError> {
        let sensors = self.sensors.read().await;
        Ok(sensors
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .map_or(SensorLookup::NotFound, SensorLookup::Found))
    }

    async fn record_sensor_data(
        &self,
        name: &str,
        temperature: f64,
        humidity: f64,
    ) -> Result<SensorData, DbError> {
        if !self.sensor_exists(name).await? {
            return Err(DbError::UnknownSensor(name.to_owned()));
        }

        let reading = SensorData::new(name, temperature, humidity, Utc::now());
        self.readings.write().await.push(reading.clone());
        tracing::debug!(sensor = name, "Recorded sensor data (in-memory)");
        Ok(reading)
    }

    async fn query_sensor_data(&self, name: &str) -> Result<Vec<SensorData>, DbError> {
        let readings = self.readings.read().await;
        Ok(readings
            .iter()
            .filter(|r| r.sensor_name == name)
            .cloned()
            .collect())
    }
}
