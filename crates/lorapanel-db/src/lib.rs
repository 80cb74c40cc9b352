//! Data layer for the LoRaPanel telemetry API (`MongoDB`).
//!
//! Sensors and their readings live in two document collections:
//!
//! ```text
//! Handler
//!     |
//!     +-- SensorStore (trait)
//!         |-- MongoStore     -> "Sensors", "SensorData" collections
//!         +-- InMemoryStore  -> process-local test double
//! ```
//!
//! Both writes are gated by a name-existence check. With [`MongoStore`] the
//! check and the insert are two separate round-trips, so concurrent
//! registrations of the same name can race unless
//! [`MongoConfig::unique_names`] is enabled.
//!
//! # Modules
//!
//! - [`store`] -- The [`SensorStore`] trait and [`SensorLookup`] result
//! - [`mongo`] -- `MongoDB` connection, configuration and store
//! - [`memory`] -- In-memory store for tests and local development
//! - [`error`] -- Shared error types

pub mod error;
pub mod memory;
pub mod mongo;
pub mod store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use memory::InMemoryStore;
pub use mongo::{MongoConfig, MongoStore, SENSORS_COLLECTION, SENSOR_DATA_COLLECTION};
pub use store::{SensorLookup, SensorStore};
