//! Integration tests for the `lorapanel-db` `MongoDB` store.
//!
//! The connection tests need no server and always run. The rest require a
//! live `MongoDB` instance. Run them with:
//!
//! ```bash
//! docker run -d --name lorapanel-mongo -p 27017:27017 mongo:7
//! cargo test -p lorapanel-db -- --ignored
//! docker rm -f lorapanel-mongo
//! ```
//!
//! Tests that need the server are marked `#[ignore]` so they are skipped
//! during normal `cargo test` runs. Each uses its own database and drops it
//! on success.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::float_cmp,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::time::Duration;

use lorapanel_db::{DbError, MongoConfig, MongoStore, SensorLookup, SensorStore};

/// `MongoDB` connection string for the local Docker instance.
const MONGODB_URI: &str = "mongodb://localhost:27017";

// =============================================================================
// Helper: connect to a fresh database
// =============================================================================

async fn setup(database: &str) -> MongoStore {
    let store = MongoStore::connect(&MongoConfig::new(MONGODB_URI, database))
        .await
        .expect("Failed to connect to MongoDB -- is Docker running?");
    store
        .database()
        .drop()
        .await
        .expect("Failed to drop test database");
    store
}

async fn teardown(store: MongoStore) {
    store
        .database()
        .drop()
        .await
        .expect("Failed to drop test database");
    store.close().await;
}

// =============================================================================
// Connection
// =============================================================================

#[tokio::test]
async fn connect_fails_fast_on_unreachable_host() {
    let config = MongoConfig::new("mongodb://127.0.0.1:1", "lorapanel_unreachable")
        .with_connect_timeout(Duration::from_millis(500));

    let started = std::time::Instant::now();
    let result = MongoStore::connect(&config).await;
    assert!(result.is_err());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn connect_rejects_malformed_uri() {
    let config = MongoConfig::new("not-a-mongodb-uri", "lorapanel_bad_uri");

    let result = MongoStore::connect(&config).await;
    assert!(matches!(result, Err(DbError::Config(_))));
}

// =============================================================================
// Sensors
// =============================================================================

#[tokio::test]
#[ignore = "requires live MongoDB instance"]
async fn register_then_find_sensor() {
    let store = setup("lorapanel_test_register").await;

    let sensor = store.register_sensor("sensor-1").await.unwrap();
    assert_eq!(sensor.name, "sensor-1");
    assert_eq!(sensor.creation_date, sensor.last_update);

    match store.find_sensor("sensor-1").await.unwrap() {
        SensorLookup::Found(found) => assert_eq!(found, sensor),
        SensorLookup::NotFound => panic!("registered sensor not found"),
    }
    assert!(store.sensor_exists("sensor-1").await.unwrap());
    assert!(!store.sensor_exists("sensor-2").await.unwrap());

    teardown(store).await;
}

#[tokio::test]
#[ignore = "requires live MongoDB instance"]
async fn duplicate_registration_is_rejected() {
    let store = setup("lorapanel_test_duplicate").await;

    store.register_sensor("sensor-1").await.unwrap();
    let err = store.register_sensor("sensor-1").await.unwrap_err();
    assert!(matches!(err, DbError::SensorAlreadyExists(_)));

    let count = store
        .database()
        .collection::<mongodb::bson::Document>(lorapanel_db::SENSORS_COLLECTION)
        .count_documents(mongodb::bson::doc! { "name": "sensor-1" })
        .await
        .unwrap();
    assert_eq!(count, 1);

    teardown(store).await;
}

#[tokio::test]
#[ignore = "requires live MongoDB instance"]
async fn unique_index_rejects_racing_registrations() {
    let store = setup("lorapanel_test_unique").await;
    store.ensure_unique_names().await.unwrap();

    let results = futures::future::join_all(
        (0..8).map(|_| store.register_sensor("racer")),
    )
    .await;

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, DbError::SensorAlreadyExists(_))));

    teardown(store).await;
}

// =============================================================================
// Sensor data
// =============================================================================

#[tokio::test]
#[ignore = "requires live MongoDB instance"]
async fn reading_for_unknown_sensor_is_rejected() {
    let store = setup("lorapanel_test_unknown").await;

    let err = store
        .record_sensor_data("ghost", 21.5, 40.0)
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::UnknownSensor(_)));
    assert!(store.query_sensor_data("ghost").await.unwrap().is_empty());

    teardown(store).await;
}

#[tokio::test]
#[ignore = "requires live MongoDB instance"]
async fn recorded_readings_are_queryable() {
    let store = setup("lorapanel_test_readings").await;

    store.register_sensor("sensor-1").await.unwrap();
    store.register_sensor("sensor-2").await.unwrap();

    let first = store.record_sensor_data("sensor-1", 21.5, 40.0).await.unwrap();
    store.record_sensor_data("sensor-1", 22.0, 41.5).await.unwrap();
    store.record_sensor_data("sensor-1", 0.0, 0.0).await.unwrap();
    store.record_sensor_data("sensor-2", -5.0, 90.0).await.unwrap();

    let readings = store.query_sensor_data("sensor-1").await.unwrap();
    assert_eq!(readings.len(), 3);
    assert!(readings.iter().all(|r| r.sensor_name == "sensor-1"));
    assert!(readings.contains(&first));

    let other = store.query_sensor_data("sensor-2").await.unwrap();
    assert_eq!(other.len(), 1);
    assert_eq!(other[0].temperature, -5.0);

    assert!(store.query_sensor_data("").await.unwrap().is_empty());

    teardown(store).await;
}
