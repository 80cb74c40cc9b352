//! Error types for the server binary.
//!
//! [`StartupError`] covers everything that can stop the process before or
//! while it serves: configuration, the database connection, and the HTTP
//! listener. All of them are fatal.

/// Top-level error for the server binary.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration sources could not be read or deserialized.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ::config::ConfigError,
    },

    /// The local `.env` file exists but could not be read or parsed.
    #[error("dotenv error: {source}")]
    Dotenv {
        /// The underlying dotenv error.
        #[from]
        source: dotenvy::Error,
    },

    /// Configuration was read but a value is unusable.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Which value is wrong and why.
        message: String,
    },

    /// The database could not be reached or verified.
    #[error("database error: {source}")]
    Database {
        /// The underlying data layer error.
        #[from]
        source: lorapanel_db::DbError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: lorapanel_api::ServerError,
    },
}
