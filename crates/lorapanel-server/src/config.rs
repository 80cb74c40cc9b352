//! Configuration for the server binary.
//!
//! Values are read once at startup, lowest to highest precedence:
//!
//! 1. `lorapanel.toml` or `lorapanel.yaml` in the working directory (optional)
//! 2. `.env` in the working directory (optional, `KEY=value` lines)
//! 3. Process environment variables
//!
//! Only the variables listed below are read from `.env` and the process
//! environment. Anything else, such as a shell's `HOST`, is ignored.
//!
//! Required:
//! - `MONGODB_URI` -- `MongoDB` connection string
//! - `MONGODB_DATABASE` -- database holding the `Sensors` and `SensorData` collections
//!
//! Optional:
//! - `LORAPANEL_HOST` -- bind address (default `0.0.0.0`)
//! - `PORT` -- bind port (default `8080`)
//! - `UNIQUE_SENSOR_NAMES` -- create a unique index on sensor names (default `false`)
//! - `LOG_FORMAT` -- `text` or `json` (default `text`)

use std::path::Path;

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File, Map};
use lorapanel_api::ServerConfig;
use lorapanel_db::MongoConfig;
use serde::Deserialize;

use crate::error::StartupError;

/// File stem of the optional local configuration file.
const CONFIG_FILE_STEM: &str = "lorapanel";

/// Name of the optional dotenv file.
const DOTENV_FILE: &str = ".env";

/// Environment variables the server reads, and the config key each sets.
const ENV_KEYS: [(&str, &str); 6] = [
    ("MONGODB_URI", "mongodb_uri"),
    ("MONGODB_DATABASE", "mongodb_database"),
    ("LORAPANEL_HOST", "host"),
    ("PORT", "port"),
    ("UNIQUE_SENSOR_NAMES", "unique_sensor_names"),
    ("LOG_FORMAT", "log_format"),
];

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Complete server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// `MongoDB` connection string.
    pub mongodb_uri: String,
    /// Database name.
    pub mongodb_database: String,
    /// Address to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind the HTTP listener to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Enforce sensor name uniqueness with a storage-level index.
    #[serde(default)]
    pub unique_sensor_names: bool,
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load configuration from the optional local files in the working
    /// directory and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::Config`] if a source cannot be read or a
    /// required key is missing, [`StartupError::Dotenv`] if `.env` exists
    /// but cannot be parsed, or [`StartupError::InvalidConfig`] if a value
    /// is empty.
    pub fn load() -> Result<Self, StartupError> {
        let process = ENV_KEYS.iter().filter_map(|(var, _)| {
            std::env::var(var)
                .ok()
                .map(|value| ((*var).to_owned(), value))
        });
        Self::load_from(Path::new("."), process)
    }

    fn load_from<I>(dir: &Path, process: I) -> Result<Self, StartupError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let dotenv = read_dotenv(&dir.join(DOTENV_FILE))?;
        Self::build(
            Config::builder()
                .add_source(File::from(dir.join(CONFIG_FILE_STEM)).required(false))
                .add_source(environment(dotenv))
                .add_source(environment(process)),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, StartupError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), StartupError> {
        if self.mongodb_uri.trim().is_empty() {
            return Err(StartupError::InvalidConfig {
                message: "MONGODB_URI must not be empty".to_owned(),
            });
        }
        if self.mongodb_database.trim().is_empty() {
            return Err(StartupError::InvalidConfig {
                message: "MONGODB_DATABASE must not be empty".to_owned(),
            });
        }
        Ok(())
    }

    /// Data layer configuration derived from this config.
    pub fn mongo_config(&self) -> MongoConfig {
        MongoConfig::new(&self.mongodb_uri, &self.mongodb_database)
            .with_unique_names(self.unique_sensor_names)
    }

    /// HTTP server configuration derived from this config.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

/// Read `KEY=value` pairs from a dotenv file. A missing file is empty.
fn read_dotenv(path: &Path) -> Result<Vec<(String, String)>, StartupError> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => Ok(iter.collect::<Result<Vec<_>, _>>()?),
        Err(err) if err.not_found() => Ok(Vec::new()),
        Err(err) => Err(err.into()),
    }
}

/// An environment source holding only the variables in [`ENV_KEYS`],
/// renamed to their config keys.
fn environment<I>(vars: I) -> Environment
where
    I: IntoIterator<Item = (String, String)>,
{
    let known: Map<String, String> = vars
        .into_iter()
        .filter_map(|(name, value)| {
            ENV_KEYS
                .iter()
                .find(|(var, _)| *var == name)
                .map(|(_, key)| ((*key).to_owned(), value))
        })
        .collect();
    Environment::default().source(Some(known)).try_parsing(true)
}

fn default_host() -> String {
    ServerConfig::default().host
}

fn default_port() -> u16 {
    ServerConfig::default().port
}
