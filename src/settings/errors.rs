// 3rd party crates
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("{0} timeout must be greater than 0")]
    InvalidTimeout(&'static str),
}
