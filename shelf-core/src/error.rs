use thiserror::Error;

/// Failure of one list fetch. Shown to the user as a notice; never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Could not read response: {0}")]
    Decode(String),
    #[error("{0}")]
    Api(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

/// Key-value persistence errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,
    #[error("Storage write failed for '{key}': {message}")]
    Write { key: String, message: String },
    #[error("Serialization error: {0}")]
    Serialization(String),
}
