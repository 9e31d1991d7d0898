use thiserror::Error;

/// Failures raised by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking task running a store call panicked or was cancelled.
    #[error("storage task failed: {0}")]
    Task(String),
}

#[derive(Debug, Error)]
pub enum KodError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },

    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFile {
        path: String,
        reason: String,
    },

    #[error("Server error during {operation}: {reason}")]
    Server {
        operation: String,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl KodError {
    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFile {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn server_error(operation: &str, reason: &str) -> Self {
        Self::Server {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<toml::de::Error> for KodError {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: error.message().to_string(),
            field: None,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

pub type KodResult<T> = Result<T, KodError>;
