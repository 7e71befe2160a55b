use std::io;

use thiserror::Error;

/// Library-wide error type for instgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The install ConfigMap could not be serialized to YAML.
    #[error("failed to create install-config ConfigMap")]
    Serialize(#[source] serde_yaml::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
