//! Error types for client settings operations.

use thiserror::Error;

/// Primary error type for client settings operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid value for '{field}': {message}")]
    InvalidField {
        /// Field that failed validation.
        field: String,
        /// Human-readable error description.
        message: String,
    },
    /// Settings document could not be encoded or decoded.
    #[error("settings document is not valid JSON")]
    Json {
        /// Source serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias for settings results.
pub type ConfigResult<T> = Result<T, ConfigError>;
