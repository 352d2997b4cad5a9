//! Error types for NVRAM operations.

use thiserror::Error;

use crate::postal::PostalCodeError;
use crate::store::StorageError;

/// Primary error type for NVRAM operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NvramError {
    /// Storage backend rejected an operation.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Postal code failed validation; nothing was written.
    #[error(transparent)]
    PostalCode(#[from] PostalCodeError),
    /// Composite prefecture key could not be split into code and mask.
    #[error("invalid prefecture selection '{key}': {reason}")]
    InvalidSelection {
        /// Composite key supplied by the caller.
        key: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Persisted value could not be decoded.
    #[error("stored entry '{key}' could not be decoded: {reason}")]
    Decode {
        /// Storage key holding the value.
        key: String,
        /// Decoder detail.
        reason: String,
    },
}

/// Convenience alias for NVRAM results.
pub type NvramResult<T> = Result<T, NvramError>;
