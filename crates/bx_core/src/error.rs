//! Boundary error types.
//!
//! Nothing inside the pipeline is fatal: classification misses, name
//! resolution gaps and zero-volume reconciliation all degrade to report
//! fields. `CoreError` only covers the boundary itself, where a caller
//! hands over a malformed request or configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchema(u8),
}

pub type Result<T> = std::result::Result<T, CoreError>;
