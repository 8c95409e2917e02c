//! Error types for engine operations

use thiserror::Error;

/// Errors that can occur during engine operations
///
/// Unknown ids and operations attempted in the wrong state are not errors;
/// they are silent no-ops reported through `bool` returns. Only storage
/// failures surface here.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),

    /// Failed to serialize state for storage or export
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
