//! Store error model.

use thiserror::Error;

use usersvc_core::UserId;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a single store operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No document exists for the given id.
    #[error("no document for id {0}")]
    NotFound(UserId),

    /// The backend could not serve the operation at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
