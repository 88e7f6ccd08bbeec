//! Error types for FlowNote core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

use crate::refine::RefinementError;

/// Result type alias for FlowNote operations.
pub type Result<T> = std::result::Result<T, FlownoteError>;

/// Core error type for FlowNote operations.
#[derive(Debug, Error)]
pub enum FlownoteError {
    /// Local store backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The entry is still inside its lock window
    #[error("Entry is still sealed ({remaining_ms} ms remaining)")]
    Locked { remaining_ms: u64 },

    /// A refinement call for the entry has not resolved yet
    #[error("Entry is being refined")]
    RefinementPending,

    /// The refinement collaborator failed; the entry is unchanged
    #[error("Refinement failed: {0}")]
    Refinement(#[from] RefinementError),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl FlownoteError {
    /// Whether the failure can be retried by the user without changing anything.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FlownoteError::Refinement(_) | FlownoteError::RefinementPending
        )
    }
}

impl From<std::io::Error> for FlownoteError {
    fn from(err: std::io::Error) -> Self {
        FlownoteError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for FlownoteError {
    fn from(err: serde_json::Error) -> Self {
        FlownoteError::Validation(err.to_string())
    }
}

impl From<rusqlite::Error> for FlownoteError {
    fn from(err: rusqlite::Error) -> Self {
        FlownoteError::Storage(format!("SQLite error: {}", err))
    }
}
