//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; core errors that reach `main`
//! untyped are classified by [`exit_code_for`].

use std::fmt;

use flownote_core::FlownoteError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, store, entry)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// The entry is still inside its lock window
    Locked { message: String, remaining_ms: u64 },

    /// The refinement service failed
    RefinementFailed { message: String, hint: Option<String> },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Locked { message, .. } => write!(f, "{}", message),
            CliError::RefinementFailed { message, hint } => match hint {
                Some(h) => write!(f, "{}\n{}", message, h),
                None => write!(f, "{}", message),
            },
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn locked(message: impl Into<String>, remaining_ms: u64) -> Self {
        CliError::Locked {
            message: message.into(),
            remaining_ms,
        }
    }

    pub fn refinement_failed(message: impl Into<String>, hint: Option<String>) -> Self {
        CliError::RefinementFailed {
            message: message.into(),
            hint,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Locked { .. } => exit_codes::LOCKED,
            CliError::RefinementFailed { .. } => exit_codes::REFINEMENT_FAILED,
        }
    }
}

/// Exit code for any error that reaches `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<FlownoteError>() {
        Some(FlownoteError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(FlownoteError::InvalidInput(_)) | Some(FlownoteError::Validation(_)) => {
            exit_codes::INVALID_INPUT
        }
        Some(FlownoteError::Locked { .. }) => exit_codes::LOCKED,
        Some(FlownoteError::Refinement(_)) | Some(FlownoteError::RefinementPending) => {
            exit_codes::REFINEMENT_FAILED
        }
        _ => exit_codes::GENERAL,
    }
}
