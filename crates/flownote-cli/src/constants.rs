//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unclassified failure.
    pub const GENERAL: i32 = 1;

    /// Resource not found (config, store, entry).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The entry is still sealed.
    pub const LOCKED: i32 = 6;

    /// The refinement service failed; nothing was changed.
    pub const REFINEMENT_FAILED: i32 = 7;
}

/// Lock window used when none is given and no prompt is possible.
pub const DEFAULT_LOCK_SECS: u64 = 60;

/// How often `list --watch` redraws.
pub const WATCH_INTERVAL_MS: u64 = 1_000;
