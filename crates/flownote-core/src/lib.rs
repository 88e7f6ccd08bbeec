//! # FlowNote Core
//!
//! Core library for FlowNote - a write-forward journal whose entries are
//! sealed for a chosen lock window before they can be read again.
//!
//! This crate holds the domain logic, the local store abstraction and the
//! refinement collaborator, independent of the terminal front-end.
//!
//! ## Architecture
//!
//! - **capture**: the draft pad (fade levels, deletion refusal, seal requests)
//! - **vault**: sealed entries, lock countdown, content replacement, refinement review
//! - **storage**: namespaced key/value store (SQLite file or in-memory)
//! - **refine**: typo-correction capability and its HTTP client
//! - **notify**: single transient notification slot
//! - **prefs** / **i18n**: language and theme preferences, message table
//! - **picker**: clamped hours/minutes/seconds duration picker
//! - **clock**: epoch-millisecond time source
//! - **logging**: file logging bootstrap

pub mod capture;
pub mod clock;
pub mod error;
pub mod fs;
pub mod i18n;
pub mod logging;
pub mod notify;
pub mod picker;
pub mod prefs;
pub mod refine;
pub mod storage;
pub mod vault;

pub use capture::{CaptureEngine, FadeLevel, Keystroke, KeystrokeOutcome, RejectReason};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{FlownoteError, Result};
pub use i18n::{t, MessageKey};
pub use notify::Notifier;
pub use picker::{DurationPicker, TimeUnit};
pub use prefs::{Language, Preferences, Theme};
pub use refine::{RefinementError, Refiner};
pub use storage::{LocalStore, MemoryStore, SqliteStore};
pub use vault::{
    remaining_lock, Entry, LockDuration, LockState, Notice, RefinementCandidate,
    RefinementTicket, Vault, VaultCounts,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
