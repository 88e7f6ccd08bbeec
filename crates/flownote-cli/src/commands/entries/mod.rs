pub mod edit;
pub mod list;
pub mod refine;
pub mod show;

pub use edit::handle_edit;
pub use list::handle_list;
pub use refine::handle_refine;
pub use show::handle_show;

use flownote_core::{Entry, FlownoteError, LocalStore, LockState, Vault};

use crate::errors::CliError;
use crate::ui::{format_countdown, short_id};

/// Look up an entry by full id or unique prefix.
fn resolve_entry<'v, S: LocalStore>(vault: &'v Vault<S>, id: &str) -> anyhow::Result<&'v Entry> {
    match vault.find_by_prefix(id) {
        Ok(entry) => Ok(entry),
        Err(FlownoteError::NotFound(_)) => Err(CliError::not_found(
            format!("Entry not found: {}", id),
            "Hint: Run `flownote list` to find entry IDs.",
        )
        .into()),
        Err(err) => Err(err.into()),
    }
}

/// Refuse to touch an entry that is still inside its lock window.
fn ensure_unlocked(entry: &Entry, now: i64) -> anyhow::Result<()> {
    match entry.lock_state(now) {
        LockState::Unlocked => Ok(()),
        LockState::Locked { remaining_ms } => Err(CliError::locked(
            format!(
                "Entry {} is still sealed. Unlocks in {}.",
                short_id(&entry.id()),
                format_countdown(remaining_ms)
            ),
            remaining_ms,
        )
        .into()),
    }
}
