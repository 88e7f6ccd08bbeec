//! Reviewable refinement results.

use uuid::Uuid;

use super::{Notice, Vault};
use crate::error::Result;
use crate::storage::LocalStore;

/// Proof that a refinement was started for an entry.
///
/// Handed back to [`Vault::finish_refinement`]. A ticket whose refinement was
/// abandoned, or superseded by a newer one, resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementTicket {
    entry_id: Uuid,
    generation: u64,
    original: String,
}

impl RefinementTicket {
    pub(crate) fn new(entry_id: Uuid, generation: u64, original: String) -> Self {
        Self {
            entry_id,
            generation,
            original,
        }
    }

    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Content captured when the refinement began; this is what gets sent out.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub(crate) fn into_original(self) -> String {
        self.original
    }
}

/// A corrected text awaiting the writer's decision. Nothing is committed
/// until [`RefinementCandidate::apply`] is called; dropping it discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementCandidate {
    pub entry_id: Uuid,
    pub original: String,
    pub polished: String,
}

impl RefinementCandidate {
    /// The service returned the text as it was.
    pub fn is_unchanged(&self) -> bool {
        self.original == self.polished
    }

    /// Commit the polished text through the normal replace path.
    pub fn apply<S: LocalStore>(self, vault: &mut Vault<S>, now: i64) -> Result<Notice> {
        vault.replace_content(self.entry_id, self.polished, now)
    }
}
