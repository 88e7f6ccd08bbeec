//! Vault lifecycle: sealed entries, lock countdown and content replacement.
//!
//! The vault owns the in-memory entry list and writes the whole list back to
//! the store under [`VAULT_KEY`] after every mutation. Lock state is never
//! stored; everything time-related is derived from the `now` passed in.

mod entry;
mod refinement;

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{FlownoteError, Result};
use crate::i18n::MessageKey;
use crate::refine::{Refiner, RefinementError};
use crate::storage::{LocalStore, VAULT_KEY};

pub use entry::{remaining_lock, Entry, LockDuration, LockState, LEGACY_LOCK_DURATION_MS};
pub use refinement::{RefinementCandidate, RefinementTicket};

/// Something worth telling the writer after a successful vault mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EntrySealed,
    ThoughtRefined,
}

impl Notice {
    pub fn message_key(&self) -> MessageKey {
        match self {
            Notice::EntrySealed => MessageKey::EntrySealed,
            Notice::ThoughtRefined => MessageKey::ThoughtRefined,
        }
    }
}

/// Locked/unlocked tallies at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VaultCounts {
    pub total: usize,
    pub locked: usize,
    pub unlocked: usize,
}

/// Durable, newest-first list of sealed entries.
pub struct Vault<S: LocalStore> {
    store: S,
    entries: Vec<Entry>,
    refining: HashMap<Uuid, u64>,
    next_generation: u64,
}

impl<S: LocalStore> Vault<S> {
    /// Rehydrate the entry list from `store`.
    ///
    /// A missing key is an empty vault. Data that does not decode is logged
    /// and treated as an empty vault too; only a failing store read is an
    /// error.
    pub fn load(store: S) -> Result<Self> {
        let entries = match store.get_item(VAULT_KEY)? {
            None => Vec::new(),
            Some(raw) => match decode_entries(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    log::error!(
                        "event=vault_load module=vault status=error reason=decode error={}",
                        err
                    );
                    Vec::new()
                }
            },
        };
        log::debug!(
            "event=vault_load module=vault status=ok entries={}",
            entries.len()
        );
        Ok(Self {
            store,
            entries,
            refining: HashMap::new(),
            next_generation: 0,
        })
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Find the single entry whose id starts with `prefix` (case-insensitive).
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty or ambiguous prefix, `NotFound` when no
    /// id matches.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<&Entry> {
        let needle = prefix.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(FlownoteError::InvalidInput(
                "Entry id must not be empty".to_string(),
            ));
        }
        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id().to_string().starts_with(&needle));
        let first = matches.next().ok_or_else(|| {
            FlownoteError::NotFound(format!("No entry with id starting '{}'", prefix.trim()))
        })?;
        if matches.next().is_some() {
            return Err(FlownoteError::InvalidInput(format!(
                "Id prefix '{}' matches more than one entry",
                prefix.trim()
            )));
        }
        Ok(first)
    }

    pub fn counts(&self, now: i64) -> VaultCounts {
        let locked = self.entries.iter().filter(|e| e.is_locked(now)).count();
        VaultCounts {
            total: self.entries.len(),
            locked,
            unlocked: self.entries.len() - locked,
        }
    }

    pub fn lock_state(&self, id: Uuid, now: i64) -> Result<LockState> {
        Ok(self.require(id)?.lock_state(now))
    }

    /// Put a freshly sealed entry at the head of the list and persist.
    pub fn seal(&mut self, entry: Entry) -> Result<Notice> {
        let id = entry.id();
        let lock_ms = entry.lock_duration();
        self.entries.insert(0, entry);
        if let Err(err) = self.persist() {
            self.entries.remove(0);
            return Err(err);
        }
        log::info!(
            "event=entry_seal module=vault status=ok entry_id={} lock_ms={}",
            id,
            lock_ms
        );
        Ok(Notice::EntrySealed)
    }

    /// Replace the content of an unlocked entry and persist.
    ///
    /// `created_at` and `lock_duration` never change. Replacing with the
    /// current content is allowed and leaves the entry as it was.
    ///
    /// # Errors
    ///
    /// `NotFound`, `RefinementPending` while a refinement ticket is
    /// outstanding, or `Locked` inside the lock window.
    pub fn replace_content(&mut self, id: Uuid, content: String, now: i64) -> Result<Notice> {
        let index = self.index_of(id)?;
        if self.refining.contains_key(&id) {
            return Err(FlownoteError::RefinementPending);
        }
        if let LockState::Locked { remaining_ms } = self.entries[index].lock_state(now) {
            log::warn!(
                "event=entry_replace module=vault status=refused reason=locked entry_id={}",
                id
            );
            return Err(FlownoteError::Locked { remaining_ms });
        }

        let previous = self.entries[index].content().to_string();
        self.entries[index].set_content(content);
        if let Err(err) = self.persist() {
            self.entries[index].set_content(previous);
            return Err(err);
        }
        log::info!(
            "event=entry_replace module=vault status=ok entry_id={}",
            id
        );
        Ok(Notice::ThoughtRefined)
    }

    /// Mark an unlocked entry as refining and capture the text to send.
    pub fn begin_refinement(&mut self, id: Uuid, now: i64) -> Result<RefinementTicket> {
        let index = self.index_of(id)?;
        if self.refining.contains_key(&id) {
            return Err(FlownoteError::RefinementPending);
        }
        if let LockState::Locked { remaining_ms } = self.entries[index].lock_state(now) {
            return Err(FlownoteError::Locked { remaining_ms });
        }
        self.next_generation += 1;
        let generation = self.next_generation;
        self.refining.insert(id, generation);
        log::debug!(
            "event=refine_begin module=vault status=ok entry_id={} generation={}",
            id,
            generation
        );
        Ok(RefinementTicket::new(
            id,
            generation,
            self.entries[index].content().to_string(),
        ))
    }

    /// Resolve an outstanding ticket.
    ///
    /// Returns `Ok(None)` when the ticket was abandoned or superseded: the
    /// result is dropped. A collaborator failure clears the mark and is
    /// returned as `FlownoteError::Refinement`; the entry is untouched.
    pub fn finish_refinement(
        &mut self,
        ticket: RefinementTicket,
        result: std::result::Result<String, RefinementError>,
    ) -> Result<Option<RefinementCandidate>> {
        let id = ticket.entry_id();
        if self.refining.get(&id) != Some(&ticket.generation()) {
            log::debug!(
                "event=refine_finish module=vault status=discarded entry_id={}",
                id
            );
            return Ok(None);
        }
        self.refining.remove(&id);

        let polished = result.map_err(|err| {
            log::warn!(
                "event=refine_finish module=vault status=error entry_id={} error={}",
                id,
                err
            );
            FlownoteError::Refinement(err)
        })?;
        Ok(Some(RefinementCandidate {
            entry_id: id,
            original: ticket.into_original(),
            polished,
        }))
    }

    /// Forget an outstanding refinement; its eventual result will be ignored.
    pub fn abandon_refinement(&mut self, id: Uuid) -> bool {
        self.refining.remove(&id).is_some()
    }

    pub fn is_refining(&self, id: Uuid) -> bool {
        self.refining.contains_key(&id)
    }

    /// Run `refiner` over an unlocked entry and return the candidate for review.
    pub fn refine<R: Refiner + ?Sized>(
        &mut self,
        id: Uuid,
        refiner: &R,
        now: i64,
    ) -> Result<RefinementCandidate> {
        let ticket = self.begin_refinement(id, now)?;
        let result = refiner.correct(ticket.original());
        self.finish_refinement(ticket, result)?
            .ok_or_else(|| FlownoteError::Other("refinement was superseded".to_string()))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn index_of(&self, id: Uuid) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| FlownoteError::NotFound(format!("Entry {} not found", id)))
    }

    fn require(&self, id: Uuid) -> Result<&Entry> {
        self.get(id)
            .ok_or_else(|| FlownoteError::NotFound(format!("Entry {} not found", id)))
    }

    fn persist(&mut self) -> Result<()> {
        let encoded = encode_entries(&self.entries)?;
        self.store.set_item(VAULT_KEY, &encoded).map_err(|err| {
            log::error!(
                "event=vault_persist module=vault status=error entries={}",
                self.entries.len()
            );
            err
        })
    }
}

/// Decode the persisted JSON array of entries.
pub fn decode_entries(raw: &str) -> Result<Vec<Entry>> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode the full entry list for persistence.
pub fn encode_entries(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}
