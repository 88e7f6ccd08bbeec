//! JSON output formatting for entries.

use flownote_core::clock::to_datetime;
use flownote_core::{Entry, LockState};

/// Convert an entry to JSON for output. Locked entries carry no content.
pub fn entry_json(entry: &Entry, now: i64) -> serde_json::Value {
    let state = entry.lock_state(now);
    let (content, words) = match state {
        LockState::Locked { .. } => (None, None),
        LockState::Unlocked => (Some(entry.content()), Some(entry.word_count())),
    };
    serde_json::json!({
        "id": entry.id(),
        "created_at": to_datetime(entry.created_at()).to_rfc3339(),
        "created_at_ms": entry.created_at(),
        "lock_duration_ms": entry.lock_duration(),
        "unlocks_at_ms": entry.unlocks_at(),
        "locked": state.is_locked(),
        "remaining_ms": entry.remaining_lock(now),
        "words": words,
        "content": content,
    })
}

/// Convert multiple entries to a JSON array for output.
pub fn entries_json(entries: &[&Entry], now: i64) -> Vec<serde_json::Value> {
    entries.iter().map(|entry| entry_json(entry, now)).collect()
}
