//! Sealed entry data model and lock arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FlownoteError, Result};

/// Lock applied to records written before the lock window became selectable.
pub const LEGACY_LOCK_DURATION_MS: u64 = 60_000;

fn legacy_lock_duration() -> u64 {
    LEGACY_LOCK_DURATION_MS
}

/// A sealed journal entry.
///
/// Persisted as `{id, content, createdAt, lockDuration}`. Only `content`
/// changes after sealing, and only through the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    id: Uuid,
    content: String,
    created_at: i64,
    #[serde(default = "legacy_lock_duration")]
    lock_duration: u64,
}

impl Entry {
    pub(crate) fn new(content: String, lock: LockDuration, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            created_at,
            lock_duration: lock.as_millis(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Seal time in epoch milliseconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Lock window in milliseconds.
    pub fn lock_duration(&self) -> u64 {
        self.lock_duration
    }

    /// Epoch milliseconds at which the entry opens.
    pub fn unlocks_at(&self) -> i64 {
        self.created_at
            .saturating_add(i64::try_from(self.lock_duration).unwrap_or(i64::MAX))
    }

    pub fn remaining_lock(&self, now: i64) -> u64 {
        remaining_lock(self, now)
    }

    pub fn lock_state(&self, now: i64) -> LockState {
        match remaining_lock(self, now) {
            0 => LockState::Unlocked,
            remaining_ms => LockState::Locked { remaining_ms },
        }
    }

    pub fn is_locked(&self, now: i64) -> bool {
        remaining_lock(self, now) > 0
    }

    /// Whitespace-separated word count, as shown on unlocked entries.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Milliseconds left in the entry's lock window: `max(0, lock - (now - created))`.
pub fn remaining_lock(entry: &Entry, now: i64) -> u64 {
    let elapsed = i128::from(now) - i128::from(entry.created_at);
    let remaining = i128::from(entry.lock_duration) - elapsed;
    u64::try_from(remaining.max(0)).unwrap_or(u64::MAX)
}

/// Derived lock status of an entry at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked { remaining_ms: u64 },
    Unlocked,
}

impl LockState {
    pub fn is_locked(&self) -> bool {
        matches!(self, LockState::Locked { .. })
    }

    /// Whole seconds left, rounded up, as the countdown shows them.
    pub fn remaining_secs(&self) -> u64 {
        match self {
            LockState::Locked { remaining_ms } => remaining_ms.div_ceil(1000),
            LockState::Unlocked => 0,
        }
    }
}

/// A validated lock window between zero and 23h59m59s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LockDuration(u64);

impl LockDuration {
    pub const ZERO: LockDuration = LockDuration(0);
    pub const MAX_MS: u64 = (23 * 3600 + 59 * 60 + 59) * 1000;
    pub const MAX: LockDuration = LockDuration(Self::MAX_MS);

    pub fn from_millis(ms: u64) -> Result<Self> {
        if ms > Self::MAX_MS {
            return Err(FlownoteError::InvalidInput(format!(
                "Lock duration {} ms exceeds the 23h59m59s maximum",
                ms
            )));
        }
        Ok(Self(ms))
    }

    pub fn from_secs(secs: u64) -> Result<Self> {
        let ms = secs.checked_mul(1000).ok_or_else(|| {
            FlownoteError::InvalidInput(format!("Lock duration {}s is out of range", secs))
        })?;
        Self::from_millis(ms)
    }

    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Result<Self> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(FlownoteError::InvalidInput(format!(
                "Invalid lock duration {}h{}m{}s (hours 0-23, minutes and seconds 0-59)",
                hours, minutes, seconds
            )));
        }
        let secs = u64::from(hours) * 3600 + u64::from(minutes) * 60 + u64::from(seconds);
        Ok(Self(secs * 1000))
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Split into whole hours, minutes and seconds (sub-second part dropped).
    pub fn hms(&self) -> (u32, u32, u32) {
        let secs = self.0 / 1000;
        (
            (secs / 3600) as u32,
            ((secs % 3600) / 60) as u32,
            (secs % 60) as u32,
        )
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for LockDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{:02}:{:02}:{:02}", h, m, s)
    }
}

impl TryFrom<u64> for LockDuration {
    type Error = FlownoteError;

    fn try_from(ms: u64) -> Result<Self> {
        Self::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(created_at: i64, lock_ms: u64) -> Entry {
        Entry::new(
            "note".to_string(),
            LockDuration::from_millis(lock_ms).unwrap(),
            created_at,
        )
    }

    #[test]
    fn test_remaining_lock_counts_down_to_zero() {
        let e = entry(1_000, 30_000);
        assert_eq!(e.remaining_lock(1_000), 30_000);
        assert_eq!(e.remaining_lock(30_999), 1);
        assert_eq!(e.remaining_lock(31_000), 0);
        assert_eq!(e.remaining_lock(i64::MAX), 0);
    }

    #[test]
    fn test_zero_lock_is_open_immediately() {
        let e = entry(5_000, 0);
        assert_eq!(e.lock_state(5_000), LockState::Unlocked);
    }

    #[test]
    fn test_remaining_secs_rounds_up() {
        let state = LockState::Locked { remaining_ms: 1_001 };
        assert_eq!(state.remaining_secs(), 2);
        assert_eq!(LockState::Unlocked.remaining_secs(), 0);
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        let mut e = entry(0, 0);
        e.set_content("  one two\n\nthree  ".to_string());
        assert_eq!(e.word_count(), 3);
    }

    #[test]
    fn test_serialized_shape_uses_camel_case() {
        let e = entry(42, 1_000);
        let value = serde_json::to_value(&e).unwrap();
        assert_eq!(value["createdAt"], 42);
        assert_eq!(value["lockDuration"], 1_000);
        assert_eq!(value["content"], "note");
        assert!(value["id"].is_string());
    }

    #[test]
    fn test_legacy_record_gets_fixed_lock() {
        let json = r#"{"id":"6f1c1f5e-0a8e-4f57-9d0a-3f1f0f2f8e11","content":"old","createdAt":10}"#;
        let e: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(e.lock_duration(), LEGACY_LOCK_DURATION_MS);
        assert_eq!(e.unlocks_at(), 60_010);
    }

    #[test]
    fn test_lock_duration_bounds() {
        assert_eq!(
            LockDuration::from_hms(23, 59, 59).unwrap(),
            LockDuration::MAX
        );
        assert!(LockDuration::from_hms(24, 0, 0).is_err());
        assert!(LockDuration::from_hms(0, 60, 0).is_err());
        assert!(LockDuration::from_millis(LockDuration::MAX_MS + 1).is_err());
        assert!(LockDuration::from_secs(u64::MAX).is_err());
    }

    #[test]
    fn test_lock_duration_display_and_hms() {
        let lock = LockDuration::from_hms(1, 2, 3).unwrap();
        assert_eq!(lock.hms(), (1, 2, 3));
        assert_eq!(lock.to_string(), "01:02:03");
        assert_eq!(lock.as_millis(), 3_723_000);
    }
}
