//! Draft capture: one in-progress note that fades while the writer is idle.
//!
//! Deletion is refused outright; the pad only moves forward. A seal request
//! turns the trimmed draft into an [`Entry`] for the vault.

mod fade;

use crate::vault::{Entry, LockDuration};

pub use fade::{fade_level, FadeLevel, FADE_START_MS, FADE_TICK, KEEP_MOVING_OPACITY, NEAR_INVISIBLE_MS};

/// Input accepted by the draft pad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Newline,
    Paste(String),
    Backspace,
    Delete,
}

impl Keystroke {
    pub fn is_deletion(&self) -> bool {
        matches!(self, Keystroke::Backspace | Keystroke::Delete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Backspace or Delete while drafting
    Deletion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeystrokeOutcome {
    Accepted,
    Rejected(RejectReason),
}

impl KeystrokeOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, KeystrokeOutcome::Accepted)
    }
}

/// Transient draft state. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct CaptureEngine {
    buffer: String,
    last_keystroke: i64,
    fade: FadeLevel,
}

impl CaptureEngine {
    pub fn new(now: i64) -> Self {
        Self {
            buffer: String::new(),
            last_keystroke: now,
            fade: FadeLevel::Full,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether a seal request would produce an entry.
    pub fn can_seal(&self) -> bool {
        !self.buffer.trim().is_empty()
    }

    pub fn idle_ms(&self, now: i64) -> i64 {
        now.saturating_sub(self.last_keystroke)
    }

    pub fn on_keystroke(&mut self, key: Keystroke, now: i64) -> KeystrokeOutcome {
        match key {
            Keystroke::Backspace | Keystroke::Delete => {
                return KeystrokeOutcome::Rejected(RejectReason::Deletion);
            }
            Keystroke::Char(c) => self.buffer.push(c),
            Keystroke::Newline => self.buffer.push('\n'),
            Keystroke::Paste(text) => self.buffer.push_str(&text),
        }
        self.last_keystroke = now;
        self.fade = FadeLevel::Full;
        KeystrokeOutcome::Accepted
    }

    /// Recompute and remember the fade level.
    pub fn tick(&mut self, now: i64) -> FadeLevel {
        self.fade = self.fade_at(now);
        self.fade
    }

    /// Fade level at `now` without updating the stored one.
    pub fn fade_at(&self, now: i64) -> FadeLevel {
        fade_level(!self.buffer.is_empty(), self.idle_ms(now))
    }

    /// Level computed by the most recent tick or keystroke.
    pub fn fade(&self) -> FadeLevel {
        self.fade
    }

    pub fn shows_keep_moving(&self) -> bool {
        !self.buffer.is_empty() && self.fade.opacity() < KEEP_MOVING_OPACITY
    }

    /// Turn the draft into an entry sealed at `now`.
    ///
    /// Returns `None` and leaves the draft alone when it is blank.
    pub fn request_seal(&mut self, lock: LockDuration, now: i64) -> Option<Entry> {
        let content = self.buffer.trim();
        if content.is_empty() {
            return None;
        }
        let entry = Entry::new(content.to_string(), lock, now);
        self.buffer.clear();
        self.last_keystroke = now;
        self.fade = FadeLevel::Full;
        Some(entry)
    }

    /// Put a draft back after its seal could not be saved.
    ///
    /// Anything typed since the seal request stays after it.
    pub fn restore(&mut self, draft: &str, now: i64) {
        self.buffer.insert_str(0, draft);
        self.last_keystroke = now;
        self.fade = FadeLevel::Full;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str, at: i64) -> CaptureEngine {
        let mut engine = CaptureEngine::new(at);
        engine.on_keystroke(Keystroke::Paste(text.to_string()), at);
        engine
    }

    #[test]
    fn test_keystroke_resets_fade() {
        let mut engine = typed("a", 0);
        assert_eq!(engine.tick(8_000), FadeLevel::NearInvisible);
        assert!(engine.shows_keep_moving());

        engine.on_keystroke(Keystroke::Char('b'), 8_000);
        assert_eq!(engine.fade(), FadeLevel::Full);
        assert!(!engine.shows_keep_moving());
        assert_eq!(engine.buffer(), "ab");
    }

    #[test]
    fn test_rejected_deletion_keeps_idle_clock() {
        let mut engine = typed("abc", 0);
        let outcome = engine.on_keystroke(Keystroke::Backspace, 5_000);

        assert_eq!(outcome, KeystrokeOutcome::Rejected(RejectReason::Deletion));
        assert_eq!(engine.idle_ms(5_000), 5_000);
    }

    #[test]
    fn test_newline_is_accepted() {
        let mut engine = typed("line", 0);
        assert!(engine.on_keystroke(Keystroke::Newline, 1).is_accepted());
        assert_eq!(engine.buffer(), "line\n");
    }

    #[test]
    fn test_blank_seal_is_noop() {
        let mut engine = typed("  \n ", 0);
        assert!(!engine.can_seal());
        assert!(engine.request_seal(LockDuration::ZERO, 10).is_none());
        assert_eq!(engine.buffer(), "  \n ");
    }

    #[test]
    fn test_restore_puts_draft_back() {
        let mut engine = typed("  kept  ", 0);
        let draft = engine.buffer().to_string();
        engine.request_seal(LockDuration::ZERO, 10).unwrap();
        engine.tick(9_000);

        engine.restore(&draft, 9_000);
        assert_eq!(engine.buffer(), "  kept  ");
        assert_eq!(engine.fade(), FadeLevel::Full);
        assert!(engine.can_seal());
    }

    #[test]
    fn test_seal_clears_draft() {
        let mut engine = typed("  hello  ", 0);
        let lock = LockDuration::from_secs(5).unwrap();
        let entry = engine.request_seal(lock, 100).unwrap();

        assert_eq!(entry.content(), "hello");
        assert_eq!(entry.created_at(), 100);
        assert_eq!(entry.lock_duration(), 5_000);
        assert!(engine.is_empty());
        assert_eq!(engine.tick(50_000), FadeLevel::Full);
    }
}
