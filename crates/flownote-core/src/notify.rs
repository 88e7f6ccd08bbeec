//! Single-slot transient notifications.

/// How long a notification stays visible.
pub const NOTIFICATION_MS: i64 = 3_000;

/// Holds at most one message; a new post replaces the old one.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Option<(String, i64)>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, message: impl Into<String>, now: i64) {
        self.current = Some((message.into(), now));
    }

    /// Visible message at `now`, if any.
    pub fn current(&self, now: i64) -> Option<&str> {
        match &self.current {
            Some((message, posted_at)) if now.saturating_sub(*posted_at) < NOTIFICATION_MS => {
                Some(message.as_str())
            }
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires_after_three_seconds() {
        let mut notifier = Notifier::new();
        notifier.post("Entry sealed.", 1_000);

        assert_eq!(notifier.current(1_000), Some("Entry sealed."));
        assert_eq!(notifier.current(3_999), Some("Entry sealed."));
        assert_eq!(notifier.current(4_000), None);
    }

    #[test]
    fn test_newest_replaces_oldest() {
        let mut notifier = Notifier::new();
        notifier.post("first", 0);
        notifier.post("second", 2_500);

        assert_eq!(notifier.current(3_500), Some("second"));
        assert_eq!(notifier.current(5_500), None);
    }
}
