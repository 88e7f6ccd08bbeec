//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use uuid::Uuid;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format a short ID from a UUID (first 8 characters).
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

/// Format a seal time, in `tz` when one is configured.
pub fn format_datetime(dt: &DateTime<Utc>, tz: Option<Tz>, pretty: bool) -> String {
    match (tz, pretty) {
        (Some(tz), true) => dt.with_timezone(&tz).format("%Y-%m-%d %H:%M %Z").to_string(),
        (Some(tz), false) => dt.with_timezone(&tz).to_rfc3339(),
        (None, true) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        (None, false) => dt.to_rfc3339(),
    }
}

/// Remaining lock time, rounded up to whole seconds.
///
/// `42s`, `4m 10s`, `1h 05m 03s`.
pub fn format_countdown(remaining_ms: u64) -> String {
    let secs = remaining_ms.div_ceil(1000);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// A lock window as the seal receipt shows it (`1h 30m`, `45s`, `none`).
pub fn format_lock(ms: u64) -> String {
    if ms == 0 {
        return "none".to_string();
    }
    let secs = ms / 1000;
    let parts = [(secs / 3600, "h"), ((secs % 3600) / 60, "m"), (secs % 60, "s")];
    parts
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format bytes as human-readable size.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_short_id() {
        let id = Uuid::parse_str("7a2e3c0b-1234-5678-9abc-def012345678").unwrap();
        assert_eq!(short_id(&id), "7a2e3c0b");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("hello\nworld"), "hello world");
        assert_eq!(single_line("a\r\nb"), "a b");
    }

    #[test]
    fn test_format_countdown_rounds_up() {
        assert_eq!(format_countdown(1), "1s");
        assert_eq!(format_countdown(29_001), "30s");
        assert_eq!(format_countdown(60_000), "1m 00s");
        assert_eq!(format_countdown(250_000), "4m 10s");
        assert_eq!(format_countdown(3_903_000), "1h 05m 03s");
    }

    #[test]
    fn test_format_lock() {
        assert_eq!(format_lock(0), "none");
        assert_eq!(format_lock(45_000), "45s");
        assert_eq!(format_lock(5_400_000), "1h 30m");
        assert_eq!(format_lock(7_510_000), "2h 5m 10s");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(format_datetime(&dt, None, true), "2024-01-01 12:00 UTC");
        let paris: Tz = "Europe/Paris".parse().unwrap();
        assert_eq!(
            format_datetime(&dt, Some(paris), true),
            "2024-01-01 13:00 CET"
        );
        assert!(format_datetime(&dt, Some(paris), false).ends_with("+01:00"));
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1048576), "1.0 MB");
    }
}
