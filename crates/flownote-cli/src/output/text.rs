//! Text and table output formatting for entries.

use chrono_tz::Tz;

use flownote_core::clock::to_datetime;
use flownote_core::i18n::unlocked_label;
use flownote_core::{t, Entry, LockState, MessageKey};

use crate::ui::format::single_line;
use crate::ui::theme::{styled, styles};
use crate::ui::{format_countdown, format_datetime, short_id, truncate, Column, UiContext};

pub const ENTRY_COLUMNS: [Column; 4] = [
    Column::new("ID"),
    Column::new("Sealed"),
    Column::new("State"),
    Column::new("Entry"),
];

/// One list row: id, seal time, lock state, preview.
///
/// A locked row shows the countdown and the capsule label, never content.
pub fn entry_row(ctx: &UiContext, entry: &Entry, now: i64, tz: Option<Tz>) -> Vec<String> {
    let sealed = format_datetime(&to_datetime(entry.created_at()), tz, ctx.mode.is_pretty());
    let (state, preview) = match entry.lock_state(now) {
        LockState::Locked { remaining_ms } => {
            let state = if ctx.mode.is_pretty() {
                styled(
                    &format!("locked {}", format_countdown(remaining_ms)),
                    styles::yellow(),
                    ctx.color,
                )
            } else {
                format!("locked:{}", remaining_ms.div_ceil(1000))
            };
            (state, t(ctx.language, MessageKey::EncryptedCapsule).to_string())
        }
        LockState::Unlocked => {
            let state = if ctx.mode.is_pretty() {
                styled("unlocked", styles::green(), ctx.color)
            } else {
                "unlocked".to_string()
            };
            let preview = if ctx.mode.is_pretty() {
                let room = ctx.width.saturating_sub(50).max(20);
                truncate(&single_line(entry.content()), room)
            } else {
                unlocked_label(ctx.language, entry.word_count())
            };
            (state, preview)
        }
    };
    vec![short_id(&entry.id()), sealed, state, preview]
}

/// Body block for `show` (unlocked entries only).
pub fn entry_detail(ctx: &UiContext, entry: &Entry, tz: Option<Tz>) -> Vec<String> {
    let sealed = format_datetime(&to_datetime(entry.created_at()), tz, ctx.mode.is_pretty());
    let label = unlocked_label(ctx.language, entry.word_count());
    if ctx.mode.is_pretty() {
        vec![
            styled(&label, styles::accent(ctx.theme), ctx.color),
            crate::ui::kv(ctx, "ID", &entry.id().to_string()),
            crate::ui::kv(ctx, "Sealed", &sealed),
            crate::ui::divider(ctx),
            entry.content().to_string(),
        ]
    } else {
        vec![
            format!("id={}", entry.id()),
            format!("sealed={}", sealed),
            format!("words={}", entry.word_count()),
            String::new(),
            entry.content().to_string(),
        ]
    }
}
