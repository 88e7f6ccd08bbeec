//! The fading draft pad.
//!
//! Raw-mode terminal loop over a [`CaptureEngine`]. Deletion keys are
//! refused with a notice; Ctrl+S opens the lock picker and Enter there
//! seals the draft into the vault. A seal that cannot be saved hands the
//! draft back to the pad.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use flownote_core::capture::FADE_TICK;
use flownote_core::{
    t, CaptureEngine, DurationPicker, Entry, Keystroke, KeystrokeOutcome, Language, LocalStore,
    MessageKey, Notifier, Theme, TimeUnit, Vault,
};

use crate::app::AppContext;
use crate::cli::WriteArgs;
use crate::errors::CliError;
use crate::helpers::parse_lock_duration;
use crate::ui::theme::{fade_text, styled, styles};
use crate::ui::{print, receipt, short_id};

/// Raw mode and the alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Draft,
    Picker { focus: TimeUnit },
}

#[derive(Debug)]
enum PadEvent {
    None,
    Quit,
    /// `draft` is the buffer as typed, kept until the entry is saved.
    Sealed { entry: Entry, draft: String },
}

/// Map a terminal key to a draft keystroke. Control chords are not text.
fn keystroke_for(key: &KeyEvent) -> Option<Keystroke> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(Keystroke::Char(c)),
        KeyCode::Enter => Some(Keystroke::Newline),
        KeyCode::Tab => Some(Keystroke::Char('\t')),
        KeyCode::Backspace => Some(Keystroke::Backspace),
        KeyCode::Delete => Some(Keystroke::Delete),
        _ => None,
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

struct Pad {
    engine: CaptureEngine,
    notifier: Notifier,
    picker: DurationPicker,
    screen: Screen,
    language: Language,
    theme: Theme,
    color: bool,
}

impl Pad {
    fn new(now: i64, picker: DurationPicker, language: Language, theme: Theme, color: bool) -> Self {
        Self {
            engine: CaptureEngine::new(now),
            notifier: Notifier::new(),
            picker,
            screen: Screen::Draft,
            language,
            theme,
            color,
        }
    }

    fn type_keystroke(&mut self, keystroke: Keystroke, now: i64) {
        if let KeystrokeOutcome::Rejected(_) = self.engine.on_keystroke(keystroke, now) {
            self.notifier
                .post(t(self.language, MessageKey::DontLookBack), now);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: i64) -> PadEvent {
        if is_ctrl(key, 'c') {
            return PadEvent::Quit;
        }
        match self.screen {
            Screen::Draft => self.handle_draft_key(key, now),
            Screen::Picker { focus } => self.handle_picker_key(key, focus, now),
        }
    }

    fn handle_draft_key(&mut self, key: &KeyEvent, now: i64) -> PadEvent {
        if key.code == KeyCode::Esc {
            return PadEvent::Quit;
        }
        if is_ctrl(key, 's') {
            if self.engine.can_seal() {
                self.screen = Screen::Picker {
                    focus: TimeUnit::Hours,
                };
            } else {
                self.notifier
                    .post(t(self.language, MessageKey::NothingToSeal), now);
            }
            return PadEvent::None;
        }
        if let Some(keystroke) = keystroke_for(key) {
            self.type_keystroke(keystroke, now);
        }
        PadEvent::None
    }

    fn handle_picker_key(&mut self, key: &KeyEvent, focus: TimeUnit, now: i64) -> PadEvent {
        match key.code {
            KeyCode::Left | KeyCode::BackTab => {
                self.screen = Screen::Picker {
                    focus: focus.previous(),
                };
            }
            KeyCode::Right | KeyCode::Tab => {
                self.screen = Screen::Picker {
                    focus: focus.next(),
                };
            }
            KeyCode::Up => self.picker.increment(focus),
            KeyCode::Down => self.picker.decrement(focus),
            KeyCode::Esc => self.screen = Screen::Draft,
            KeyCode::Enter => {
                self.screen = Screen::Draft;
                let draft = self.engine.buffer().to_string();
                if let Some(entry) = self.engine.request_seal(self.picker.lock_duration(), now) {
                    return PadEvent::Sealed { entry, draft };
                }
            }
            _ => {}
        }
        PadEvent::None
    }

    /// Save a sealed entry, returning its short id.
    ///
    /// On a failed write the draft goes back into the engine and the pad
    /// stays open.
    fn commit<S: LocalStore>(
        &mut self,
        vault: &mut Vault<S>,
        entry: Entry,
        draft: &str,
        now: i64,
    ) -> Option<String> {
        let id = short_id(&entry.id());
        match vault.seal(entry) {
            Ok(notice) => {
                self.notifier.post(t(self.language, notice.message_key()), now);
                Some(id)
            }
            Err(err) => {
                log::warn!("event=entry_seal module=cli status=err error={}", err);
                self.engine.restore(draft, now);
                self.notifier
                    .post(t(self.language, MessageKey::SealFailed), now);
                None
            }
        }
    }

    /// Lines of the current frame.
    fn frame(&self, now: i64) -> Vec<String> {
        let mut lines = Vec::new();
        let title = styled("FlowNote \u{00B7} write", styles::dim(), self.color);
        match self.notifier.current(now) {
            Some(message) => lines.push(format!(
                "{}   {}",
                title,
                styled(message, styles::accent(self.theme), self.color)
            )),
            None => lines.push(title),
        }
        lines.push(String::new());

        match self.screen {
            Screen::Draft => self.draft_lines(&mut lines),
            Screen::Picker { focus } => self.picker_lines(&mut lines, focus),
        }
        lines
    }

    fn draft_lines(&self, lines: &mut Vec<String>) {
        if self.engine.is_empty() {
            lines.push(styled(
                t(self.language, MessageKey::BeginFlow),
                styles::dim(),
                self.color,
            ));
        } else {
            let text = fade_text(self.engine.buffer(), self.engine.fade(), self.color);
            lines.extend(text.split('\n').map(str::to_string));
        }

        lines.push(String::new());
        if self.engine.shows_keep_moving() {
            lines.push(styled(
                t(self.language, MessageKey::KeepMoving),
                styles::accent(self.theme).bold(),
                self.color,
            ));
            lines.push(String::new());
        }
        let footer = if self.engine.can_seal() {
            format!("Ctrl+S {}  \u{00B7}  Esc", t(self.language, MessageKey::FinishAndSeal))
        } else {
            "Esc".to_string()
        };
        lines.push(styled(&footer, styles::dim(), self.color));
    }

    fn picker_lines(&self, lines: &mut Vec<String>, focus: TimeUnit) {
        lines.push(styled(
            t(self.language, MessageKey::SetSealDuration),
            styles::bold(),
            self.color,
        ));
        lines.push(String::new());

        let fields: Vec<String> = TimeUnit::ALL
            .iter()
            .map(|unit| {
                let label = t(self.language, unit_label(*unit));
                let value = format!("{:02}", self.picker.get(*unit));
                if *unit == focus {
                    format!(
                        "{} [{}]",
                        label,
                        styled(&value, styles::accent(self.theme).bold(), self.color)
                    )
                } else {
                    format!("{}  {} ", label, value)
                }
            })
            .collect();
        lines.push(fields.join("   "));
        lines.push(String::new());

        let footer = format!(
            "\u{2190}\u{2192} field  \u{2191}\u{2193} adjust  \u{00B7}  Enter {}  \u{00B7}  Esc {}",
            t(self.language, MessageKey::Seal),
            t(self.language, MessageKey::Back)
        );
        lines.push(styled(&footer, styles::dim(), self.color));
    }
}

fn unit_label(unit: TimeUnit) -> MessageKey {
    match unit {
        TimeUnit::Hours => MessageKey::Hours,
        TimeUnit::Minutes => MessageKey::Min,
        TimeUnit::Seconds => MessageKey::Sec,
    }
}

fn draw(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    // Raw mode does not translate \n.
    write!(out, "{}", lines.join("\r\n"))?;
    out.flush()
}

pub fn handle_write(ctx: &AppContext, args: &WriteArgs) -> anyhow::Result<()> {
    let picker = match args.duration.as_deref() {
        Some(value) => DurationPicker::from_lock(parse_lock_duration(value)?),
        None => DurationPicker::new(),
    };

    let mut vault = ctx.open_vault()?;
    let ui = ctx.ui_for_store(false, None, vault.store());
    if !ui.is_interactive() {
        return Err(CliError::invalid_input(
            "The draft pad needs a terminal. Use `flownote seal --body \"...\"` instead.",
        )
        .into());
    }

    let mut pad = Pad::new(ctx.now(), picker, ui.language, ui.theme, ui.color);
    let mut sealed = Vec::new();
    log::debug!("event=pad_open module=cli status=ok");

    {
        let _guard = TerminalGuard::enter()?;
        let mut out = io::stdout();
        loop {
            let now = ctx.now();
            pad.engine.tick(now);
            draw(&mut out, &pad.frame(now))?;

            if !event::poll(FADE_TICK)? {
                continue;
            }
            let now = ctx.now();
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match pad.handle_key(&key, now) {
                        PadEvent::None => {}
                        PadEvent::Quit => break,
                        PadEvent::Sealed { entry, draft } => {
                            if let Some(id) = pad.commit(&mut vault, entry, &draft, now) {
                                sealed.push(id);
                            }
                        }
                    }
                }
                Event::Paste(text) => pad.type_keystroke(Keystroke::Paste(text), now),
                _ => {}
            }
        }
    }

    log::debug!("event=pad_close module=cli status=ok sealed={}", sealed.len());
    if !ctx.quiet() && !sealed.is_empty() {
        let ids = sealed.join(", ");
        print(
            &ui,
            &receipt(&ui, t(ui.language, MessageKey::EntrySealed), &[("ID", &ids)]),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flownote_core::{FlownoteError, MemoryStore};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn pad() -> Pad {
        Pad::new(0, DurationPicker::new(), Language::En, Theme::Dark, false)
    }

    fn type_text(pad: &mut Pad, text: &str) {
        for c in text.chars() {
            pad.handle_key(&key(KeyCode::Char(c)), 0);
        }
    }

    /// Reads fine, refuses every write.
    struct FullDisk;

    impl LocalStore for FullDisk {
        fn get_item(&self, _key: &str) -> flownote_core::Result<Option<String>> {
            Ok(None)
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> flownote_core::Result<()> {
            Err(FlownoteError::Storage("disk full".to_string()))
        }

        fn remove_item(&mut self, _key: &str) -> flownote_core::Result<()> {
            Ok(())
        }

        fn keys(&self) -> flownote_core::Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_keystroke_mapping() {
        assert_eq!(keystroke_for(&key(KeyCode::Char('a'))), Some(Keystroke::Char('a')));
        assert_eq!(keystroke_for(&key(KeyCode::Enter)), Some(Keystroke::Newline));
        assert_eq!(keystroke_for(&key(KeyCode::Backspace)), Some(Keystroke::Backspace));
        assert_eq!(keystroke_for(&ctrl('s')), None);
        assert_eq!(keystroke_for(&key(KeyCode::Left)), None);
    }

    #[test]
    fn test_deletion_posts_notice_and_keeps_text() {
        let mut pad = pad();
        pad.handle_key(&key(KeyCode::Char('h')), 0);
        pad.handle_key(&key(KeyCode::Char('i')), 10);
        pad.handle_key(&key(KeyCode::Backspace), 20);

        assert_eq!(pad.engine.buffer(), "hi");
        assert_eq!(pad.notifier.current(20), Some("Don't look back, keep flowing."));
        assert!(pad.frame(20)[0].contains("Don't look back"));
    }

    #[test]
    fn test_ctrl_s_needs_text() {
        let mut pad = pad();
        pad.handle_key(&ctrl('s'), 0);
        assert_eq!(pad.screen, Screen::Draft);
        assert_eq!(pad.notifier.current(0), Some("Write something first."));

        type_text(&mut pad, "  ");
        pad.handle_key(&ctrl('s'), 100);
        assert_eq!(pad.screen, Screen::Draft);
        assert!(pad.frame(100)[0].contains("Write something first."));

        pad.handle_key(&key(KeyCode::Char('x')), 0);
        pad.handle_key(&ctrl('s'), 0);
        assert_eq!(
            pad.screen,
            Screen::Picker {
                focus: TimeUnit::Hours
            }
        );
    }

    #[test]
    fn test_picker_adjusts_and_seals() {
        let mut pad = pad();
        type_text(&mut pad, "a thought");
        pad.handle_key(&ctrl('s'), 0);
        pad.handle_key(&key(KeyCode::Down), 0);
        pad.handle_key(&key(KeyCode::Right), 0);
        pad.handle_key(&key(KeyCode::Up), 0);
        pad.handle_key(&key(KeyCode::Up), 0);

        assert_eq!(pad.picker.get(TimeUnit::Hours), 0);
        assert_eq!(pad.picker.get(TimeUnit::Minutes), 3);

        match pad.handle_key(&key(KeyCode::Enter), 5_000) {
            PadEvent::Sealed { entry, draft } => {
                assert_eq!(entry.content(), "a thought");
                assert_eq!(entry.lock_duration(), 180_000);
                assert_eq!(draft, "a thought");
            }
            other => panic!("expected a sealed entry, got {:?}", other),
        }
        assert_eq!(pad.screen, Screen::Draft);
        assert!(pad.engine.is_empty());
    }

    fn seal_now(pad: &mut Pad) -> (Entry, String) {
        pad.handle_key(&ctrl('s'), 0);
        match pad.handle_key(&key(KeyCode::Enter), 1_000) {
            PadEvent::Sealed { entry, draft } => (entry, draft),
            other => panic!("expected a sealed entry, got {:?}", other),
        }
    }

    #[test]
    fn test_commit_saves_and_posts_notice() {
        let mut pad = pad();
        let mut vault = Vault::load(MemoryStore::new()).unwrap();
        type_text(&mut pad, "a thought");
        let (entry, draft) = seal_now(&mut pad);
        let expected = short_id(&entry.id());

        assert_eq!(pad.commit(&mut vault, entry, &draft, 1_000), Some(expected));
        assert_eq!(vault.len(), 1);
        assert!(pad.engine.is_empty());
        assert_eq!(pad.notifier.current(1_000), Some("Entry sealed."));
    }

    #[test]
    fn test_failed_save_keeps_the_draft() {
        let mut pad = pad();
        let mut vault = Vault::load(FullDisk).unwrap();
        type_text(&mut pad, " precious thought ");
        let (entry, draft) = seal_now(&mut pad);
        assert!(pad.engine.is_empty());

        assert_eq!(pad.commit(&mut vault, entry, &draft, 1_000), None);
        assert_eq!(vault.len(), 0);
        assert_eq!(pad.engine.buffer(), " precious thought ");
        assert_eq!(pad.screen, Screen::Draft);
        assert_eq!(
            pad.notifier.current(1_000),
            Some("Could not save. Your draft is still here.")
        );

        // The restored draft can be sealed again.
        pad.handle_key(&ctrl('s'), 2_000);
        assert!(matches!(pad.screen, Screen::Picker { .. }));
    }

    #[test]
    fn test_picker_escape_goes_back_without_sealing() {
        let mut pad = pad();
        pad.handle_key(&key(KeyCode::Char('x')), 0);
        pad.handle_key(&ctrl('s'), 0);
        assert!(matches!(pad.handle_key(&key(KeyCode::Esc), 0), PadEvent::None));
        assert_eq!(pad.screen, Screen::Draft);
        assert_eq!(pad.engine.buffer(), "x");
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut pad = pad();
        assert!(matches!(pad.handle_key(&key(KeyCode::Esc), 0), PadEvent::Quit));
        assert!(matches!(pad.handle_key(&ctrl('c'), 0), PadEvent::Quit));
    }

    #[test]
    fn test_keep_moving_overlay_after_idle() {
        let mut pad = pad();
        pad.handle_key(&key(KeyCode::Char('x')), 0);
        assert!(!pad.frame(0).iter().any(|l| l.contains("Keep Moving")));

        pad.engine.tick(3_500);
        assert!(pad.frame(3_500).iter().any(|l| l.contains("Keep Moving")));
    }

    #[test]
    fn test_empty_pad_shows_placeholder() {
        let lines = pad().frame(0);
        assert!(lines.iter().any(|l| l.contains("Begin your flow")));
    }
}
