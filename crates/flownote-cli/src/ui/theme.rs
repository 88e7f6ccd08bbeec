//! Colors, badges and fade styles.

use owo_colors::{OwoColorize, Style};

use flownote_core::FadeLevel;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
    Locked,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
            Self::Info => "[INFO]",
            Self::Locked => "[LOCKED]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        if !unicode {
            return self.text();
        }
        match self {
            Self::Ok => "[\u{2713}]",     // [✓]
            Self::Warn => "[\u{26A0}]",   // [⚠]
            Self::Err => "[\u{2717}]",    // [✗]
            Self::Info => "[\u{2139}]",   // [ℹ]
            Self::Locked => "[\u{25A0}]", // [■]
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::green(),
            Self::Warn => styles::yellow(),
            Self::Err => styles::red(),
            Self::Info => styles::cyan(),
            Self::Locked => styles::dim(),
        }
    }
}

/// Apply `style` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

pub mod styles {
    use owo_colors::Style;

    use flownote_core::{FadeLevel, Theme};

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn green() -> Style {
        Style::new().green()
    }

    pub fn yellow() -> Style {
        Style::new().yellow()
    }

    pub fn red() -> Style {
        Style::new().red()
    }

    pub fn cyan() -> Style {
        Style::new().cyan()
    }

    /// Accent color for titles and the pad cursor.
    pub fn accent(theme: Theme) -> Style {
        match theme {
            Theme::Dark => Style::new().white().bold(),
            Theme::Warm => Style::new().yellow().bold(),
            Theme::Blue => Style::new().blue().bold(),
        }
    }

    /// Draft text style for a fade level.
    pub fn fade(level: FadeLevel) -> Style {
        match level {
            FadeLevel::Full => Style::new(),
            FadeLevel::Fading => Style::new().bright_black(),
            FadeLevel::NearInvisible => Style::new().black().dimmed(),
        }
    }
}

/// Draft text as the pad shows it at `level`.
///
/// Without color the near-invisible tier is masked instead of dimmed.
pub fn fade_text(text: &str, level: FadeLevel, color: bool) -> String {
    if color {
        return styled(text, styles::fade(level), true);
    }
    match level {
        FadeLevel::NearInvisible => text
            .chars()
            .map(|c| if c.is_whitespace() { c } else { '.' })
            .collect(),
        _ => text.to_string(),
    }
}

/// Spinner frames based on unicode setting.
pub fn spinner_frames(unicode: bool) -> &'static [&'static str] {
    if unicode {
        &[
            "\u{280B}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283C}", "\u{2834}", "\u{2826}",
            "\u{2827}", "\u{2807}", "\u{280F}", "",
        ]
    } else {
        &["|", "/", "-", "\\", ""]
    }
}
