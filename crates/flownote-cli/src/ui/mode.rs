//! Output mode and the rendering rules that hang off it.

/// How a command's results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON document on stdout; locked entries carry no content
    Json,
    /// key=value lines, stable for logs and scripts
    #[default]
    Plain,
    /// Tables, colors and countdowns (TTY only)
    Pretty,
}

/// How `list --watch` moves from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Clear the screen and draw over the last frame.
    Redraw,
    /// Print each frame after the previous one.
    Append,
}

/// What `refine` does with a candidate that differs from the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Review {
    /// Write it back without asking.
    Apply,
    /// Show the side-by-side comparison and confirm.
    Ask,
    /// Report it and leave the entry alone.
    Report,
}

impl OutputMode {
    /// `--json` wins, then `--format plain`. Pretty needs a TTY that is
    /// not `TERM=dumb`.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        match (json_flag, format_flag) {
            (true, _) => Self::Json,
            (false, Some("plain")) => Self::Plain,
            _ if is_tty && !term_is_dumb => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }

    /// Header, counts and hints around a listing.
    pub fn shows_chrome(&self, quiet: bool) -> bool {
        self.is_pretty() && !quiet
    }

    /// Countdown refresh for `list --watch`. Only a pretty terminal is
    /// redrawn in place; plain output stays append-only for log capture.
    pub fn refresh(&self) -> Refresh {
        match self {
            Self::Pretty => Refresh::Redraw,
            Self::Plain | Self::Json => Refresh::Append,
        }
    }

    /// Decide how a changed refinement candidate is handled.
    ///
    /// `--apply` always writes. Otherwise only an interactive, non-JSON
    /// run asks; everything else reports the candidate untouched.
    pub fn review(&self, apply_flag: bool, no_input: bool, interactive: bool) -> Review {
        if apply_flag {
            Review::Apply
        } else if self.is_json() || no_input || !interactive {
            Review::Report
        } else {
            Review::Ask
        }
    }
}
