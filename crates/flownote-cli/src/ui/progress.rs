//! Progress indicators using indicatif.

use std::time::Duration;

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

use super::context::UiContext;
use super::render::badge;
use super::theme::{spinner_frames, Badge};

/// A spinner for the blocking refinement call.
pub struct Spinner<'a> {
    ctx: &'a UiContext,
    message: String,
    bar: Option<IndicatifBar>,
}

impl<'a> Spinner<'a> {
    /// Create a new spinner with the given message.
    pub fn new(ctx: &'a UiContext, message: &str) -> Self {
        let bar = if ctx.allows_animation() {
            let pb = IndicatifBar::new_spinner();
            let template = if ctx.color {
                "{spinner:.cyan} {msg}..."
            } else {
                "{spinner} {msg}..."
            };
            if let Ok(style) = ProgressStyle::default_spinner().template(template) {
                pb.set_style(style.tick_strings(spinner_frames(ctx.unicode)));
            }
            pb.set_message(message.to_string());
            Some(pb)
        } else {
            None
        };

        Self {
            ctx,
            message: message.to_string(),
            bar,
        }
    }

    /// Start animating, or print a static line when animation is off.
    pub fn start(&self) {
        match &self.bar {
            Some(bar) => bar.enable_steady_tick(Duration::from_millis(80)),
            None => {
                if self.ctx.mode.is_pretty() {
                    println!("{}...", self.message);
                }
            }
        }
    }

    /// Stop without printing anything.
    pub fn clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// A step list that shows progress through a series of checks.
pub struct StepList<'a> {
    ctx: &'a UiContext,
    steps: Vec<(String, Option<Badge>)>,
    current: usize,
}

impl<'a> StepList<'a> {
    /// Create a new step list with the given step names.
    pub fn new(ctx: &'a UiContext, steps: &[&str]) -> Self {
        Self {
            ctx,
            steps: steps.iter().map(|s| (s.to_string(), None)).collect(),
            current: 0,
        }
    }

    /// Print the heading (pretty mode only).
    pub fn start(&self, header: &str) {
        if self.ctx.mode.is_pretty() {
            println!("{}...", header);
        }
    }

    /// Mark current step with `result`, print it and advance.
    pub fn complete(&mut self, result: Badge, detail: Option<&str>) {
        if self.current < self.steps.len() {
            self.steps[self.current].1 = Some(result);
            self.render_step(self.current, detail);
            self.current += 1;
        }
    }

    pub fn ok(&mut self, detail: Option<&str>) {
        self.complete(Badge::Ok, detail);
    }

    pub fn warn(&mut self, detail: Option<&str>) {
        self.complete(Badge::Warn, detail);
    }

    pub fn err(&mut self, detail: Option<&str>) {
        self.complete(Badge::Err, detail);
    }

    fn render_step(&self, index: usize, detail: Option<&str>) {
        let (name, result) = &self.steps[index];

        if self.ctx.mode.is_pretty() {
            let status = match result {
                Some(b) => badge(self.ctx, *b, detail.unwrap_or("")),
                None => "...".to_string(),
            };
            println!("- {}: {}", name, status);
        } else {
            let status_str = match result {
                Some(Badge::Ok) => "ok",
                Some(Badge::Warn) => "warn",
                Some(Badge::Err) => "err",
                Some(Badge::Info) => "info",
                Some(Badge::Locked) => "locked",
                None => "pending",
            };
            let key = name.to_lowercase().replace(' ', "_");
            match detail {
                Some(d) => println!("check={} {} detail={}", key, status_str, d),
                None => println!("check={} {}", key, status_str),
            }
        }
    }

    /// Whether any step failed.
    pub fn has_error(&self) -> bool {
        self.steps
            .iter()
            .any(|(_, result)| *result == Some(Badge::Err))
    }
}
