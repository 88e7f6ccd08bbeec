//! Guided prompts for interactive flows.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use super::context::UiContext;
use super::render::{badge, blank_line, print};
use super::theme::Badge;

/// Prompt for text input, optionally pre-filled.
pub fn prompt_input(prompt: &str, default: Option<&str>) -> anyhow::Result<String> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive input required. Use flags or run on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    let builder = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true);

    let result = match default {
        Some(def) => builder.default(def.to_string()).interact_text()?,
        None => builder.interact_text()?,
    };

    Ok(result)
}

/// Prompt for confirmation.
pub fn prompt_confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive confirmation required. Use flags or run on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    let result = Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    Ok(result)
}

/// Print a cancellation message.
pub fn print_cancelled(ctx: &UiContext, action: &str) {
    if ctx.mode.is_pretty() {
        blank_line(ctx);
        print(
            ctx,
            &badge(ctx, Badge::Warn, &format!("{} cancelled", action)),
        );
    } else if !ctx.mode.is_json() {
        println!("status=cancelled");
    }
}
