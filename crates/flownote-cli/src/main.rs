//! FlowNote CLI - a write-forward journal whose entries stay sealed for a
//! chosen lock window.
//!
//! This is the command-line interface for FlowNote. It wires the core
//! library to a terminal draft pad and a set of vault commands.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use flownote_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_backup, handle_completions, handle_doctor, handle_edit, handle_init, handle_lang,
    handle_list, handle_refine, handle_seal, handle_show, handle_theme, handle_write,
};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(err) = ctx.init_logging() {
        if !ctx.quiet() {
            eprintln!("Warning: file logging disabled: {}", err);
        }
    }

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);
        log::error!("event=command_failed module=cli status=err error={}", message);

        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint:" line off an error message, or supply a
/// contextual hint for common failures.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    for marker in ["\nHint:", "\nhint:"] {
        if let Some(idx) = error.find(marker) {
            return (&error[..idx], Some(error[idx + 1..].to_string()));
        }
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("store") && error_lower.contains("not found") {
        return (error, Some("Hint: Run `flownote init` to create it.".to_string()));
    }

    if error_lower.contains("invalid lock duration") || error_lower.contains("lock window") {
        return (
            error,
            Some("Hint: Use a duration like 90s, 15m, 1h30m or 00:05:00 (max 23:59:59).".to_string()),
        );
    }

    if error_lower.contains("integrity") && error_lower.contains("failed") {
        return (
            error,
            Some("Hint: Restore from a backup made with `flownote backup`.".to_string()),
        );
    }

    (error, None)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => handle_init(ctx, args),
        Some(Commands::Write(args)) => handle_write(ctx, args),
        Some(Commands::Seal(args)) => handle_seal(ctx, args),
        Some(Commands::List(args)) => handle_list(ctx, args),
        Some(Commands::Show(args)) => handle_show(ctx, args),
        Some(Commands::Edit(args)) => handle_edit(ctx, args),
        Some(Commands::Refine(args)) => handle_refine(ctx, args),
        Some(Commands::Lang(args)) => handle_lang(ctx, args),
        Some(Commands::Theme(args)) => handle_theme(ctx, args),
        Some(Commands::Doctor) => handle_doctor(ctx),
        Some(Commands::Backup(args)) => handle_backup(ctx, args),
        Some(Commands::Completions(args)) => handle_completions(args.shell),
        None => {
            print_quickstart(ctx);
            Ok(())
        }
    }
}

fn print_quickstart(ctx: &AppContext) {
    if ctx.quiet() {
        return;
    }
    println!("FlowNote v{}", VERSION);
    println!();
    println!("Quickstart:");
    println!("  flownote init                      Write config, create the store");
    println!("  flownote write                     Open the fading draft pad");
    println!("  flownote seal --duration 15m       Seal stdin or $EDITOR text for 15 minutes");
    println!("  flownote list --watch              Watch lock countdowns");
    println!("  flownote show <id>                 Read an unlocked entry");
    println!("  flownote refine <id>               Fix typos, review, then apply");
    println!();
    println!("Run `flownote --help` for all commands.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_explicit_hint() {
        let (message, hint) = split_error_hint("Entry not found: abc\nHint: Run `flownote list`.");
        assert_eq!(message, "Entry not found: abc");
        assert_eq!(hint.as_deref(), Some("Hint: Run `flownote list`."));
    }

    #[test]
    fn test_contextual_hint() {
        let (message, hint) = split_error_hint("Invalid lock duration: 5x");
        assert_eq!(message, "Invalid lock duration: 5x");
        assert!(hint.unwrap().contains("1h30m"));

        assert_eq!(split_error_hint("something else").1, None);
    }
}
