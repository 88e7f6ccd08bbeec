use std::io::Write;
use std::time::Duration;

use chrono_tz::Tz;

use flownote_core::{t, Entry, LocalStore, MessageKey, Vault};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::WATCH_INTERVAL_MS;
use crate::helpers::parse_output_format;
use crate::output::{entries_json, entry_row, ENTRY_COLUMNS};
use crate::ui::{blank_line, header, hint, kv, print, simple_table, Refresh, UiContext};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let vault = ctx.open_vault()?;
    let ui = ctx.ui_for_store(args.json, format, vault.store());
    let tz = ctx.timezone()?;

    if args.watch {
        return watch(ctx, &ui, &vault, args, tz);
    }

    let now = ctx.now();
    let entries = select(&vault, args, now);

    if ui.mode.is_json() {
        let output = serde_json::to_string_pretty(&entries_json(&entries, now))?;
        println!("{}", output);
        return Ok(());
    }

    print_list(ctx, &ui, &vault, &entries, now, tz);
    Ok(())
}

/// Newest first, filtered by lock state, capped by `--limit`.
fn select<'v, S: LocalStore>(vault: &'v Vault<S>, args: &ListArgs, now: i64) -> Vec<&'v Entry> {
    vault
        .entries()
        .iter()
        .filter(|entry| {
            if args.locked {
                entry.is_locked(now)
            } else if args.unlocked {
                !entry.is_locked(now)
            } else {
                true
            }
        })
        .take(args.limit.unwrap_or(usize::MAX))
        .collect()
}

fn print_list<S: LocalStore>(
    ctx: &AppContext,
    ui: &UiContext,
    vault: &Vault<S>,
    entries: &[&Entry],
    now: i64,
    tz: Option<Tz>,
) {
    let show_chrome = ui.mode.shows_chrome(ctx.quiet());

    if show_chrome {
        print(ui, &header(ui, "list", Some(t(ui.language, MessageKey::VaultTitle))));
        blank_line(ui);
    }

    if entries.is_empty() {
        if show_chrome {
            print(ui, t(ui.language, MessageKey::EmptyVault));
        }
        return;
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| entry_row(ui, entry, now, tz))
        .collect();
    print(ui, &simple_table(ui, &ENTRY_COLUMNS, &rows));

    if show_chrome {
        let counts = vault.counts(now);
        blank_line(ui);
        print(
            ui,
            &format!(
                "{}  {}",
                kv(ui, "Locked", &counts.locked.to_string()),
                kv(ui, "Unlocked", &counts.unlocked.to_string())
            ),
        );
        print(ui, &hint(ui, "flownote show <id>  \u{00B7}  flownote refine <id>"));
    }
}

/// Redraw once a second until nothing shown is locked.
fn watch<S: LocalStore>(
    ctx: &AppContext,
    ui: &UiContext,
    vault: &Vault<S>,
    args: &ListArgs,
    tz: Option<Tz>,
) -> anyhow::Result<()> {
    let refresh = ui.mode.refresh();
    loop {
        let now = ctx.now();
        let entries = select(vault, args, now);
        if refresh == Refresh::Redraw {
            print!("\x1b[2J\x1b[H");
            std::io::stdout().flush()?;
        }
        print_list(ctx, ui, vault, &entries, now, tz);

        if !entries.iter().any(|entry| entry.is_locked(now)) {
            return Ok(());
        }
        if refresh == Refresh::Append {
            println!();
        }
        std::thread::sleep(Duration::from_millis(WATCH_INTERVAL_MS));
    }
}
