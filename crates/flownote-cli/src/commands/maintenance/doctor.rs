use flownote_core::logging::logging_status;
use flownote_core::storage::VAULT_KEY;
use flownote_core::vault::decode_entries;
use flownote_core::{LocalStore, SqliteStore};

use crate::app::{missing_config_message, resolve_config_path, AppContext};
use crate::config::read_config;
use crate::ui::{blank_line, hint, print, StepList};

const STEPS: [&str; 5] = ["Config", "Store", "Integrity", "Vault", "Logging"];

pub fn handle_doctor(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let mut steps = StepList::new(&ui, &STEPS);
    steps.start("Running diagnostics");

    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        log::warn!("{}", missing_config_message(&config_path));
        steps.warn(Some("not found, using defaults"));
    } else if let Err(err) = read_config(&config_path) {
        steps.err(Some(&err.to_string()));
        return Err(anyhow::anyhow!("Doctor failed: config unreadable"));
    } else {
        steps.ok(Some(&config_path.display().to_string()));
    }

    let store_path = ctx.store_path()?;
    if !store_path.exists() {
        steps.err(Some(&format!("missing at {}", store_path.display())));
        blank_line(&ui);
        print(&ui, &hint(&ui, "flownote init"));
        return Err(anyhow::anyhow!("Doctor failed: store missing"));
    }
    steps.ok(Some(&store_path.display().to_string()));

    let store = SqliteStore::open_existing(&store_path)?;
    match store.check_integrity() {
        Ok(()) => steps.ok(None),
        Err(err) => steps.err(Some(&err.to_string())),
    }

    match store.get_item(VAULT_KEY) {
        Ok(None) => steps.ok(Some("empty")),
        Ok(Some(raw)) => match decode_entries(&raw) {
            Ok(entries) => {
                let now = ctx.now();
                let locked = entries.iter().filter(|e| e.is_locked(now)).count();
                steps.ok(Some(&format!("{} entries, {} locked", entries.len(), locked)));
            }
            Err(err) => steps.err(Some(&format!("unreadable ({}); it loads as empty", err))),
        },
        Err(err) => steps.err(Some(&err.to_string())),
    }

    match logging_status() {
        Some((level, dir)) => steps.ok(Some(&format!("{} in {}", level, dir.display()))),
        None => steps.warn(Some("disabled")),
    }

    if steps.has_error() {
        blank_line(&ui);
        print(
            &ui,
            &hint(&ui, "Restore the store from a backup (`flownote backup`) before writing more."),
        );
        return Err(anyhow::anyhow!("Doctor found problems"));
    }
    Ok(())
}
