use flownote_core::{t, CaptureEngine, Keystroke, LockDuration, MessageKey};

use crate::app::AppContext;
use crate::cli::SealArgs;
use crate::constants::DEFAULT_LOCK_SECS;
use crate::errors::CliError;
use crate::helpers::{parse_lock_duration, read_entry_body};
use crate::ui::prompt::prompt_input;
use crate::ui::{format_lock, print, receipt, short_id};

pub fn handle_seal(ctx: &AppContext, args: &SealArgs) -> anyhow::Result<()> {
    let editor = ctx.editor()?;
    let body = read_entry_body(args.no_input, args.body.clone(), editor.as_deref(), None)?;

    let mut vault = ctx.open_vault()?;
    let ui = ctx.ui_for_store(false, None, vault.store());

    let lock = match args.duration.as_deref() {
        Some(value) => parse_lock_duration(value)?,
        None if !args.no_input && ui.is_interactive() => {
            let default = format!("{}s", DEFAULT_LOCK_SECS);
            let answer = prompt_input(t(ui.language, MessageKey::SetSealDuration), Some(&default))?;
            parse_lock_duration(&answer)?
        }
        None => LockDuration::from_secs(DEFAULT_LOCK_SECS)?,
    };

    let now = ctx.now();
    let mut engine = CaptureEngine::new(now);
    engine.on_keystroke(Keystroke::Paste(body), now);
    let entry = engine
        .request_seal(lock, now)
        .ok_or_else(|| CliError::invalid_input("Entry body is empty; nothing to seal"))?;

    let id = short_id(&entry.id());
    let notice = vault.seal(entry)?;

    if !ctx.quiet() {
        let lock_text = format_lock(lock.as_millis());
        print(
            &ui,
            &receipt(
                &ui,
                t(ui.language, notice.message_key()),
                &[("ID", &id), ("Lock", &lock_text)],
            ),
        );
    }
    Ok(())
}
