use flownote_core::t;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::read_entry_body;
use crate::ui::{print, receipt, short_id};

use super::{ensure_unlocked, resolve_entry};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut vault = ctx.open_vault()?;
    let (id, existing) = {
        let entry = resolve_entry(&vault, &args.id)?;
        ensure_unlocked(entry, ctx.now())?;
        (entry.id(), entry.content().to_string())
    };

    let editor = ctx.editor()?;
    let body = read_entry_body(
        args.no_input,
        args.body.clone(),
        editor.as_deref(),
        Some(&existing),
    )?;

    let notice = vault.replace_content(id, body, ctx.now())?;

    if !ctx.quiet() {
        let ui = ctx.ui_for_store(false, None, vault.store());
        let short = short_id(&id);
        print(
            &ui,
            &receipt(&ui, t(ui.language, notice.message_key()), &[("ID", &short)]),
        );
    }
    Ok(())
}
