use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{entry_detail, entry_json};
use crate::ui::{blank_line, header, print};

use super::{ensure_unlocked, resolve_entry};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let vault = ctx.open_vault()?;
    let now = ctx.now();
    let entry = resolve_entry(&vault, &args.id)?;
    ensure_unlocked(entry, now)?;

    let ui = ctx.ui_for_store(args.json, None, vault.store());

    if ui.mode.is_json() {
        let output = serde_json::to_string_pretty(&entry_json(entry, now))?;
        println!("{}", output);
        return Ok(());
    }

    if ctx.quiet() {
        println!("{}", entry.content());
        return Ok(());
    }

    if ui.mode.is_pretty() {
        print(&ui, &header(&ui, "show", None));
        blank_line(&ui);
    }
    for line in entry_detail(&ui, entry, ctx.timezone()?) {
        println!("{}", line);
    }
    Ok(())
}
