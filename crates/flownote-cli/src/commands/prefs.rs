use flownote_core::{Language, Preferences, Theme};

use crate::app::AppContext;
use crate::cli::{LangArgs, ThemeArgs};
use crate::ui::{badge, kv, print, Badge};

pub fn handle_lang(ctx: &AppContext, args: &LangArgs) -> anyhow::Result<()> {
    let mut vault = ctx.open_vault()?;
    let mut prefs = Preferences::load(vault.store())?;

    let Some(value) = args.language.as_deref() else {
        let ui = ctx.ui_for_store(false, None, vault.store());
        print(&ui, &kv(&ui, "Language", prefs.language.as_str()));
        return Ok(());
    };

    let language: Language = value.parse()?;
    prefs.set_language(vault.store_mut(), language)?;

    if !ctx.quiet() {
        let ui = ctx.ui_for_store(false, None, vault.store());
        print(
            &ui,
            &badge(&ui, Badge::Ok, &format!("Language set to {}", language)),
        );
    }
    Ok(())
}

pub fn handle_theme(ctx: &AppContext, args: &ThemeArgs) -> anyhow::Result<()> {
    let mut vault = ctx.open_vault()?;
    let mut prefs = Preferences::load(vault.store())?;

    let Some(value) = args.theme.as_deref() else {
        let ui = ctx.ui_for_store(false, None, vault.store());
        print(&ui, &kv(&ui, "Theme", prefs.theme.as_str()));
        return Ok(());
    };

    let theme: Theme = value.parse()?;
    prefs.set_theme(vault.store_mut(), theme)?;

    if !ctx.quiet() {
        let ui = ctx.ui_for_store(false, None, vault.store());
        print(&ui, &badge(&ui, Badge::Ok, &format!("Theme set to {}", theme)));
    }
    Ok(())
}
