use std::io::IsTerminal;
use std::path::PathBuf;

use flownote_core::{SqliteStore, VERSION};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, FlownoteConfig};
use crate::errors::CliError;
use crate::helpers::parse_timezone;
use crate::ui::prompt::prompt_input;
use crate::ui::theme::{styled, styles};
use crate::ui::{blank_line, hint, print, receipt, UiContext};

/// Print a step indicator for the wizard flow.
fn print_step(ctx: &UiContext, step: usize, total: usize, title: &str) {
    if !ctx.mode.is_pretty() {
        return;
    }
    let progress = styled(&format!("{}/{}", step, total), styles::dim(), ctx.color);
    println!("{}  {}", progress, styled(title, styles::bold(), ctx.color));
}

/// Empty or "auto" means the system timezone.
fn normalize_timezone(value: &str) -> anyhow::Result<Option<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    Ok(Some(parse_timezone(trimmed)?.to_string()))
}

fn normalize_editor(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let no_input = args.no_input || !interactive;
    let ui = ctx.ui_context(false, None);

    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}. Re-run with --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    if !ctx.quiet() && !no_input && ui.mode.is_pretty() {
        let title = styled("FlowNote", styles::bold(), ui.color);
        println!("{} \u{00B7} init", title);
        println!("{}", styled(&format!("v{}", VERSION), styles::dim(), ui.color));
        blank_line(&ui);
    }

    let store_path = match args.path.clone().or_else(|| ctx.cli().store.clone()) {
        Some(value) => PathBuf::from(value),
        None if no_input => default_store_path()?,
        None => {
            print_step(&ui, 1, 3, "Choose location");
            let default = default_store_path()?.to_string_lossy().to_string();
            PathBuf::from(prompt_input("Store file location", Some(&default))?)
        }
    };

    let timezone = match args.timezone.as_deref() {
        Some(value) => normalize_timezone(value)?,
        None if no_input => None,
        None => {
            print_step(&ui, 2, 3, "Timezone (IANA name, or auto)");
            normalize_timezone(&prompt_input("Timezone", Some("auto"))?)?
        }
    };

    let editor = match args.editor.as_deref() {
        Some(value) => normalize_editor(value),
        None if no_input => None,
        None => {
            print_step(&ui, 3, 3, "Editor for seal and edit");
            let default = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            normalize_editor(&prompt_input("Editor", Some(&default))?)
        }
    };

    let config = FlownoteConfig::new(store_path.clone(), timezone, editor);
    write_config(&config_path, &config)?;
    SqliteStore::open(&store_path)
        .map_err(|e| anyhow::anyhow!("Failed to create store {}: {}", store_path.display(), e))?;

    log::info!(
        "event=init module=cli status=ok store={} config={}",
        store_path.display(),
        config_path.display()
    );

    if !ctx.quiet() {
        let store = store_path.display().to_string();
        let config = config_path.display().to_string();
        if !no_input {
            blank_line(&ui);
        }
        print(
            &ui,
            &receipt(&ui, "Initialized", &[("Store", &store), ("Config", &config)]),
        );
        print(&ui, &hint(&ui, "flownote write  \u{00B7}  flownote seal --body \"...\""));
    }
    Ok(())
}
