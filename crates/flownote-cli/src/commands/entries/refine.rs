use flownote_core::{t, FlownoteError, MessageKey, RefinementError};

use crate::app::AppContext;
use crate::cli::RefineArgs;
use crate::errors::CliError;
use crate::ui::prompt::{print_cancelled, prompt_confirm};
use crate::ui::{
    badge, blank_line, hint, print, receipt, short_id, table, Badge, Column, Review, Spinner,
    UiContext,
};

use super::{ensure_unlocked, resolve_entry};

pub fn handle_refine(ctx: &AppContext, args: &RefineArgs) -> anyhow::Result<()> {
    let mut vault = ctx.open_vault()?;
    let id = {
        let entry = resolve_entry(&vault, &args.id)?;
        ensure_unlocked(entry, ctx.now())?;
        entry.id()
    };

    let ui = ctx.ui_for_store(args.json, None, vault.store());
    let refiner = ctx.refiner()?;

    let message = t(ui.language, MessageKey::Refining).trim_end_matches("...");
    let spinner = Spinner::new(&ui, message);
    if !ctx.quiet() && !ui.mode.is_json() {
        spinner.start();
    }
    let outcome = vault.refine(id, &refiner, ctx.now());
    spinner.clear();

    let candidate = match outcome {
        Ok(candidate) => candidate,
        Err(FlownoteError::Refinement(err)) => {
            return Err(CliError::refinement_failed(
                format!("{} ({})", t(ui.language, MessageKey::RefineError), err),
                Some(refinement_hint(&err).to_string()),
            )
            .into())
        }
        Err(err) => return Err(err.into()),
    };

    let review = if candidate.is_unchanged() {
        Review::Report
    } else {
        ui.mode.review(args.apply, args.no_input, ui.is_interactive())
    };
    let apply = match review {
        Review::Apply => true,
        Review::Ask => {
            print_comparison(&ui, &candidate.original, &candidate.polished);
            prompt_confirm(&format!("{}?", t(ui.language, MessageKey::UsePolished)), true)?
        }
        Review::Report => false,
    };

    if ui.mode.is_json() {
        let output = serde_json::json!({
            "id": id,
            "original": &candidate.original,
            "polished": &candidate.polished,
            "changed": !candidate.is_unchanged(),
            "applied": apply,
        });
        if apply {
            candidate.apply(&mut vault, ctx.now())?;
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if candidate.is_unchanged() {
        if !ctx.quiet() {
            print(&ui, &badge(&ui, Badge::Info, "No typos found; the entry is unchanged."));
        }
        return Ok(());
    }

    if apply {
        let short = short_id(&id);
        let notice = candidate.apply(&mut vault, ctx.now())?;
        if !ctx.quiet() {
            print(
                &ui,
                &receipt(&ui, t(ui.language, notice.message_key()), &[("ID", &short)]),
            );
        }
        return Ok(());
    }

    if review == Review::Report {
        // Nothing was asked, so show the candidate and how to keep it.
        print_comparison(&ui, &candidate.original, &candidate.polished);
        blank_line(&ui);
        let next = format!("flownote refine {} --apply", short_id(&id));
        print(&ui, &hint(&ui, &next));
    } else {
        print_cancelled(&ui, t(ui.language, MessageKey::Refine));
    }
    Ok(())
}

fn print_comparison(ui: &UiContext, original: &str, polished: &str) {
    let columns = [
        Column::new(t(ui.language, MessageKey::Original)),
        Column::new(t(ui.language, MessageKey::Polished)),
    ];
    let rows = vec![vec![original.to_string(), polished.to_string()]];
    if ui.mode.is_pretty() {
        print(ui, &table(ui, &columns, &rows));
    } else {
        print(ui, &format!("original={}", original.replace('\n', "\\n")));
        print(ui, &format!("polished={}", polished.replace('\n', "\\n")));
    }
}

fn refinement_hint(err: &RefinementError) -> &'static str {
    match err {
        RefinementError::NotConfigured(_) => {
            "Hint: Set FLOWNOTE_API_KEY (or GEMINI_API_KEY) to enable refinement."
        }
        RefinementError::Quota => {
            "Hint: The service is rate limiting requests; wait a moment and retry."
        }
        RefinementError::Transport { .. } => {
            "Hint: Check your network connection and retry; the entry is unchanged."
        }
        _ => "Hint: Retry later; the entry is unchanged.",
    }
}
