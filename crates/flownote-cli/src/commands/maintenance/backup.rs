use std::path::Path;

use flownote_core::fs::copy_atomic;

use crate::app::AppContext;
use crate::cli::BackupArgs;
use crate::ui::{format_bytes, print, receipt, Spinner};

pub fn handle_backup(ctx: &AppContext, args: &BackupArgs) -> anyhow::Result<()> {
    // Fails with a not-found error before anything is copied.
    let vault = ctx.open_existing_vault()?;
    let source = vault.store().path().to_path_buf();
    drop(vault);

    let destination = Path::new(&args.destination);
    if destination == source {
        return Err(anyhow::anyhow!("Backup destination is the store itself"));
    }

    let ui = ctx.ui_context(false, None);
    let spinner = Spinner::new(&ui, "Backing up");
    if !ctx.quiet() {
        spinner.start();
    }
    let bytes = match copy_atomic(&source, destination) {
        Ok(bytes) => bytes,
        Err(err) => {
            spinner.clear();
            return Err(anyhow::anyhow!(
                "Backup to {} failed: {}",
                destination.display(),
                err
            ));
        }
    };
    spinner.clear();
    if bytes == 0 {
        return Err(anyhow::anyhow!("Backup failed: zero bytes written"));
    }

    log::info!(
        "event=backup module=cli status=ok bytes={} dest={}",
        bytes,
        destination.display()
    );
    if !ctx.quiet() {
        let dest = destination.display().to_string();
        let size = format_bytes(bytes);
        print(
            &ui,
            &receipt(&ui, "Backed up", &[("Destination", &dest), ("Size", &size)]),
        );
    }
    Ok(())
}
