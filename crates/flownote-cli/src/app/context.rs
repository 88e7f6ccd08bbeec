//! Application context for the FlowNote CLI.
//!
//! Bundles the parsed arguments with the lazily-loaded config file so
//! handlers don't thread paths and settings around.

use std::path::PathBuf;

use chrono_tz::Tz;
use once_cell::unsync::OnceCell;

use flownote_core::logging::{default_log_level, init_logging};
use flownote_core::refine::GeminiRefiner;
use flownote_core::{
    Clock, FlownoteError, LocalStore, Preferences, SqliteStore, SystemClock, Vault,
};

use crate::cli::Cli;
use crate::config::{default_log_dir, read_config, FlownoteConfig};
use crate::errors::CliError;
use crate::helpers::parse_timezone;
use crate::ui::UiContext;

use super::resolver::{missing_store_message, resolve_config_path, resolve_store_path};

/// Application context that bundles CLI args with the config file.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<FlownoteConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, if one exists. Loaded once.
    pub fn config(&self) -> anyhow::Result<Option<&FlownoteConfig>> {
        let loaded = self.config.get_or_try_init(|| -> anyhow::Result<_> {
            let path = resolve_config_path()?;
            if !path.exists() {
                return Ok(None);
            }
            read_config(&path).map(Some)
        })?;
        Ok(loaded.as_ref())
    }

    /// UI context from flags and environment, without stored preferences.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// UI context with the language and theme stored in `store`.
    pub fn ui_for_store<S: LocalStore + ?Sized>(
        &self,
        json: bool,
        format: Option<&str>,
        store: &S,
    ) -> UiContext {
        let prefs = Preferences::load(store).unwrap_or_default();
        self.ui_context(json, format)
            .with_preferences(prefs.language, prefs.theme)
    }

    /// Configured editor override, if any.
    pub fn editor(&self) -> anyhow::Result<Option<String>> {
        Ok(self.config()?.and_then(|c| c.ui.editor.clone()))
    }

    /// Configured display timezone, if any.
    pub fn timezone(&self) -> anyhow::Result<Option<Tz>> {
        match self.config()?.and_then(|c| c.ui.timezone.as_deref()) {
            Some(name) => parse_timezone(name).map(Some),
            None => Ok(None),
        }
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli, self.config()?)
    }

    /// Open the store, creating it on first use, and load the vault.
    pub fn open_vault(&self) -> anyhow::Result<Vault<SqliteStore>> {
        let path = self.store_path()?;
        let store = SqliteStore::open(&path)
            .map_err(|e| anyhow::anyhow!("Failed to open store {}: {}", path.display(), e))?;
        Ok(Vault::load(store)?)
    }

    /// Open a store that must already exist.
    pub fn open_existing_vault(&self) -> anyhow::Result<Vault<SqliteStore>> {
        let path = self.store_path()?;
        let store = match SqliteStore::open_existing(&path) {
            Ok(store) => store,
            Err(FlownoteError::NotFound(_)) => {
                return Err(CliError::not_found(
                    missing_store_message(&path),
                    "Hint: Run `flownote init` to create it.",
                )
                .into())
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Vault::load(store)?)
    }

    /// Refinement client built from `[refine]` and the API key env vars.
    pub fn refiner(&self) -> anyhow::Result<GeminiRefiner> {
        let config = self
            .config()?
            .map(|c| c.refine.to_refiner_config())
            .unwrap_or_default();
        GeminiRefiner::from_env(config).map_err(|err| {
            CliError::refinement_failed(
                err.to_string(),
                Some("Hint: Set FLOWNOTE_API_KEY (or GEMINI_API_KEY) to enable refinement.".to_string()),
            )
            .into()
        })
    }

    /// Current time in epoch milliseconds.
    pub fn now(&self) -> i64 {
        SystemClock.now_ms()
    }

    /// Start file logging. Level: `FLOWNOTE_LOG`, then `[logging] level`, then the build default.
    pub fn init_logging(&self) -> anyhow::Result<()> {
        let config = self.config()?;
        let level = std::env::var("FLOWNOTE_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| config.and_then(|c| c.logging.level.clone()))
            .unwrap_or_else(|| default_log_level().to_string());
        let dir = match config.and_then(|c| c.logging.dir.as_deref()) {
            Some(dir) => PathBuf::from(dir),
            None => default_log_dir()?,
        };
        init_logging(&level, &dir)?;
        Ok(())
    }
}
