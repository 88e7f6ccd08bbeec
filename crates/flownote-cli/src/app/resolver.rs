//! Path resolution for config and store files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, FlownoteConfig};

/// Resolve the config file path, checking FLOWNOTE_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("FLOWNOTE_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store path: `--store`/`FLOWNOTE_STORE`, then config, then the XDG default.
pub fn resolve_store_path(cli: &Cli, config: Option<&FlownoteConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.store.path));
    }
    default_store_path()
}

/// Error message when the store file is missing.
pub fn missing_store_message(path: &Path) -> String {
    format!(
        "No store found at {}\n\nRun:\n  flownote init\n\nOr seal a first entry:\n  flownote seal --body \"...\"",
        path.display()
    )
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "No config found at {}\nHint: Run `flownote init` to create one (defaults are used until then).",
        config_path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_store_flag_wins_over_config() {
        let cli = Cli::parse_from(["flownote", "--store", "/tmp/a.db", "doctor"]);
        let config = FlownoteConfig::new(PathBuf::from("/tmp/b.db"), None, None);
        let path = resolve_store_path(&cli, Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/a.db"));
    }

    #[test]
    fn test_messages_name_the_path() {
        assert!(missing_store_message(Path::new("/x/flownote.db")).contains("/x/flownote.db"));
        assert!(missing_config_message(Path::new("/x/config.toml")).contains("flownote init"));
    }
}
