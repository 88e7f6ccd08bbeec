use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use flownote_core::refine::RefinerConfig;

#[derive(Debug, Serialize, Deserialize)]
pub struct FlownoteConfig {
    pub store: StoreSection,
    #[serde(default)]
    pub refine: RefineSection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct RefineSection {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UiSection {
    pub timezone: Option<String>,
    pub editor: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub dir: Option<String>,
}

impl FlownoteConfig {
    pub fn new(store_path: PathBuf, timezone: Option<String>, editor: Option<String>) -> Self {
        Self {
            store: StoreSection {
                path: store_path.to_string_lossy().to_string(),
            },
            refine: RefineSection::default(),
            ui: UiSection { timezone, editor },
            logging: LoggingSection::default(),
        }
    }
}

impl RefineSection {
    /// Client settings with unset fields left at their defaults.
    pub fn to_refiner_config(&self) -> RefinerConfig {
        let mut config = RefinerConfig::default();
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        config
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("flownote.db"))
}

pub fn default_log_dir() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("logs"))
}

pub fn read_config(path: &Path) -> anyhow::Result<FlownoteConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &FlownoteConfig) -> anyhow::Result<()> {
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    flownote_core::fs::write_atomic(path, contents.as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("flownote"));
        }
    }
    Ok(home_dir()?.join(".config").join("flownote"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("flownote"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("flownote"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses_with_defaults() {
        let config: FlownoteConfig = toml::from_str("[store]\npath = \"/tmp/f.db\"\n").unwrap();
        assert_eq!(config.store.path, "/tmp/f.db");
        assert!(config.ui.timezone.is_none());
        assert!(config.logging.level.is_none());
        assert_eq!(
            config.refine.to_refiner_config(),
            RefinerConfig::default()
        );
    }

    #[test]
    fn test_refine_overrides() {
        let config: FlownoteConfig = toml::from_str(
            "[store]\npath = \"x\"\n\n[refine]\nmodel = \"m\"\ntimeout_ms = 500\n",
        )
        .unwrap();
        let refiner = config.refine.to_refiner_config();
        assert_eq!(refiner.model, "m");
        assert_eq!(refiner.timeout_ms, 500);
        assert_eq!(refiner.endpoint, RefinerConfig::default().endpoint);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flownote").join("config.toml");
        let config = FlownoteConfig::new(
            PathBuf::from("/data/flownote.db"),
            Some("Asia/Shanghai".to_string()),
            None,
        );
        write_config(&path, &config).unwrap();

        let read = read_config(&path).unwrap();
        assert_eq!(read.store.path, "/data/flownote.db");
        assert_eq!(read.ui.timezone.as_deref(), Some("Asia/Shanghai"));
    }
}
