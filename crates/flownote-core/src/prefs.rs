//! Display language and theme preferences.
//!
//! Each is a plain scalar in the store. Anything missing or unrecognized
//! falls back to English and the dark theme.

use std::fmt;
use std::str::FromStr;

use crate::error::{FlownoteError, Result};
use crate::storage::{LocalStore, LANGUAGE_KEY, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

impl FromStr for Language {
    type Err = FlownoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            other => Err(FlownoteError::InvalidInput(format!(
                "Unknown language '{}' (expected en or zh)",
                other
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Warm,
    Blue,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Warm, Theme::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Warm => "warm",
            Theme::Blue => "blue",
        }
    }
}

impl FromStr for Theme {
    type Err = FlownoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "warm" => Ok(Theme::Warm),
            "blue" => Ok(Theme::Blue),
            other => Err(FlownoteError::InvalidInput(format!(
                "Unknown theme '{}' (expected dark, warm or blue)",
                other
            ))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    /// Read both preferences, falling back per value.
    pub fn load<S: LocalStore + ?Sized>(store: &S) -> Result<Self> {
        let language = store
            .get_item(LANGUAGE_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        let theme = store
            .get_item(THEME_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Ok(Self { language, theme })
    }

    pub fn set_language<S: LocalStore + ?Sized>(
        &mut self,
        store: &mut S,
        language: Language,
    ) -> Result<()> {
        store.set_item(LANGUAGE_KEY, language.as_str())?;
        self.language = language;
        log::info!(
            "event=prefs_set module=prefs status=ok key={} value={}",
            LANGUAGE_KEY,
            language
        );
        Ok(())
    }

    pub fn set_theme<S: LocalStore + ?Sized>(&mut self, store: &mut S, theme: Theme) -> Result<()> {
        store.set_item(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        log::info!(
            "event=prefs_set module=prefs status=ok key={} value={}",
            THEME_KEY,
            theme
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_missing_values_fall_back() {
        let prefs = Preferences::load(&MemoryStore::new()).unwrap();
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_bogus_values_fall_back() {
        let store = MemoryStore::new()
            .with_item(LANGUAGE_KEY, "fr")
            .with_item(THEME_KEY, "blue");
        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.theme, Theme::Blue);
    }

    #[test]
    fn test_setters_persist() {
        let mut store = MemoryStore::new();
        let mut prefs = Preferences::default();
        prefs.set_language(&mut store, Language::Zh).unwrap();
        prefs.set_theme(&mut store, Theme::Warm).unwrap();

        assert_eq!(Preferences::load(&store).unwrap(), prefs);
        assert_eq!(store.get_item(THEME_KEY).unwrap().as_deref(), Some("warm"));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ZH".parse::<Language>().unwrap(), Language::Zh);
        assert!("green".parse::<Theme>().is_err());
    }
}
