//! Local store abstraction and backends.
//!
//! State lives under three fixed keys, mirroring the namespaced local
//! storage records of the browser build:
//!
//! - [`VAULT_KEY`]: JSON array of sealed entries
//! - [`LANGUAGE_KEY`]: selected display language
//! - [`THEME_KEY`]: selected visual theme

mod memory;
mod sqlite;
mod traits;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::LocalStore;

/// Key holding the serialized entry list.
pub const VAULT_KEY: &str = "flownote_vault";

/// Key holding the display language.
pub const LANGUAGE_KEY: &str = "flownote_lang";

/// Key holding the visual theme.
pub const THEME_KEY: &str = "flownote_theme";
