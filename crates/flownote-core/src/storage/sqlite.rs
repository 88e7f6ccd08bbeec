//! SQLite-backed local store.
//!
//! A single table of string keys and string values. Each `set_item` is one
//! upsert statement, so a value is always replaced as a whole.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};

use super::traits::LocalStore;
use crate::error::{FlownoteError, Result};
use crate::fs::ensure_parent_dir;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS local_storage (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Durable `LocalStore` in a SQLite file.
pub struct SqliteStore {
    path: PathBuf,
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at `path`, creating the file and table if needed.
    pub fn open(path: &Path) -> Result<Self> {
        ensure_parent_dir(path)?;
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        log::debug!(
            "event=store_open module=storage status=ok path={}",
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
            conn,
        })
    }

    /// Open a store that must already exist.
    ///
    /// # Errors
    ///
    /// Returns `FlownoteError::NotFound` if no file exists at `path`.
    pub fn open_existing(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FlownoteError::NotFound(format!(
                "Store file {} not found",
                path.display()
            )));
        }
        Self::open(path)
    }

    /// In-memory SQLite store, same semantics as the file-backed one.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run SQLite's own consistency check.
    ///
    /// # Errors
    ///
    /// Returns `FlownoteError::Storage` describing the first problem found.
    pub fn check_integrity(&self) -> Result<()> {
        let verdict: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if verdict != "ok" {
            return Err(FlownoteError::Storage(format!(
                "Integrity check failed: {}",
                verdict
            )));
        }
        Ok(())
    }
}

impl LocalStore for SqliteStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO local_storage (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            [key, value],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1", [key])?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM local_storage ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}
