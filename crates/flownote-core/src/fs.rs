//! Filesystem helpers for whole-file replacement.
//!
//! The store itself is a SQLite file and relies on SQLite for durability;
//! these helpers cover the places that write plain files next to it
//! (backups, freshly created parent directories).

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{FlownoteError, Result};

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                FlownoteError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

/// Write `data` to `destination` through a synced temp file and a rename.
///
/// Readers never observe a half-written destination.
pub fn write_atomic(destination: &Path, data: &[u8]) -> Result<()> {
    ensure_parent_dir(destination)?;
    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let filename = destination
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| FlownoteError::Storage("Invalid destination filename".to_string()))?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| FlownoteError::Storage(format!("System time error: {}", e)))?
        .as_nanos();
    let temp_path = parent.join(format!(".{}.{}.tmp", filename, nanos));

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|e| FlownoteError::Storage(format!("Temp file create failed: {}", e)))?;
    file.write_all(data)
        .map_err(|e| FlownoteError::Storage(format!("Temp file write failed: {}", e)))?;
    file.sync_all()
        .map_err(|e| FlownoteError::Storage(format!("Temp file sync failed: {}", e)))?;
    drop(file);

    rename_with_fallback(&temp_path, destination)
        .map_err(|e| FlownoteError::Storage(format!("Atomic rename failed: {}", e)))
}

/// Copy `source` over `destination` atomically.
pub fn copy_atomic(source: &Path, destination: &Path) -> Result<u64> {
    let bytes = fs::read(source).map_err(|e| {
        FlownoteError::Storage(format!("Failed to read {}: {}", source.display(), e))
    })?;
    write_atomic(destination, &bytes)?;
    Ok(bytes.len() as u64)
}

/// Rename, retrying after removing the destination on platforms where
/// `fs::rename` refuses to replace an existing file. The temp file is removed
/// if both attempts fail.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("nested").join("backup.db");

        write_atomic(&dest, b"payload").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"payload");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("backup.db");
        fs::write(&dest, b"old").unwrap();

        write_atomic(&dest, b"new").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_copy_atomic_reports_size() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("store.db");
        let dest = dir.path().join("copy.db");
        fs::write(&src, b"0123456789").unwrap();

        let copied = copy_atomic(&src, &dest).unwrap();

        assert_eq!(copied, 10);
        assert_eq!(fs::read(&dest).unwrap(), b"0123456789");
    }

    #[test]
    fn test_copy_atomic_missing_source_fails() {
        let dir = tempdir().unwrap();
        let result = copy_atomic(&dir.path().join("missing"), &dir.path().join("dest"));
        assert!(matches!(result, Err(FlownoteError::Storage(_))));
    }
}
