//! File logging bootstrap.
//!
//! Log lines are metadata only (`event=... module=... status=...`); entry
//! content and API keys never reach the log. Initialization happens at most
//! once per process, and callers are expected to carry on without logging
//! if it fails.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;

use crate::error::{FlownoteError, Result};

const LOG_FILE_BASENAME: &str = "flownote";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Start file logging at `level` under `log_dir`.
///
/// Repeating the call with the same settings is a no-op.
///
/// # Errors
///
/// `InvalidInput` for an unknown level, a relative directory, or a second
/// call with different settings; `Storage` when the directory or backend
/// cannot be set up.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<()> {
    let level = normalize_level(level)?;
    if !log_dir.is_absolute() {
        return Err(FlownoteError::InvalidInput(format!(
            "log directory must be absolute, got {}",
            log_dir.display()
        )));
    }

    let state = LOGGING_STATE.get_or_try_init(|| start(level, log_dir))?;
    if state.log_dir != log_dir || state.level != level {
        return Err(FlownoteError::InvalidInput(format!(
            "logging already active at level {} in {}",
            state.level,
            state.log_dir.display()
        )));
    }
    Ok(())
}

fn start(level: &'static str, log_dir: &Path) -> Result<LoggingState> {
    std::fs::create_dir_all(log_dir)?;
    let handle = Logger::try_with_str(level)
        .map_err(|err| FlownoteError::InvalidInput(format!("invalid log level {}: {}", level, err)))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| FlownoteError::Storage(format!("failed to start logger: {}", err)))?;

    log::info!(
        "event=app_start module=core status=ok platform={} version={} level={}",
        std::env::consts::OS,
        crate::VERSION,
        level
    );
    Ok(LoggingState {
        level,
        log_dir: log_dir.to_path_buf(),
        _handle: handle,
    })
}

/// Active `(level, directory)`, if logging was started.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// `debug` in debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(FlownoteError::InvalidInput(format!(
            "unsupported log level '{}' (trace, debug, info, warn, error, off)",
            other
        ))),
    }
}
