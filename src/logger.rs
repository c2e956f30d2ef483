//! File logging with explicit initialization and size-based rotation.
//!
//! The server cannot log to stdout (that is the LSP transport), so records go
//! to `~/.config/rsxls/server.log`, rotated to `server.log.old` when it grows
//! past 10 MiB. Initialization is explicit and happens once at startup; when
//! the log file cannot be opened the server falls back to `env_logger` on
//! stderr rather than failing to start.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};
use thiserror::Error;

/// Rotate the log once it grows past this size.
const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("no home directory")]
    NoHomeDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    AlreadySet(#[from] log::SetLoggerError),
}

/// Default log file location: `~/.config/rsxls/server.log`.
pub fn default_log_path() -> Option<PathBuf> {
    Some(
        dirs::home_dir()?
            .join(".config")
            .join("rsxls")
            .join("server.log"),
    )
}

struct FileLogger {
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let line = format!(
            "[{}.{:03}] [{}] [{}] {}\n",
            now.as_secs(),
            now.subsec_millis(),
            record.level(),
            record.target(),
            record.args()
        );

        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
        }

        // Warnings and errors also go to stderr so they reach the editor's
        // server output channel.
        if record.level() <= log::Level::Warn {
            eprintln!("{}", line.trim_end());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Initialize logging at the given level.
///
/// Tries the rotating file logger first and falls back to `env_logger` on
/// stderr when the log directory is unavailable.
pub fn init(level: LevelFilter) {
    if let Err(e) = init_file_logger(level) {
        // try_init: a second `init` call must degrade, not panic
        let _ = env_logger::Builder::new().filter_level(level).try_init();
        log::warn!("file logger unavailable ({e}); logging to stderr");
    }
}

fn init_file_logger(level: LevelFilter) -> Result<(), LoggerError> {
    let path = default_log_path().ok_or(LoggerError::NoHomeDir)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    rotate_if_needed(&path)?;

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
    }))?;
    log::set_max_level(level);
    log::info!("logger initialized at {} ({level})", path.display());
    Ok(())
}

/// Move an oversized log aside as `.old`, replacing any previous backup.
fn rotate_if_needed(path: &PathBuf) -> Result<(), LoggerError> {
    let Ok(meta) = fs::metadata(path) else {
        return Ok(()); // No log yet
    };
    if meta.len() > MAX_LOG_SIZE {
        let backup = path.with_extension("log.old");
        if backup.exists() {
            fs::remove_file(&backup)?;
        }
        fs::rename(path, &backup)?;
    }
    Ok(())
}

/// Raise or lower the active level after init (workspace settings arrive
/// later than process startup).
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
