//! Debug log file sink
//!
//! Logs are written to `~/.sshm/logs/sshm.log` with timestamps and log levels.
//! The file is opened lazily on the first message so runs without `--debug`
//! never touch the filesystem.

use super::{LogError, LogLevel, formatter::LogFormatter};
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

#[cfg(unix)]
const PRIVATE_LOG_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_LOG_FILE_MODE: u32 = 0o600;

/// Debug logger that writes formatted log messages to a file
pub(super) struct DebugLogger {
    formatter: LogFormatter,
    /// Explicit log file location; `None` resolves under the home directory.
    log_path: Option<PathBuf>,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl DebugLogger {
    pub(super) fn new() -> Self {
        Self {
            formatter: LogFormatter::new(true, true),
            log_path: None,
            writer: Mutex::new(None),
        }
    }

    #[cfg(test)]
    pub(super) fn with_path(log_path: PathBuf) -> Self {
        Self {
            formatter: LogFormatter::new(false, true),
            log_path: Some(log_path),
            writer: Mutex::new(None),
        }
    }

    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let mut guard = self.lock_writer()?;
        if guard.is_none() {
            *guard = Some(BufWriter::new(self.create_log_file()?));
        }

        let formatted = self.formatter.format(Some(level), message);
        if let Some(writer) = guard.as_mut() {
            writer.write_all(formatted.as_bytes())?;
            writer.write_all(b"\n")?;
            // The process may exec into ssh at any time, so do not hold lines back.
            writer.flush()?;
        }
        Ok(())
    }

    pub(super) fn flush(&self) -> Result<(), LogError> {
        let mut guard = self.lock_writer()?;
        if let Some(writer) = guard.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    fn lock_writer(&self) -> Result<MutexGuard<'_, Option<BufWriter<File>>>, LogError> {
        self.writer.lock().map_err(|_| LogError::LockPoisoned)
    }

    fn create_log_file(&self) -> Result<File, LogError> {
        let log_path = match &self.log_path {
            Some(path) => path.clone(),
            None => Self::get_debug_log_path()?,
        };
        if let Some(parent) = log_path.parent() {
            create_private_directory(parent)?;
        }
        open_private_append_file(&log_path)
    }

    fn get_debug_log_path() -> Result<PathBuf, LogError> {
        let home_dir = dirs::home_dir().ok_or_else(|| LogError::DirectoryCreationError("Home directory not found".to_string()))?;
        Ok(home_dir.join(".sshm").join("logs").join("sshm.log"))
    }
}

fn create_private_directory(path: &Path) -> Result<(), LogError> {
    fs::create_dir_all(path).map_err(|err| LogError::DirectoryCreationError(format!("{}: {}", path.display(), err)))?;
    set_private_directory_permissions(path)
}

fn open_private_append_file(path: &Path) -> Result<File, LogError> {
    let mut options = OpenOptions::new();
    options
        .create(true) // Create if missing.
        .append(true); // Preserve existing logs.
    #[cfg(unix)]
    {
        options.mode(PRIVATE_LOG_FILE_MODE);
    }
    let file = options.open(path)?;
    set_private_file_permissions(path)?;
    Ok(file)
}

#[cfg(unix)]
fn set_private_directory_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_DIR_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_directory_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(unix)]
fn set_private_file_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_FILE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_file_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(test)]
#[path = "../test/log/debug.rs"]
mod tests;
