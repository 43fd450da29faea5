//! File-based logger with size-based rotation.
//!
//! Logs are written to `~/.config/winplace/logs/winplace.log`. When the
//! file grows past the configured size it is moved to `winplace.log.1`
//! (one backup kept) and a fresh file is started.
//!
//! Lines written while a trigger is being handled carry its name, so the
//! window decisions of one snapshot or restore can be read together:
//!
//! ```text
//! 14:02:11 [DEBUG] [snapshot] Skipping window 0x1A2B: cloaked
//! ```

use std::cell::Cell;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "winplace.log";

thread_local! {
    static CONTEXT: Cell<Option<&'static str>> = const { Cell::new(None) };
}

/// Logging configuration, the `[logging]` table of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Parses a level name. Unknown names fall back to `Info`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    file: File,
    path: PathBuf,
    min_level: Level,
    max_bytes: u64,
    written: u64,
}

/// Initialises the global logger. Call once at startup.
///
/// Does nothing if `config.enabled` is `false` or the log file cannot
/// be opened; logging is never fatal.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let log_dir = dir.join("logs");
    let _ = fs::create_dir_all(&log_dir);
    let path = log_dir.join(LOG_FILE_NAME);

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let written = file.metadata().map(|m| m.len()).unwrap_or(0);

    let logger = Logger {
        file,
        path,
        min_level: Level::parse(&config.level),
        max_bytes: config.max_file_mb * 1024 * 1024,
        written,
    };

    let _ = LOGGER.set(Mutex::new(logger));
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format_line(&timestamp(), level, context(), args);

    let _ = logger.file.write_all(line.as_bytes());
    logger.written += line.len() as u64;

    if logger.max_bytes > 0 && logger.written >= logger.max_bytes {
        logger.rotate();
    }
}

/// Tags every line this thread logs with `name` until the guard drops.
///
/// Scopes nest; dropping the guard restores the outer context.
pub fn scope(name: &'static str) -> ScopeGuard {
    let previous = CONTEXT.with(|c| c.replace(Some(name)));
    ScopeGuard { previous }
}

/// Restores the previous log context when dropped.
#[must_use = "the context is cleared as soon as the guard is dropped"]
pub struct ScopeGuard {
    previous: Option<&'static str>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        CONTEXT.with(|c| c.set(self.previous));
    }
}

/// The context set by the innermost live [`scope`] on this thread.
pub fn context() -> Option<&'static str> {
    CONTEXT.with(Cell::get)
}

fn format_line(
    time: &str,
    level: Level,
    context: Option<&str>,
    args: fmt::Arguments<'_>,
) -> String {
    match context {
        Some(ctx) => format!("{time} [{}] [{ctx}] {args}\n", level.as_str()),
        None => format!("{time} [{}] {args}\n", level.as_str()),
    }
}

impl Logger {
    fn rotate(&mut self) {
        let backup = backup_path(&self.path);
        let _ = fs::rename(&self.path, &backup);
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.written = 0;
    }
}

/// `winplace.log` -> `winplace.log.1`
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".1");
    PathBuf::from(name)
}

fn timestamp() -> String {
    // UTC wall clock, time of day only.
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parse_is_case_insensitive_with_info_fallback() {
        // Assert
        assert_eq!(Level::parse("DEBUG"), Level::Debug);
        assert_eq!(Level::parse("Warn"), Level::Warn);
        assert_eq!(Level::parse("error"), Level::Error);
        assert_eq!(Level::parse("verbose"), Level::Info);
    }

    #[test]
    fn backup_path_appends_suffix() {
        // Act
        let backup = backup_path(Path::new("logs/winplace.log"));

        // Assert
        assert_eq!(backup, PathBuf::from("logs/winplace.log.1"));
    }

    #[test]
    fn line_carries_context_when_set() {
        // Act
        let tagged = format_line("01:02:03", Level::Warn, Some("restore"), format_args!("x {}", 1));
        let plain = format_line("01:02:03", Level::Info, None, format_args!("ready"));

        // Assert
        assert_eq!(tagged, "01:02:03 [WARN] [restore] x 1\n");
        assert_eq!(plain, "01:02:03 [INFO] ready\n");
    }

    #[test]
    fn nested_scopes_restore_outer_context() {
        // Arrange
        let outer = scope("snapshot");

        // Act
        {
            let _inner = scope("restore");
            assert_eq!(context(), Some("restore"));
        }

        // Assert
        assert_eq!(context(), Some("snapshot"));
        drop(outer);
        assert_eq!(context(), None);
    }

    #[test]
    fn levels_order_by_severity() {
        // Assert
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
    }
}
