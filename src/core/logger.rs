//! Main logger implementation

use super::{
    config::{NamePattern, SinkConfig},
    error::{LoggerError, Result},
    log_level::LogLevel,
    record::LogRecord,
    retention,
};
use chrono::Local;
use parking_lot::{Mutex, RwLock};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// A file-backed leveled logger.
///
/// Writes one timestamped, level-tagged line per admitted call to a file
/// whose name is derived once, at construction, from a `<prefix>_<date>`
/// name pattern. Logging is best-effort: no method returns an error and no
/// method panics — a failed write is silently dropped.
///
/// Each admitted call opens the file, appends, and closes it again; no
/// handle is held between calls. The file is created by the first
/// successful write, never at construction.
///
/// # Examples
///
/// ```no_run
/// use datelog::prelude::*;
///
/// let logger = FileLogger::new("/var/log/myapp", "App_yyyyMMdd", 7, true, LogLevel::All);
/// logger.info("service started");
/// logger.error("connection refused");
///
/// logger.set_level(LogLevel::Info);
/// logger.debug("now filtered out");
/// ```
pub struct FileLogger {
    config: SinkConfig,
    logfile: PathBuf,
    enabled: AtomicBool,
    level: RwLock<LogLevel>,
    // Serializes appends so concurrent callers interleave at line
    // boundaries.
    write_lock: Mutex<()>,
}

impl FileLogger {
    /// Create a logger with the positional configuration:
    /// directory, `<prefix>_<date-pattern>` name pattern, retention cap
    /// (0 disables the sweep), enabled flag, and initial threshold.
    ///
    /// When `max_files > 0` the retention sweep runs once, here, before
    /// anything is written.
    pub fn new(
        directory: impl Into<String>,
        name_pattern: impl Into<String>,
        max_files: usize,
        enabled: bool,
        level: LogLevel,
    ) -> Self {
        Self::builder(directory, name_pattern)
            .max_files(max_files)
            .enabled(enabled)
            .level(level)
            .build()
    }

    /// Create a builder for `FileLogger`
    ///
    /// # Example
    /// ```no_run
    /// use datelog::prelude::*;
    ///
    /// let logger = FileLogger::builder("/var/log/myapp", "App_yyyyMMdd")
    ///     .max_files(7)
    ///     .level(LogLevel::Error)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder(
        directory: impl Into<String>,
        name_pattern: impl Into<String>,
    ) -> FileLoggerBuilder {
        FileLoggerBuilder::new(directory, name_pattern)
    }

    fn from_config(config: SinkConfig, enabled: bool, level: LogLevel) -> Self {
        if config.max_files > 0 {
            let _ = retention::sweep(
                &config.directory,
                config.pattern.raw(),
                config.max_files,
                config.pattern.date_component(),
            );
        }

        let logfile = config.log_file_path();
        Self {
            config,
            logfile,
            enabled: AtomicBool::new(enabled),
            level: RwLock::new(level),
            write_lock: Mutex::new(()),
        }
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Toggle writing. Does not touch the filesystem.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Change the admission threshold. Does not touch the filesystem.
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// The derived log file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.logfile
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    #[must_use]
    pub fn max_files(&self) -> usize {
        self.config.max_files
    }

    fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.enabled.load(Ordering::Relaxed) {
            return;
        }
        if !level.admitted_by(*self.level.read()) {
            return;
        }

        let record = LogRecord::new(level, message.into());
        let _guard = self.write_lock.lock();
        let _ = self.append(&record);
    }

    fn append(&self, record: &LogRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.logfile)
            .map_err(|e| {
                LoggerError::append(
                    self.logfile.display().to_string(),
                    format!("Failed to open: {}", e),
                )
            })?;
        file.write_all(record.render().as_bytes())
            .map_err(|e| {
                LoggerError::append(
                    self.logfile.display().to_string(),
                    format!("Failed to write record: {}", e),
                )
            })?;
        file.flush()?;
        Ok(())
    }
}

/// Builder for constructing `FileLogger` with a fluent API
///
/// Defaults: retention off, enabled, threshold `All`, platform path
/// separator.
pub struct FileLoggerBuilder {
    directory: String,
    name_pattern: String,
    max_files: usize,
    enabled: bool,
    level: LogLevel,
    separator: char,
}

impl FileLoggerBuilder {
    fn new(directory: impl Into<String>, name_pattern: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            name_pattern: name_pattern.into(),
            max_files: 0,
            enabled: true,
            level: LogLevel::All,
            separator: std::path::MAIN_SEPARATOR,
        }
    }

    /// Set the retention cap; 0 disables the construction-time sweep.
    #[must_use = "builder methods return a new value"]
    pub fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Set whether the logger starts enabled.
    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the initial admission threshold.
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Override the directory/file-name separator. Use `'\\'` to derive
    /// Windows-style path strings byte-exactly on any host.
    #[must_use = "builder methods return a new value"]
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Build the logger, resolving the date component against the wall
    /// clock and running the retention sweep when configured.
    pub fn build(self) -> FileLogger {
        let pattern = NamePattern::parse(&self.name_pattern, &Local::now());
        let config = SinkConfig {
            directory: self.directory,
            separator: self.separator,
            pattern,
            max_files: self.max_files,
        };
        FileLogger::from_config(config, self.enabled, self.level)
    }
}
