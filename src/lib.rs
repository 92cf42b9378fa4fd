//! # datelog
//!
//! A lightweight file-backed logger with date-stamped file names, level
//! filtering, and best-effort retention.
//!
//! ## Features
//!
//! - **Date-Stamped Files**: `<prefix>_<date>.log` names derived from a
//!   `DateTime`-style pattern, resolved once at construction
//! - **Level Filtering**: closed level set with a runtime-adjustable
//!   threshold
//! - **Best-Effort Retention**: oldest prefix-matching files pruned at
//!   construction when a cap is set
//! - **Never Breaks the Host**: every write and sweep failure is swallowed
//! - **Thread Safe**: callable from any thread; lines never interleave

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        FileLogger, FileLoggerBuilder, LogLevel, LogRecord, LoggerError, NamePattern, Result,
        SinkConfig,
    };
}

pub use crate::core::{
    FileLogger, FileLoggerBuilder, LogLevel, LogRecord, LoggerError, NamePattern, Result,
    SinkConfig, DEFAULT_PREFIX, EXTENSION,
};
