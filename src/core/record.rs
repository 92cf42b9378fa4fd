//! Log record structure and line rendering

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// Timestamp layout for rendered records. The hour field is 12-hour (`%I`)
/// with no AM/PM marker; preserved from the original wire format even
/// though it makes timestamps ambiguous.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S%.3f";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            message,
        }
    }

    /// Render the record as a single line:
    /// `<timestamp> <LEVEL>\t- <message><EOL>`.
    ///
    /// The message is written verbatim; embedded newlines produce
    /// multi-physical-line records.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{} {}\t- {}{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level.to_str(),
            self.message,
            LINE_ENDING
        )
    }
}
