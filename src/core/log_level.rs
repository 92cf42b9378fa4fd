//! Log level definitions
//!
//! Levels are ordered by permissiveness of the configured threshold, not by
//! severity: a call at level `L` is written iff `L <= threshold`. `Info` is
//! therefore the strictest threshold (admits only `Info`) and `All` the most
//! permissive (admits everything). `All` is valid only as a threshold and is
//! never written as a record tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Info = 0,
    Debug = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    #[default]
    All = 5,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::All => "ALL",
        }
    }

    /// True when a call at `self` passes a threshold of `threshold`.
    #[inline]
    pub fn admitted_by(&self, threshold: LogLevel) -> bool {
        *self <= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "ALL" => Ok(LogLevel::All),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
