//! Sink configuration: name-pattern parsing and log-file path derivation

use super::date_pattern;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Prefix used when the name pattern carries no date component.
pub const DEFAULT_PREFIX: &str = "Log";

/// File extension for every log file this crate writes.
pub const EXTENSION: &str = ".log";

/// A parsed `<prefix>_<date-pattern>` file-name pattern.
///
/// The date component is resolved against the wall clock once, at parse
/// time; the resulting file name never changes for the lifetime of the
/// logger.
#[derive(Debug, Clone)]
pub struct NamePattern {
    raw: String,
    prefix: String,
    date_component: String,
}

impl NamePattern {
    /// Split `pattern` on `'_'`. With two or more tokens the first is the
    /// prefix and the second is a date pattern formatted against `now`;
    /// otherwise the prefix falls back to [`DEFAULT_PREFIX`] with an empty
    /// date component. Tokens beyond the second are ignored.
    #[must_use]
    pub fn parse(pattern: &str, now: &DateTime<Local>) -> Self {
        let mut tokens = pattern.split('_');
        let first = tokens.next();
        match (first, tokens.next()) {
            (Some(prefix), Some(date_token)) => Self {
                raw: pattern.to_string(),
                prefix: prefix.to_string(),
                date_component: date_pattern::format_local(now, date_token),
            },
            _ => Self {
                raw: pattern.to_string(),
                prefix: DEFAULT_PREFIX.to_string(),
                date_component: String::new(),
            },
        }
    }

    /// The pattern string as supplied, before any parsing.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn date_component(&self) -> &str {
        &self.date_component
    }

    /// `<prefix>_<date_component>.log`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}_{}{}", self.prefix, self.date_component, EXTENSION)
    }
}

/// Immutable path configuration for one logger instance.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Directory the log file lives in; treated as an opaque string.
    pub directory: String,
    /// Separator placed between directory and file name. Defaults to the
    /// platform separator; set to `'\\'` for Windows-style path strings.
    pub separator: char,
    pub pattern: NamePattern,
    /// Retention cap; 0 disables the construction-time sweep.
    pub max_files: usize,
}

impl SinkConfig {
    /// Derive the log file path. The directory, separator, and file name
    /// are concatenated as strings; no normalization is applied.
    #[must_use]
    pub fn log_file_path(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}{}{}",
            self.directory,
            self.separator,
            self.pattern.file_name()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 15, 9, 7, 2)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_parse_prefix_and_date() {
        let pattern = NamePattern::parse("App_yyyyMMdd", &fixed_now());
        assert_eq!(pattern.prefix(), "App");
        assert_eq!(pattern.date_component(), "20240315");
        assert_eq!(pattern.file_name(), "App_20240315.log");
    }

    #[test]
    fn test_parse_without_underscore_falls_back() {
        let pattern = NamePattern::parse("Plain", &fixed_now());
        assert_eq!(pattern.prefix(), "Log");
        assert_eq!(pattern.date_component(), "");
        assert_eq!(pattern.file_name(), "Log_.log");
        assert_eq!(pattern.raw(), "Plain");
    }

    #[test]
    fn test_parse_ignores_extra_tokens() {
        let pattern = NamePattern::parse("Svc_yyyy_ignored_also", &fixed_now());
        assert_eq!(pattern.prefix(), "Svc");
        assert_eq!(pattern.date_component(), "2024");
        assert_eq!(pattern.file_name(), "Svc_2024.log");
    }

    #[test]
    fn test_parse_empty_date_token() {
        let pattern = NamePattern::parse("App_", &fixed_now());
        assert_eq!(pattern.prefix(), "App");
        assert_eq!(pattern.date_component(), "");
        assert_eq!(pattern.file_name(), "App_.log");
    }

    #[test]
    fn test_windows_style_path() {
        let config = SinkConfig {
            directory: "C:\\logs".to_string(),
            separator: '\\',
            pattern: NamePattern::parse("App_yyyyMMdd", &fixed_now()),
            max_files: 0,
        };
        assert_eq!(
            config.log_file_path(),
            PathBuf::from("C:\\logs\\App_20240315.log")
        );
    }

    #[test]
    fn test_platform_path() {
        let config = SinkConfig {
            directory: "/var/log".to_string(),
            separator: '/',
            pattern: NamePattern::parse("Plain", &fixed_now()),
            max_files: 0,
        };
        assert_eq!(config.log_file_path(), PathBuf::from("/var/log/Log_.log"));
    }
}
